use crate::tests::test_utils::*;
use crate::*;
use near_sdk::serde_json::json;
use near_sdk::testing_env;

#[test]
fn create_market_emits_one_event() {
    let mut contract = new_contract();
    testing_env!(context(creator()).build());
    contract.create_market("Arcade".into()).unwrap();

    let events = events();
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.standard, "onsocial");
    assert_eq!(event.version, "1.0.0");
    assert_eq!(event.event, "MARKET_UPDATE");

    let data = &event.data[0];
    assert_eq!(data.operation, "create");
    assert_eq!(data.author, creator().to_string());
    assert_eq!(data.extra["market_id"], json!("0"));
    assert_eq!(data.extra["name"], json!("Arcade"));
}

#[test]
fn internal_operations_do_not_log() {
    let mut contract = new_contract();
    testing_env!(context(creator()).build());
    setup_market(&mut contract);
    assert!(events().is_empty());
}

#[test]
fn failed_call_emits_nothing() {
    let mut contract = new_contract();
    testing_env!(context(buyer()).build());
    assert!(contract.transfer_market_ownership(0, creator()).is_err());
    assert!(contract.create_item(0, 0).is_err());
    assert!(events().is_empty());
}

#[test]
fn renounce_event_names_previous_owner() {
    let mut contract = new_contract();
    let market_id = setup_market(&mut contract);

    testing_env!(context(creator()).build());
    contract.transfer_market_ownership(market_id, buyer()).unwrap();
    testing_env!(context(buyer()).build());
    contract.renounce_market_ownership(market_id).unwrap();

    let events = events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].data[0].operation, "ownership_renounced");
    assert_eq!(
        events[0].data[0].extra["previous_owner"],
        json!(buyer().to_string())
    );
}

#[test]
fn item_events() {
    let mut contract = new_contract();
    let market_id = setup_market(&mut contract);
    let t = setup_item_type(&mut contract, market_id, 0);

    testing_env!(context(creator()).build());
    let item_id = contract.create_item(market_id, t).unwrap();
    contract
        .transfer_item_ownership(market_id, item_id, buyer())
        .unwrap();

    let events = events();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.event == "ITEM_UPDATE"));
    assert_eq!(events[0].data[0].operation, "create");
    assert_eq!(events[0].data[0].extra["item_type_id"], json!("0"));
    assert!(events[0].data[0].extra.get("channel").is_none());
    assert_eq!(events[1].data[0].operation, "ownership_transferred");
    assert_eq!(
        events[1].data[0].extra["new_owner"],
        json!(buyer().to_string())
    );
}

#[test]
fn release_events_cover_lifecycle() {
    let mut contract = new_contract();
    let market_id = setup_market(&mut contract);
    let t0 = setup_item_type(&mut contract, market_id, 0);
    let t1 = setup_item_type(&mut contract, market_id, 0);

    testing_env!(context(creator()).build());
    let release_id = contract
        .create_sale_release(market_id, vec![t1, t0], 2, U128(9), true)
        .unwrap();
    contract
        .update_sale_release(market_id, release_id, 2, U128(9), true)
        .unwrap();
    let created = events();
    assert_eq!(created.len(), 2);
    assert_eq!(created[0].event, "SALE_RELEASE_UPDATE");
    assert_eq!(created[0].data[0].extra["item_type_ids"], json!(["0", "1"]));
    assert_eq!(created[0].data[0].extra["price"], json!("9"));
    assert_eq!(created[1].data[0].operation, "update");

    testing_env!(context_with_deposit(buyer(), 12).build());
    contract
        .buy_sale_release(market_id, release_id, buyer())
        .unwrap();
    let bought = events();
    assert_eq!(bought.len(), 1);
    let data = &bought[0].data[0];
    assert_eq!(data.operation, "buy");
    assert_eq!(data.author, buyer().to_string());
    assert_eq!(data.extra["item_ids"], json!(["0", "1"]));
    assert_eq!(data.extra["paid"], json!("12"));

    testing_env!(context(creator()).build());
    contract.remove_sale_release(market_id, release_id).unwrap();
    assert_eq!(events()[0].data[0].operation, "remove");
}

#[test]
fn subscriber_events_report_changes() {
    let mut contract = new_contract();
    testing_env!(context(owner()).build());
    contract.subscribe(game_contract()).unwrap();
    contract.unsubscribe(game_contract()).unwrap();
    contract.unsubscribe(game_contract()).unwrap();

    let events = events();
    assert_eq!(events.len(), 3);
    assert!(events.iter().all(|e| e.event == "SUBSCRIBER_UPDATE"));
    assert_eq!(events[0].data[0].extra["added"], json!(true));
    assert_eq!(events[1].data[0].extra["removed"], json!(true));
    assert_eq!(events[2].data[0].extra["removed"], json!(false));
}

#[test]
fn subscriber_mint_event_names_channel() {
    let mut contract = new_contract();
    contract
        .internal_subscribe(&owner(), game_contract())
        .unwrap();
    let market_id = setup_market(&mut contract);
    let t = setup_item_type(&mut contract, market_id, 0);

    testing_env!(context(game_contract()).build());
    contract
        .mint_item_for(market_id, t, buyer(), ItemChannel::Sale)
        .unwrap();

    let data = &events()[0].data[0];
    assert_eq!(data.author, game_contract().to_string());
    assert_eq!(data.extra["channel"], json!("sale"));
    assert_eq!(data.extra["owner_id"], json!(buyer().to_string()));
}

#[test]
fn contract_events_for_admin_calls() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract
        .update_config(LedgerConfigUpdate {
            max_page_size: Some(20),
            ..Default::default()
        })
        .unwrap();
    contract.transfer_ownership(buyer()).unwrap();

    let events = events();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.event == "CONTRACT_UPDATE"));
    assert_eq!(events[0].data[0].operation, "config_updated");
    assert_eq!(events[0].data[0].extra["max_page_size"], json!("20"));
    assert_eq!(events[1].data[0].operation, "owner_transferred");
}

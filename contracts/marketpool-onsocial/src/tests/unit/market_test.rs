use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

// --- create_market ---

#[test]
fn create_market_assigns_sequential_ids_and_owner() {
    let mut contract = new_contract();
    testing_env!(context(creator()).build());

    let first = contract.create_market("Arcade".into()).unwrap();
    let second = contract.create_market("Arcade".into()).unwrap();

    assert_eq!(first, 0);
    assert_eq!(second, 1);
    assert_eq!(contract.get_market_owner(first), Some(creator()));
    assert_eq!(contract.get_market_data(second).unwrap(), "Arcade");
    assert_eq!(contract.get_market_count(), 2);
}

#[test]
fn create_market_rejects_empty_name() {
    let mut contract = new_contract();
    let err = contract
        .internal_create_market(&creator(), "   ".into())
        .unwrap_err();
    assert!(matches!(err, MarketPoolError::InvalidArgument(_)));
    assert_eq!(contract.get_market_count(), 0);
}

#[test]
fn create_market_rejects_name_over_limit() {
    let mut contract = new_contract();
    let name = "m".repeat(DEFAULT_MAX_NAME_LEN as usize + 1);
    let err = contract.internal_create_market(&creator(), name).unwrap_err();
    assert!(matches!(err, MarketPoolError::InvalidArgument(_)));
}

#[test]
fn get_market_data_missing_market_fails() {
    let contract = new_contract();
    let err = contract.get_market_data(7).unwrap_err();
    assert!(matches!(err, MarketPoolError::NotFound(_)));
}

// --- queries on absent markets ---

#[test]
fn ownership_queries_never_fail_on_absent_market() {
    let contract = new_contract();
    assert_eq!(contract.get_market_owner(3), None);
    assert!(!contract.is_market_owner(3, creator()));
    assert!(!contract.market_exists(3));
    assert!(contract.get_market(3).is_none());
}

// --- transfer_market_ownership ---

#[test]
fn transfer_market_ownership_moves_control() {
    let mut contract = new_contract();
    let market_id = setup_market(&mut contract);

    let receipt = contract
        .internal_transfer_market_ownership(&creator(), market_id, buyer())
        .unwrap();
    assert_eq!(receipt.previous_owner, creator());
    assert_eq!(receipt.new_owner, buyer());
    assert!(contract.is_market_owner(market_id, buyer()));
    assert!(!contract.is_market_owner(market_id, creator()));

    // Old owner lost the right to manage the market.
    let err = contract
        .internal_create_item_type(&creator(), market_id, item_type_params("Bow", 1))
        .unwrap_err();
    assert!(matches!(err, MarketPoolError::Unauthorized(_)));
}

#[test]
fn transfer_market_ownership_by_non_owner_fails() {
    let mut contract = new_contract();
    let market_id = setup_market(&mut contract);

    let err = contract
        .internal_transfer_market_ownership(&buyer(), market_id, buyer())
        .unwrap_err();
    assert!(matches!(err, MarketPoolError::Unauthorized(_)));
    assert_eq!(contract.get_market_owner(market_id), Some(creator()));
}

#[test]
fn transfer_market_ownership_to_zero_account_fails() {
    let mut contract = new_contract();
    let market_id = setup_market(&mut contract);

    let err = contract
        .internal_transfer_market_ownership(&creator(), market_id, zero_account())
        .unwrap_err();
    assert!(matches!(err, MarketPoolError::InvalidArgument(_)));
    assert_eq!(contract.get_market_owner(market_id), Some(creator()));
}

#[test]
fn transfer_market_ownership_missing_market_is_not_found() {
    let mut contract = new_contract();
    let err = contract
        .internal_transfer_market_ownership(&creator(), 9, zero_account())
        .unwrap_err();
    assert!(matches!(err, MarketPoolError::NotFound(_)));
}

// --- renounce_market_ownership ---

#[test]
fn renounce_is_terminal() {
    let mut contract = new_contract();
    let market_id = setup_market(&mut contract);

    contract
        .internal_renounce_market_ownership(&creator(), market_id)
        .unwrap();
    assert_eq!(contract.get_market_owner(market_id), None);
    assert!(contract.market_exists(market_id));

    for actor in [creator(), buyer(), owner()] {
        let err = contract
            .internal_transfer_market_ownership(&actor, market_id, buyer())
            .unwrap_err();
        assert!(matches!(err, MarketPoolError::Unauthorized(_)));
    }
    let err = contract
        .internal_renounce_market_ownership(&creator(), market_id)
        .unwrap_err();
    assert!(matches!(err, MarketPoolError::Unauthorized(_)));
}

#[test]
fn renounce_by_non_owner_fails() {
    let mut contract = new_contract();
    let market_id = setup_market(&mut contract);

    let err = contract
        .internal_renounce_market_ownership(&buyer(), market_id)
        .unwrap_err();
    assert!(matches!(err, MarketPoolError::Unauthorized(_)));
    assert_eq!(contract.get_market_owner(market_id), Some(creator()));
}

// --- views ---

#[test]
fn get_market_reports_counters() {
    let mut contract = new_contract();
    let market_id = setup_market(&mut contract);
    let t = setup_item_type(&mut contract, market_id, 5);
    contract.internal_create_item(&creator(), market_id, t).unwrap();
    setup_release(&mut contract, market_id, vec![t], 0, 10);

    let view = contract.get_market(market_id).unwrap();
    assert_eq!(view.name, "Arcade");
    assert_eq!(view.owner_id, Some(creator()));
    assert_eq!(view.item_type_count, 1);
    assert_eq!(view.item_count, 1);
    assert_eq!(view.sale_release_count, 1);
    assert_eq!(view.revenue.0, 0);
}

#[test]
fn get_markets_paginates() {
    let mut contract = new_contract();
    for _ in 0..5 {
        setup_market(&mut contract);
    }

    let page = contract.get_markets(Some(1), Some(2));
    let ids: Vec<u64> = page.iter().map(|m| m.market_id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(contract.get_markets(Some(4), None).len(), 1);
    assert!(contract.get_markets(Some(10), None).is_empty());
}

#[test]
fn listings_past_the_end_are_empty() {
    let mut contract = new_contract();
    let market_id = setup_market(&mut contract);
    let t = setup_item_type(&mut contract, market_id, 0);
    contract.internal_create_item(&creator(), market_id, t).unwrap();
    contract
        .internal_subscribe(&owner(), game_contract())
        .unwrap();

    let far = Some(1u64 << 32);
    assert!(contract.get_markets(far, None).is_empty());
    assert!(contract
        .get_items_for_owner(market_id, creator(), far, None)
        .is_empty());
    assert!(contract.get_subscribers(far, None).is_empty());
    assert!(contract.get_subscribers(Some(u64::MAX), None).is_empty());
}

// --- withdraw_market_revenue ---

#[test]
fn withdraw_revenue_debits_balance() {
    let mut contract = new_contract();
    let market_id = setup_market(&mut contract);
    contract.credit_market_revenue(market_id, 1_000).unwrap();

    let receipt = contract
        .internal_withdraw_market_revenue(&creator(), market_id, Some(U128(400)))
        .unwrap();
    assert_eq!(receipt.amount, 400);
    assert_eq!(receipt.remaining, 600);

    let receipt = contract
        .internal_withdraw_market_revenue(&creator(), market_id, None)
        .unwrap();
    assert_eq!(receipt.amount, 600);
    assert_eq!(contract.get_market(market_id).unwrap().revenue.0, 0);
}

#[test]
fn withdraw_revenue_rejects_overdraw_and_empty_balance() {
    let mut contract = new_contract();
    let market_id = setup_market(&mut contract);

    let err = contract
        .internal_withdraw_market_revenue(&creator(), market_id, None)
        .unwrap_err();
    assert!(matches!(err, MarketPoolError::InvalidArgument(_)));

    contract.credit_market_revenue(market_id, 100).unwrap();
    let err = contract
        .internal_withdraw_market_revenue(&creator(), market_id, Some(U128(101)))
        .unwrap_err();
    assert!(matches!(err, MarketPoolError::InvalidArgument(_)));
    assert_eq!(contract.get_market(market_id).unwrap().revenue.0, 100);
}

#[test]
fn withdraw_revenue_requires_market_owner() {
    let mut contract = new_contract();
    let market_id = setup_market(&mut contract);
    contract.credit_market_revenue(market_id, 100).unwrap();

    let err = contract
        .internal_withdraw_market_revenue(&buyer(), market_id, None)
        .unwrap_err();
    assert!(matches!(err, MarketPoolError::Unauthorized(_)));
}

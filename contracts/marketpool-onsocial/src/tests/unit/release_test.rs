use crate::tests::test_utils::*;
use crate::*;

// --- create_sale_release ---

#[test]
fn create_release_records_terms() {
    let mut contract = new_contract();
    let market_id = setup_market(&mut contract);
    let t0 = setup_item_type(&mut contract, market_id, 10);
    let t1 = setup_item_type(&mut contract, market_id, 10);

    let release_id = setup_release(&mut contract, market_id, vec![t1, t0], 3, 500);
    assert_eq!(release_id, 0);

    let view = contract.get_sale_release(market_id, release_id).unwrap();
    assert_eq!(view.item_type_ids, vec![t0, t1]);
    assert_eq!(view.total_supply, 3);
    assert_eq!(view.remaining_supply, 3);
    assert_eq!(view.price.0, 500);
    assert!(view.enable);
    assert!(view.is_final);
    assert_eq!(view.sold_count, 0);
    assert!(contract.sale_release_exists(market_id, release_id));
}

#[test]
fn create_release_collapses_duplicate_types() {
    let mut contract = new_contract();
    let market_id = setup_market(&mut contract);
    let t = setup_item_type(&mut contract, market_id, 0);

    let release_id = setup_release(&mut contract, market_id, vec![t, t, t], 0, 1);
    let view = contract.get_sale_release(market_id, release_id).unwrap();
    assert_eq!(view.item_type_ids, vec![t]);
}

#[test]
fn create_release_failure_kinds() {
    let mut contract = new_contract();
    let market_id = setup_market(&mut contract);
    let t = setup_item_type(&mut contract, market_id, 0);
    let params = |ids: Vec<u64>| SaleReleaseConfig {
        item_type_ids: ids,
        total_supply: 1,
        price: U128(1),
        enable: true,
    };

    let err = contract
        .internal_create_sale_release(&creator(), 6, params(vec![t]))
        .unwrap_err();
    assert!(matches!(err, MarketPoolError::NotFound(_)));

    let err = contract
        .internal_create_sale_release(&buyer(), market_id, params(vec![t]))
        .unwrap_err();
    assert!(matches!(err, MarketPoolError::Unauthorized(_)));

    let err = contract
        .internal_create_sale_release(&creator(), market_id, params(vec![]))
        .unwrap_err();
    assert!(matches!(err, MarketPoolError::NotFound(_)));

    let err = contract
        .internal_create_sale_release(&creator(), market_id, params(vec![t, 77]))
        .unwrap_err();
    assert!(matches!(err, MarketPoolError::NotFound(_)));

    let too_many: Vec<u64> = (0..=DEFAULT_MAX_RELEASE_ITEM_TYPES as u64).collect();
    let err = contract
        .internal_create_sale_release(&creator(), market_id, params(too_many))
        .unwrap_err();
    assert!(matches!(err, MarketPoolError::InvalidArgument(_)));

    // Nothing was created and no id was consumed.
    assert!(!contract.sale_release_exists(market_id, 0));
    assert_eq!(setup_release(&mut contract, market_id, vec![t], 0, 1), 0);
    assert!(contract.get_sale_release_array_for_item_type(market_id, 77).is_empty());
}

#[test]
fn create_release_rejects_type_from_other_market() {
    let mut contract = new_contract();
    let m0 = setup_market(&mut contract);
    let m1 = setup_market(&mut contract);
    setup_item_type(&mut contract, m0, 0);

    let err = contract
        .internal_create_sale_release(
            &creator(),
            m1,
            SaleReleaseConfig {
                item_type_ids: vec![0],
                total_supply: 0,
                price: U128(0),
                enable: true,
            },
        )
        .unwrap_err();
    assert!(matches!(err, MarketPoolError::NotFound(_)));
}

// --- update_sale_release ---

#[test]
fn update_release_is_absolute() {
    let mut contract = new_contract();
    let market_id = setup_market(&mut contract);
    let t = setup_item_type(&mut contract, market_id, 0);
    let release_id = setup_release(&mut contract, market_id, vec![t], 5, 100);

    contract
        .internal_update_sale_release(&creator(), market_id, release_id, 0, U128(100), true)
        .unwrap();
    let view = contract.get_sale_release(market_id, release_id).unwrap();
    assert!(!view.is_final);
    assert_eq!(view.remaining_supply, 0);

    contract
        .internal_update_sale_release(&creator(), market_id, release_id, 10, U128(250), false)
        .unwrap();
    let view = contract.get_sale_release(market_id, release_id).unwrap();
    assert!(view.is_final);
    assert_eq!(view.total_supply, 10);
    assert_eq!(view.remaining_supply, 10);
    assert_eq!(view.price.0, 250);
    assert!(!view.enable);
}

#[test]
fn update_release_resets_remaining_after_sales() {
    let mut contract = new_contract();
    let market_id = setup_market(&mut contract);
    let t = setup_item_type(&mut contract, market_id, 0);
    let release_id = setup_release(&mut contract, market_id, vec![t], 3, 0);
    contract
        .internal_buy_sale_release(&buyer(), market_id, release_id, buyer(), 0)
        .unwrap();

    contract
        .internal_update_sale_release(&creator(), market_id, release_id, 3, U128(0), true)
        .unwrap();
    let view = contract.get_sale_release(market_id, release_id).unwrap();
    assert_eq!(view.remaining_supply, 3);
    assert_eq!(view.sold_count, 1);
}

#[test]
fn update_release_failure_kinds() {
    let mut contract = new_contract();
    let market_id = setup_market(&mut contract);
    let t = setup_item_type(&mut contract, market_id, 0);
    let release_id = setup_release(&mut contract, market_id, vec![t], 5, 100);

    let err = contract
        .internal_update_sale_release(&buyer(), market_id, release_id, 0, U128(0), true)
        .unwrap_err();
    assert!(matches!(err, MarketPoolError::Unauthorized(_)));

    let err = contract
        .internal_update_sale_release(&creator(), market_id, 9, 0, U128(0), true)
        .unwrap_err();
    assert!(matches!(err, MarketPoolError::NotFound(_)));

    let view = contract.get_sale_release(market_id, release_id).unwrap();
    assert_eq!(view.total_supply, 5);
}

// --- remove_sale_release ---

#[test]
fn remove_release_deletes_record() {
    let mut contract = new_contract();
    let market_id = setup_market(&mut contract);
    let t = setup_item_type(&mut contract, market_id, 0);
    let release_id = setup_release(&mut contract, market_id, vec![t], 0, 1);

    contract
        .internal_remove_sale_release(&creator(), market_id, release_id)
        .unwrap();
    assert!(!contract.sale_release_exists(market_id, release_id));
    let err = contract.get_sale_release(market_id, release_id).unwrap_err();
    assert!(matches!(err, MarketPoolError::NotFound(_)));

    let err = contract
        .internal_remove_sale_release(&creator(), market_id, release_id)
        .unwrap_err();
    assert!(matches!(err, MarketPoolError::NotFound(_)));

    // Ids are never reused.
    assert_eq!(setup_release(&mut contract, market_id, vec![t], 0, 1), 1);
}

#[test]
fn remove_release_requires_market_owner() {
    let mut contract = new_contract();
    let market_id = setup_market(&mut contract);
    let t = setup_item_type(&mut contract, market_id, 0);
    let release_id = setup_release(&mut contract, market_id, vec![t], 0, 1);

    let err = contract
        .internal_remove_sale_release(&buyer(), market_id, release_id)
        .unwrap_err();
    assert!(matches!(err, MarketPoolError::Unauthorized(_)));
    assert!(contract.sale_release_exists(market_id, release_id));
}

// --- views ---

#[test]
fn get_sale_releases_pages_by_release_id() {
    let mut contract = new_contract();
    let market_id = setup_market(&mut contract);
    let t = setup_item_type(&mut contract, market_id, 0);
    for _ in 0..4 {
        setup_release(&mut contract, market_id, vec![t], 0, 1);
    }
    contract
        .internal_remove_sale_release(&creator(), market_id, 1)
        .unwrap();

    let ids: Vec<u64> = contract
        .get_sale_releases(market_id, None, None)
        .iter()
        .map(|r| r.release_id)
        .collect();
    assert_eq!(ids, vec![0, 2, 3]);

    let ids: Vec<u64> = contract
        .get_sale_releases(market_id, Some(1), Some(1))
        .iter()
        .map(|r| r.release_id)
        .collect();
    assert_eq!(ids, vec![2]);

    let ids: Vec<u64> = contract
        .get_sale_releases(market_id, Some(2), None)
        .iter()
        .map(|r| r.release_id)
        .collect();
    assert_eq!(ids, vec![2, 3]);
    assert!(contract.get_sale_releases(market_id, Some(4), None).is_empty());
    assert!(contract
        .get_sale_releases(market_id, Some(u64::MAX), None)
        .is_empty());
}

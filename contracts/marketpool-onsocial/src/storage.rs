use near_sdk::BorshStorageKey;
use near_sdk::near;

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Markets,
    ItemTypes,
    Items,
    ItemsPerOwner,
    ItemsPerOwnerInner { market_id: u64, account_id_hash: Vec<u8> },
    SaleReleases,
    ReleasesByItemType,
    ReleasesByItemTypeInner { market_id: u64, item_type_id: u64 },
    Subscribers,
}

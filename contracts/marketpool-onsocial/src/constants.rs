use near_sdk::NearToken;

// All-zero implicit account, treated as the null owner.
pub const ZERO_ACCOUNT: &str = "0000000000000000000000000000000000000000000000000000000000000000";

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

pub const DEFAULT_MAX_NAME_LEN: u32 = 64;
pub const DEFAULT_MAX_RELEASE_ITEM_TYPES: u32 = 16;
pub const DEFAULT_MAX_PAGE_SIZE: u32 = 100;
pub const DEFAULT_PAGE_LIMIT: u32 = 50;

pub const MAX_NAME_LEN_CAP: u32 = 256;
pub const MAX_RELEASE_ITEM_TYPES_CAP: u32 = 64;
pub const MAX_PAGE_SIZE_CAP: u32 = 500;

pub const GAS_MIGRATE_TGAS: u64 = 200;

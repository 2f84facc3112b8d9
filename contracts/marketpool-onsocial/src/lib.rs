use near_sdk::json_types::U128;
use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{AccountId, Gas, NearToken, PanicOnDefault, Promise, env, near};

pub mod constants;
mod config;
mod errors;
mod guards;
mod ids;
mod storage;
mod validation;

mod events;
mod protocol;

mod item;
mod item_type;
mod market;
mod release;
mod subscriber;

mod admin;
mod dispatch;
mod execute;
mod upgrade;


pub use config::{LedgerConfig, LedgerConfigUpdate};
pub use constants::*;
pub use errors::MarketPoolError;
pub use events::receipts::*;
pub use guards::is_zero_account;
pub use ids::IdAllocator;
pub use item::{Item, ItemLedger};
pub use item_type::{ItemChannel, ItemType, ItemTypeCatalog, ItemTypeConfig};
pub use market::{Market, MarketRegistry, MarketView};
pub use protocol::Action;
pub use release::{SaleRelease, SaleReleaseConfig, SaleReleaseEngine, SaleReleaseView};
pub use storage::StorageKey;
pub use subscriber::{SubscriberCapability, SubscriberRegistry};

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/OnSocial-Labs/onsocial-protocol",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,
    pub owner_id: AccountId,
    pub config: LedgerConfig,

    pub(crate) markets: MarketRegistry,
    pub(crate) item_types: ItemTypeCatalog,
    pub(crate) items: ItemLedger,
    // Index invariant: release records and the item-type reverse index only change together.
    pub(crate) releases: SaleReleaseEngine,
    pub(crate) subscribers: SubscriberRegistry,
}

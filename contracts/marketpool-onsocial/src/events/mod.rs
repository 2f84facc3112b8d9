mod builder;
mod types;

mod contract;
pub mod receipts;

pub use contract::*;

#[cfg(test)]
pub(crate) use types::Event;

pub(crate) const STANDARD: &str = "onsocial";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const MARKET: &str = "MARKET_UPDATE";
pub(crate) const ITEM_TYPE: &str = "ITEM_TYPE_UPDATE";
pub(crate) const ITEM: &str = "ITEM_UPDATE";
pub(crate) const SALE_RELEASE: &str = "SALE_RELEASE_UPDATE";
pub(crate) const SUBSCRIBER: &str = "SUBSCRIBER_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";

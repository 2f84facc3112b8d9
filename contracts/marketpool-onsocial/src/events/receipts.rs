//! Success records returned by every mutating ledger operation.
//!
//! Internal operations never log directly: they hand back one of these, and the
//! entry point that commits the call decides to `emit()` it. A failed call
//! produces no record and therefore no event.

use near_sdk::AccountId;
use near_sdk::json_types::U128;
use std::collections::BTreeSet;

use super::builder::{EventBuilder, id_list};
use super::{ITEM, ITEM_TYPE, MARKET, SALE_RELEASE, SUBSCRIBER};
use crate::ItemChannel;

#[derive(Clone, Debug, PartialEq)]
pub struct MarketCreated {
    pub market_id: u64,
    pub owner_id: AccountId,
    pub name: String,
}

impl MarketCreated {
    pub(crate) fn emit(&self) {
        EventBuilder::new(MARKET, "create", &self.owner_id)
            .field("market_id", self.market_id)
            .field("owner_id", &self.owner_id)
            .field("name", &self.name)
            .emit();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarketOwnershipTransferred {
    pub market_id: u64,
    pub previous_owner: AccountId,
    pub new_owner: AccountId,
}

impl MarketOwnershipTransferred {
    pub(crate) fn emit(&self) {
        EventBuilder::new(MARKET, "ownership_transferred", &self.previous_owner)
            .field("market_id", self.market_id)
            .field("previous_owner", &self.previous_owner)
            .field("new_owner", &self.new_owner)
            .emit();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarketOwnershipRenounced {
    pub market_id: u64,
    pub previous_owner: AccountId,
    pub revenue_paid: u128,
}

impl MarketOwnershipRenounced {
    pub(crate) fn emit(&self) {
        EventBuilder::new(MARKET, "ownership_renounced", &self.previous_owner)
            .field("market_id", self.market_id)
            .field("previous_owner", &self.previous_owner)
            .field_opt("revenue_paid", (self.revenue_paid > 0).then_some(self.revenue_paid))
            .emit();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarketRevenueWithdrawn {
    pub market_id: u64,
    pub owner_id: AccountId,
    pub amount: u128,
    pub remaining: u128,
}

impl MarketRevenueWithdrawn {
    pub(crate) fn emit(&self) {
        EventBuilder::new(MARKET, "revenue_withdrawn", &self.owner_id)
            .field("market_id", self.market_id)
            .field("amount", self.amount)
            .field("remaining", self.remaining)
            .emit();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ItemTypeCreated {
    pub market_id: u64,
    pub item_type_id: u64,
    pub actor_id: AccountId,
    pub total_supply: u64,
}

impl ItemTypeCreated {
    pub(crate) fn emit(&self) {
        EventBuilder::new(ITEM_TYPE, "create", &self.actor_id)
            .field("market_id", self.market_id)
            .field("item_type_id", self.item_type_id)
            .field("total_supply", self.total_supply)
            .emit();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ItemCreated {
    pub market_id: u64,
    pub item_type_id: u64,
    pub item_id: u64,
    pub owner_id: AccountId,
    pub minter_id: AccountId,
    pub channel: Option<ItemChannel>,
}

impl ItemCreated {
    pub(crate) fn emit(&self) {
        EventBuilder::new(ITEM, "create", &self.minter_id)
            .field("market_id", self.market_id)
            .field("item_type_id", self.item_type_id)
            .field("item_id", self.item_id)
            .field("owner_id", &self.owner_id)
            .field_opt("channel", self.channel.map(|c| c.as_str()))
            .emit();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ItemOwnershipTransferred {
    pub market_id: u64,
    pub item_id: u64,
    pub previous_owner: AccountId,
    pub new_owner: AccountId,
    pub actor_id: AccountId,
    pub channel: Option<ItemChannel>,
}

impl ItemOwnershipTransferred {
    pub(crate) fn emit(&self) {
        EventBuilder::new(ITEM, "ownership_transferred", &self.actor_id)
            .field("market_id", self.market_id)
            .field("item_id", self.item_id)
            .field("previous_owner", &self.previous_owner)
            .field("new_owner", &self.new_owner)
            .field_opt("channel", self.channel.map(|c| c.as_str()))
            .emit();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SaleReleaseCreated {
    pub market_id: u64,
    pub release_id: u64,
    pub actor_id: AccountId,
    pub item_type_ids: BTreeSet<u64>,
    pub total_supply: u64,
    pub price: U128,
    pub enable: bool,
}

impl SaleReleaseCreated {
    pub(crate) fn emit(&self) {
        EventBuilder::new(SALE_RELEASE, "create", &self.actor_id)
            .field("market_id", self.market_id)
            .field("release_id", self.release_id)
            .field("item_type_ids", id_list(&self.item_type_ids))
            .field("total_supply", self.total_supply)
            .field("price", self.price)
            .field("enable", self.enable)
            .emit();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SaleReleaseRemoved {
    pub market_id: u64,
    pub release_id: u64,
    pub actor_id: AccountId,
}

impl SaleReleaseRemoved {
    pub(crate) fn emit(&self) {
        EventBuilder::new(SALE_RELEASE, "remove", &self.actor_id)
            .field("market_id", self.market_id)
            .field("release_id", self.release_id)
            .emit();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SaleReleaseUpdated {
    pub market_id: u64,
    pub release_id: u64,
    pub actor_id: AccountId,
    pub total_supply: u64,
    pub price: U128,
    pub enable: bool,
}

impl SaleReleaseUpdated {
    pub(crate) fn emit(&self) {
        EventBuilder::new(SALE_RELEASE, "update", &self.actor_id)
            .field("market_id", self.market_id)
            .field("release_id", self.release_id)
            .field("total_supply", self.total_supply)
            .field("price", self.price)
            .field("enable", self.enable)
            .emit();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SaleReleaseBought {
    pub market_id: u64,
    pub release_id: u64,
    pub buyer_id: AccountId,
    pub new_owner: AccountId,
    pub item_ids: Vec<u64>,
    pub price: U128,
    pub paid: U128,
}

impl SaleReleaseBought {
    pub(crate) fn emit(&self) {
        EventBuilder::new(SALE_RELEASE, "buy", &self.buyer_id)
            .field("market_id", self.market_id)
            .field("release_id", self.release_id)
            .field("new_owner", &self.new_owner)
            .field("item_ids", id_list(&self.item_ids))
            .field("price", self.price)
            .field("paid", self.paid)
            .emit();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubscriberAdded {
    pub owner_id: AccountId,
    pub subscriber_id: AccountId,
    pub added: bool,
}

impl SubscriberAdded {
    pub(crate) fn emit(&self) {
        EventBuilder::new(SUBSCRIBER, "subscribe", &self.owner_id)
            .field("subscriber_id", &self.subscriber_id)
            .field("added", self.added)
            .emit();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubscriberRemoved {
    pub owner_id: AccountId,
    pub subscriber_id: AccountId,
    pub removed: bool,
}

impl SubscriberRemoved {
    pub(crate) fn emit(&self) {
        EventBuilder::new(SUBSCRIBER, "unsubscribe", &self.owner_id)
            .field("subscriber_id", &self.subscriber_id)
            .field("removed", self.removed)
            .emit();
    }
}

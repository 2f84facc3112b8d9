use near_sdk::AccountId;
use near_sdk::json_types::U128;
use near_sdk::near;

use crate::{ItemChannel, ItemTypeConfig, SaleReleaseConfig};

#[near(serializers = [json])]
#[serde(tag = "type", rename_all = "snake_case")]
#[derive(Clone)]
pub enum Action {
    CreateMarket {
        name: String,
    },
    TransferMarketOwnership {
        market_id: u64,
        new_owner: AccountId,
    },
    RenounceMarketOwnership {
        market_id: u64,
    },
    WithdrawMarketRevenue {
        market_id: u64,
        #[serde(default)]
        amount: Option<U128>,
    },
    CreateItemType {
        market_id: u64,
        #[serde(flatten)]
        params: ItemTypeConfig,
    },
    CreateItem {
        market_id: u64,
        item_type_id: u64,
    },
    TransferItemOwnership {
        market_id: u64,
        item_id: u64,
        receiver_id: AccountId,
    },
    CreateSaleRelease {
        market_id: u64,
        #[serde(flatten)]
        params: SaleReleaseConfig,
    },
    RemoveSaleRelease {
        market_id: u64,
        release_id: u64,
    },
    UpdateSaleRelease {
        market_id: u64,
        release_id: u64,
        total_supply: u64,
        price: U128,
        enable: bool,
    },
    BuySaleRelease {
        market_id: u64,
        release_id: u64,
        new_owner: AccountId,
    },
    Subscribe {
        subscriber_id: AccountId,
    },
    Unsubscribe {
        subscriber_id: AccountId,
    },
    MintItemFor {
        market_id: u64,
        item_type_id: u64,
        receiver_id: AccountId,
        channel: ItemChannel,
    },
    TransferItemFor {
        market_id: u64,
        item_id: u64,
        receiver_id: AccountId,
        channel: ItemChannel,
    },
}

impl Action {
    /// Only purchases accept an attached deposit.
    pub fn is_payable(&self) -> bool {
        matches!(self, Self::BuySaleRelease { .. })
    }
}

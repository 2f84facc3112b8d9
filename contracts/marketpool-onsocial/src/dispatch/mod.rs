mod items;
mod markets;
mod releases;
mod subscribers;

use crate::*;
use near_sdk::serde_json::Value;

impl Contract {
    pub(crate) fn dispatch_action(
        &mut self,
        action: Action,
        actor_id: &AccountId,
    ) -> Result<Value, MarketPoolError> {
        match &action {
            Action::CreateMarket { .. }
            | Action::TransferMarketOwnership { .. }
            | Action::RenounceMarketOwnership { .. }
            | Action::WithdrawMarketRevenue { .. } => self.dispatch_markets(action, actor_id),

            Action::CreateItemType { .. }
            | Action::CreateItem { .. }
            | Action::TransferItemOwnership { .. } => self.dispatch_items(action, actor_id),

            Action::CreateSaleRelease { .. }
            | Action::RemoveSaleRelease { .. }
            | Action::UpdateSaleRelease { .. }
            | Action::BuySaleRelease { .. } => self.dispatch_releases(action, actor_id),

            Action::Subscribe { .. }
            | Action::Unsubscribe { .. }
            | Action::MintItemFor { .. }
            | Action::TransferItemFor { .. } => self.dispatch_subscribers(action, actor_id),
        }
    }
}

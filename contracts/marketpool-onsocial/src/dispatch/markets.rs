use crate::*;
use near_sdk::serde_json::Value;

impl Contract {
    pub(super) fn dispatch_markets(
        &mut self,
        action: Action,
        actor_id: &AccountId,
    ) -> Result<Value, MarketPoolError> {
        match action {
            Action::CreateMarket { name } => {
                let receipt = self.internal_create_market(actor_id, name)?;
                receipt.emit();
                Ok(Value::from(receipt.market_id))
            }
            Action::TransferMarketOwnership {
                market_id,
                new_owner,
            } => {
                self.internal_transfer_market_ownership(actor_id, market_id, new_owner)?
                    .emit();
                Ok(Value::Null)
            }
            Action::RenounceMarketOwnership { market_id } => {
                self.internal_renounce_market_ownership(actor_id, market_id)?
                    .emit();
                Ok(Value::Null)
            }
            Action::WithdrawMarketRevenue { market_id, amount } => {
                // Payout promise is already scheduled; caller gets Null.
                self.internal_withdraw_market_revenue(actor_id, market_id, amount)?
                    .emit();
                Ok(Value::Null)
            }
            _ => unreachable!("dispatch_markets called with non-market action"),
        }
    }
}

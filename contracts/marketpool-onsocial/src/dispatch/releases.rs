use crate::*;
use near_sdk::serde_json::Value;

impl Contract {
    pub(super) fn dispatch_releases(
        &mut self,
        action: Action,
        actor_id: &AccountId,
    ) -> Result<Value, MarketPoolError> {
        match action {
            Action::CreateSaleRelease { market_id, params } => {
                let receipt = self.internal_create_sale_release(actor_id, market_id, params)?;
                receipt.emit();
                Ok(Value::from(receipt.release_id))
            }
            Action::RemoveSaleRelease {
                market_id,
                release_id,
            } => {
                self.internal_remove_sale_release(actor_id, market_id, release_id)?
                    .emit();
                Ok(Value::Null)
            }
            Action::UpdateSaleRelease {
                market_id,
                release_id,
                total_supply,
                price,
                enable,
            } => {
                self.internal_update_sale_release(
                    actor_id,
                    market_id,
                    release_id,
                    total_supply,
                    price,
                    enable,
                )?
                .emit();
                Ok(Value::Null)
            }
            Action::BuySaleRelease {
                market_id,
                release_id,
                new_owner,
            } => {
                let receipt = self.internal_buy_sale_release(
                    actor_id,
                    market_id,
                    release_id,
                    new_owner,
                    env::attached_deposit().as_yoctonear(),
                )?;
                receipt.emit();
                Ok(Value::from(receipt.item_ids))
            }
            _ => unreachable!("dispatch_releases called with non-release action"),
        }
    }
}

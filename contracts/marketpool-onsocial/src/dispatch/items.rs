use crate::*;
use near_sdk::serde_json::Value;

impl Contract {
    pub(super) fn dispatch_items(
        &mut self,
        action: Action,
        actor_id: &AccountId,
    ) -> Result<Value, MarketPoolError> {
        match action {
            Action::CreateItemType { market_id, params } => {
                let receipt = self.internal_create_item_type(actor_id, market_id, params)?;
                receipt.emit();
                Ok(Value::from(receipt.item_type_id))
            }
            Action::CreateItem {
                market_id,
                item_type_id,
            } => {
                let receipt = self.internal_create_item(actor_id, market_id, item_type_id)?;
                receipt.emit();
                Ok(Value::from(receipt.item_id))
            }
            Action::TransferItemOwnership {
                market_id,
                item_id,
                receiver_id,
            } => {
                self.internal_transfer_item_ownership(actor_id, market_id, item_id, receiver_id)?
                    .emit();
                Ok(Value::Null)
            }
            _ => unreachable!("dispatch_items called with non-item action"),
        }
    }
}

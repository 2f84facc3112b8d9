use crate::*;
use near_sdk::serde_json::Value;

impl Contract {
    pub(super) fn dispatch_subscribers(
        &mut self,
        action: Action,
        actor_id: &AccountId,
    ) -> Result<Value, MarketPoolError> {
        match action {
            Action::Subscribe { subscriber_id } => {
                self.internal_subscribe(actor_id, subscriber_id)?.emit();
                Ok(Value::Null)
            }
            Action::Unsubscribe { subscriber_id } => {
                self.internal_unsubscribe(actor_id, subscriber_id)?.emit();
                Ok(Value::Null)
            }
            Action::MintItemFor {
                market_id,
                item_type_id,
                receiver_id,
                channel,
            } => {
                let capability = self.subscribers.authorize(actor_id)?;
                let receipt = self.internal_mint_item_for(
                    &capability,
                    market_id,
                    item_type_id,
                    receiver_id,
                    channel,
                )?;
                receipt.emit();
                Ok(Value::from(receipt.item_id))
            }
            Action::TransferItemFor {
                market_id,
                item_id,
                receiver_id,
                channel,
            } => {
                let capability = self.subscribers.authorize(actor_id)?;
                self.internal_transfer_item_for(
                    &capability,
                    market_id,
                    item_id,
                    receiver_id,
                    channel,
                )?
                .emit();
                Ok(Value::Null)
            }
            _ => unreachable!("dispatch_subscribers called with non-subscriber action"),
        }
    }
}

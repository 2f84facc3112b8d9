use crate::guards::{check_not_zero, is_implicit_account};
use crate::*;

impl Contract {
    pub(crate) fn internal_subscribe(
        &mut self,
        actor_id: &AccountId,
        subscriber_id: AccountId,
    ) -> Result<SubscriberAdded, MarketPoolError> {
        self.check_contract_owner(actor_id)?;
        check_not_zero(&subscriber_id, "Subscriber")?;
        if is_implicit_account(&subscriber_id) {
            return Err(MarketPoolError::InvalidArgument(
                "Subscriber must be a named contract account".into(),
            ));
        }
        if subscriber_id == env::current_account_id() {
            return Err(MarketPoolError::InvalidArgument(
                "The ledger cannot subscribe to itself".into(),
            ));
        }

        let added = self.subscribers.add(subscriber_id.clone());
        Ok(SubscriberAdded {
            owner_id: actor_id.clone(),
            subscriber_id,
            added,
        })
    }

    pub(crate) fn internal_unsubscribe(
        &mut self,
        actor_id: &AccountId,
        subscriber_id: AccountId,
    ) -> Result<SubscriberRemoved, MarketPoolError> {
        self.check_contract_owner(actor_id)?;
        let removed = self.subscribers.remove(&subscriber_id);
        Ok(SubscriberRemoved {
            owner_id: actor_id.clone(),
            subscriber_id,
            removed,
        })
    }

    /// Mints on behalf of a subscriber. Market ownership is not required; the
    /// item type must allow `channel`.
    pub(crate) fn internal_mint_item_for(
        &mut self,
        capability: &SubscriberCapability,
        market_id: u64,
        item_type_id: u64,
        receiver_id: AccountId,
        channel: ItemChannel,
    ) -> Result<ItemCreated, MarketPoolError> {
        self.markets.require(market_id)?;
        self.item_types
            .require(market_id, item_type_id)?
            .check_channel(channel)?;
        check_not_zero(&receiver_id, "Receiver")?;

        let item_id = self.mint_item(market_id, item_type_id, &receiver_id)?;
        Ok(ItemCreated {
            market_id,
            item_type_id,
            item_id,
            owner_id: receiver_id,
            minter_id: capability.subscriber_id().clone(),
            channel: Some(channel),
        })
    }

    /// Moves an item out of its current owner's hands on behalf of a subscriber.
    pub(crate) fn internal_transfer_item_for(
        &mut self,
        capability: &SubscriberCapability,
        market_id: u64,
        item_id: u64,
        receiver_id: AccountId,
        channel: ItemChannel,
    ) -> Result<ItemOwnershipTransferred, MarketPoolError> {
        self.markets.require(market_id)?;
        let item = self.items.require(market_id, item_id)?;
        self.item_types
            .require(market_id, item.item_type_id)?
            .check_channel(channel)?;
        check_not_zero(&receiver_id, "Receiver")?;
        if receiver_id == item.owner_id {
            return Err(MarketPoolError::InvalidArgument(
                "Receiver already owns this item".into(),
            ));
        }

        let previous_owner = self.items.reassign(market_id, item_id, &receiver_id)?;
        Ok(ItemOwnershipTransferred {
            market_id,
            item_id,
            previous_owner,
            new_owner: receiver_id,
            actor_id: capability.subscriber_id().clone(),
            channel: Some(channel),
        })
    }
}

#[near]
impl Contract {
    #[handle_result]
    pub fn subscribe(&mut self, subscriber_id: AccountId) -> Result<(), MarketPoolError> {
        self.internal_subscribe(&env::predecessor_account_id(), subscriber_id)?
            .emit();
        Ok(())
    }

    #[handle_result]
    pub fn unsubscribe(&mut self, subscriber_id: AccountId) -> Result<(), MarketPoolError> {
        self.internal_unsubscribe(&env::predecessor_account_id(), subscriber_id)?
            .emit();
        Ok(())
    }

    #[handle_result]
    pub fn mint_item_for(
        &mut self,
        market_id: u64,
        item_type_id: u64,
        receiver_id: AccountId,
        channel: ItemChannel,
    ) -> Result<u64, MarketPoolError> {
        let capability = self.subscribers.authorize(&env::predecessor_account_id())?;
        let receipt =
            self.internal_mint_item_for(&capability, market_id, item_type_id, receiver_id, channel)?;
        receipt.emit();
        Ok(receipt.item_id)
    }

    #[handle_result]
    pub fn transfer_item_for(
        &mut self,
        market_id: u64,
        item_id: u64,
        receiver_id: AccountId,
        channel: ItemChannel,
    ) -> Result<(), MarketPoolError> {
        let capability = self.subscribers.authorize(&env::predecessor_account_id())?;
        self.internal_transfer_item_for(&capability, market_id, item_id, receiver_id, channel)?
            .emit();
        Ok(())
    }
}

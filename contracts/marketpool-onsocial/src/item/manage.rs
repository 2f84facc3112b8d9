use crate::guards::check_not_zero;
use crate::*;

impl Contract {
    /// Mints one item of `item_type_id` to `owner_id`. Performs every check
    /// before writing.
    pub(crate) fn mint_item(
        &mut self,
        market_id: u64,
        item_type_id: u64,
        owner_id: &AccountId,
    ) -> Result<u64, MarketPoolError> {
        self.item_types
            .require(market_id, item_type_id)?
            .check_available()?;

        let item_id = self.markets.require_mut(market_id)?.item_ids.allocate()?;
        self.item_types.record_mint(market_id, item_type_id)?;
        self.items.insert(Item {
            market_id,
            item_id,
            item_type_id,
            owner_id: owner_id.clone(),
        });
        Ok(item_id)
    }

    pub(crate) fn internal_create_item(
        &mut self,
        actor_id: &AccountId,
        market_id: u64,
        item_type_id: u64,
    ) -> Result<ItemCreated, MarketPoolError> {
        self.markets.require_owned(market_id, actor_id)?;
        let item_id = self.mint_item(market_id, item_type_id, actor_id)?;
        Ok(ItemCreated {
            market_id,
            item_type_id,
            item_id,
            owner_id: actor_id.clone(),
            minter_id: actor_id.clone(),
            channel: None,
        })
    }

    pub(crate) fn internal_transfer_item_ownership(
        &mut self,
        actor_id: &AccountId,
        market_id: u64,
        item_id: u64,
        receiver_id: AccountId,
    ) -> Result<ItemOwnershipTransferred, MarketPoolError> {
        self.markets.require(market_id)?;
        let item = self.items.require(market_id, item_id)?;
        if &item.owner_id != actor_id {
            return Err(MarketPoolError::only_owner("item owner"));
        }
        check_not_zero(&receiver_id, "Receiver")?;
        if &receiver_id == actor_id {
            return Err(MarketPoolError::InvalidArgument(
                "Cannot transfer an item to its current owner".into(),
            ));
        }

        let previous_owner = self.items.reassign(market_id, item_id, &receiver_id)?;
        Ok(ItemOwnershipTransferred {
            market_id,
            item_id,
            previous_owner,
            new_owner: receiver_id,
            actor_id: actor_id.clone(),
            channel: None,
        })
    }
}

#[near]
impl Contract {
    #[handle_result]
    pub fn create_item(&mut self, market_id: u64, item_type_id: u64) -> Result<u64, MarketPoolError> {
        let receipt =
            self.internal_create_item(&env::predecessor_account_id(), market_id, item_type_id)?;
        receipt.emit();
        Ok(receipt.item_id)
    }

    #[handle_result]
    pub fn transfer_item_ownership(
        &mut self,
        market_id: u64,
        item_id: u64,
        receiver_id: AccountId,
    ) -> Result<(), MarketPoolError> {
        self.internal_transfer_item_ownership(
            &env::predecessor_account_id(),
            market_id,
            item_id,
            receiver_id,
        )?
        .emit();
        Ok(())
    }
}

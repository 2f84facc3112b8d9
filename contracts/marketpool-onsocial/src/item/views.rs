use crate::guards::page_start;
use crate::*;

#[near]
impl Contract {
    #[handle_result]
    pub fn balance_of_items(
        &self,
        market_id: u64,
        owner_id: AccountId,
    ) -> Result<u64, MarketPoolError> {
        self.markets.require(market_id)?;
        if is_zero_account(&owner_id) {
            return Err(MarketPoolError::NotFound(
                "The zero account owns no items".into(),
            ));
        }
        Ok(self.items.balance_of(market_id, &owner_id))
    }

    pub fn get_item_owner(&self, market_id: u64, item_id: u64) -> Option<AccountId> {
        self.items
            .get(market_id, item_id)
            .map(|item| item.owner_id.clone())
    }

    pub fn is_item_owner(&self, market_id: u64, item_id: u64, account_id: AccountId) -> bool {
        self.items
            .get(market_id, item_id)
            .is_some_and(|item| item.owner_id == account_id)
    }

    pub fn item_exists(&self, market_id: u64, item_id: u64) -> bool {
        self.items.contains(market_id, item_id)
    }

    /// Returns the item's type id.
    #[handle_result]
    pub fn get_item_data(&self, market_id: u64, item_id: u64) -> Result<u64, MarketPoolError> {
        Ok(self.items.require(market_id, item_id)?.item_type_id)
    }

    pub fn get_item(&self, market_id: u64, item_id: u64) -> Option<Item> {
        self.items.get(market_id, item_id).cloned()
    }

    pub fn get_items_for_owner(
        &self,
        market_id: u64,
        account_id: AccountId,
        from_index: Option<u64>,
        limit: Option<u32>,
    ) -> Vec<Item> {
        self.items.page_for_owner(
            market_id,
            &account_id,
            page_start(from_index),
            self.page_limit(limit),
        )
    }
}

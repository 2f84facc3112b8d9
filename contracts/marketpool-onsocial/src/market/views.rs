use crate::guards::page_start;
use crate::*;

#[near]
impl Contract {
    #[handle_result]
    pub fn get_market_data(&self, market_id: u64) -> Result<String, MarketPoolError> {
        Ok(self.markets.require(market_id)?.name.clone())
    }

    pub fn get_market_owner(&self, market_id: u64) -> Option<AccountId> {
        self.markets.get(market_id).and_then(|m| m.owner_id.clone())
    }

    pub fn is_market_owner(&self, market_id: u64, account_id: AccountId) -> bool {
        self.markets
            .get(market_id)
            .is_some_and(|m| m.is_owner(&account_id))
    }

    pub fn market_exists(&self, market_id: u64) -> bool {
        self.markets.contains(market_id)
    }

    pub fn get_market(&self, market_id: u64) -> Option<MarketView> {
        self.markets.get(market_id).map(MarketView::from)
    }

    pub fn get_markets(&self, from_index: Option<u64>, limit: Option<u32>) -> Vec<MarketView> {
        self.markets
            .page(page_start(from_index), self.page_limit(limit))
    }

    pub fn get_market_count(&self) -> u64 {
        self.markets.len()
    }
}

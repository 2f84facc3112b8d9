use crate::*;

#[near]
impl Contract {
    #[handle_result]
    pub fn get_item_type_data(
        &self,
        market_id: u64,
        item_type_id: u64,
    ) -> Result<ItemType, MarketPoolError> {
        Ok(self.item_types.require(market_id, item_type_id)?.clone())
    }

    pub fn item_type_exists(&self, market_id: u64, item_type_id: u64) -> bool {
        self.item_types.contains(market_id, item_type_id)
    }

    pub fn get_item_types(
        &self,
        market_id: u64,
        from_index: Option<u64>,
        limit: Option<u32>,
    ) -> Vec<ItemType> {
        let Some(market) = self.markets.get(market_id) else {
            return vec![];
        };
        self.item_types.page(
            market_id,
            market.item_type_ids.peek(),
            from_index.unwrap_or(0),
            self.page_limit(limit),
        )
    }
}

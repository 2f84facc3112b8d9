use crate::*;

#[near]
impl Contract {
    #[handle_result]
    pub fn get_sale_release(
        &self,
        market_id: u64,
        release_id: u64,
    ) -> Result<SaleReleaseView, MarketPoolError> {
        Ok(SaleReleaseView::from(
            self.releases.require(market_id, release_id)?,
        ))
    }

    pub fn get_sale_release_array_for_item_type(
        &self,
        market_id: u64,
        item_type_id: u64,
    ) -> Vec<u64> {
        self.releases
            .release_ids_for_item_type(market_id, item_type_id)
    }

    pub fn sale_release_exists(&self, market_id: u64, release_id: u64) -> bool {
        self.releases.contains(market_id, release_id)
    }

    pub fn get_sale_releases(
        &self,
        market_id: u64,
        from_index: Option<u64>,
        limit: Option<u32>,
    ) -> Vec<SaleReleaseView> {
        let Some(market) = self.markets.get(market_id) else {
            return vec![];
        };
        self.releases.page(
            market_id,
            market.release_ids.peek(),
            from_index.unwrap_or(0),
            self.page_limit(limit),
        )
    }
}

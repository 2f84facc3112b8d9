use crate::validation::normalize_item_type_ids;
use crate::*;

impl Contract {
    pub(crate) fn internal_create_sale_release(
        &mut self,
        actor_id: &AccountId,
        market_id: u64,
        params: SaleReleaseConfig,
    ) -> Result<SaleReleaseCreated, MarketPoolError> {
        let SaleReleaseConfig {
            item_type_ids,
            total_supply,
            price,
            enable,
        } = params;

        self.markets.require_owned(market_id, actor_id)?;
        let item_type_ids =
            normalize_item_type_ids(&item_type_ids, self.config.max_release_item_types)?;
        for &item_type_id in &item_type_ids {
            self.item_types.require(market_id, item_type_id)?;
        }

        let release_id = self.markets.require_mut(market_id)?.release_ids.allocate()?;
        self.releases.insert(SaleRelease {
            market_id,
            release_id,
            item_type_ids: item_type_ids.clone(),
            price,
            total_supply,
            remaining_supply: total_supply,
            enable,
            sold_count: 0,
        });

        Ok(SaleReleaseCreated {
            market_id,
            release_id,
            actor_id: actor_id.clone(),
            item_type_ids,
            total_supply,
            price,
            enable,
        })
    }

    pub(crate) fn internal_remove_sale_release(
        &mut self,
        actor_id: &AccountId,
        market_id: u64,
        release_id: u64,
    ) -> Result<SaleReleaseRemoved, MarketPoolError> {
        self.markets.require_owned(market_id, actor_id)?;
        self.releases.remove(market_id, release_id)?;
        Ok(SaleReleaseRemoved {
            market_id,
            release_id,
            actor_id: actor_id.clone(),
        })
    }

    pub(crate) fn internal_update_sale_release(
        &mut self,
        actor_id: &AccountId,
        market_id: u64,
        release_id: u64,
        total_supply: u64,
        price: U128,
        enable: bool,
    ) -> Result<SaleReleaseUpdated, MarketPoolError> {
        self.markets.require_owned(market_id, actor_id)?;
        self.releases
            .update_terms(market_id, release_id, total_supply, price, enable)?;
        Ok(SaleReleaseUpdated {
            market_id,
            release_id,
            actor_id: actor_id.clone(),
            total_supply,
            price,
            enable,
        })
    }
}

#[near]
impl Contract {
    #[handle_result]
    pub fn create_sale_release(
        &mut self,
        market_id: u64,
        item_type_ids: Vec<u64>,
        total_supply: u64,
        price: U128,
        enable: bool,
    ) -> Result<u64, MarketPoolError> {
        let receipt = self.internal_create_sale_release(
            &env::predecessor_account_id(),
            market_id,
            SaleReleaseConfig {
                item_type_ids,
                total_supply,
                price,
                enable,
            },
        )?;
        receipt.emit();
        Ok(receipt.release_id)
    }

    #[handle_result]
    pub fn remove_sale_release(
        &mut self,
        market_id: u64,
        release_id: u64,
    ) -> Result<(), MarketPoolError> {
        self.internal_remove_sale_release(&env::predecessor_account_id(), market_id, release_id)?
            .emit();
        Ok(())
    }

    #[handle_result]
    pub fn update_sale_release(
        &mut self,
        market_id: u64,
        release_id: u64,
        total_supply: u64,
        price: U128,
        enable: bool,
    ) -> Result<(), MarketPoolError> {
        self.internal_update_sale_release(
            &env::predecessor_account_id(),
            market_id,
            release_id,
            total_supply,
            price,
            enable,
        )?
        .emit();
        Ok(())
    }
}

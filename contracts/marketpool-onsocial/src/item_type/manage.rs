use crate::validation::validate_name;
use crate::*;

impl Contract {
    pub(crate) fn internal_create_item_type(
        &mut self,
        actor_id: &AccountId,
        market_id: u64,
        params: ItemTypeConfig,
    ) -> Result<ItemTypeCreated, MarketPoolError> {
        let ItemTypeConfig {
            name,
            total_supply,
            allow_sale,
            allow_auction,
            allow_rent,
            allow_lootbox,
        } = params;

        self.markets.require_owned(market_id, actor_id)?;
        validate_name(&name, "Item type", self.config.max_name_len)?;

        let item_type_id = self.markets.require_mut(market_id)?.item_type_ids.allocate()?;
        self.item_types.insert(ItemType {
            market_id,
            item_type_id,
            name,
            total_supply,
            remaining_supply: total_supply,
            minted_count: 0,
            allow_sale,
            allow_auction,
            allow_rent,
            allow_lootbox,
        });

        Ok(ItemTypeCreated {
            market_id,
            item_type_id,
            actor_id: actor_id.clone(),
            total_supply,
        })
    }
}

#[near]
impl Contract {
    #[allow(clippy::too_many_arguments)]
    #[handle_result]
    pub fn create_item_type(
        &mut self,
        market_id: u64,
        name: String,
        total_supply: u64,
        allow_sale: bool,
        allow_auction: bool,
        allow_rent: bool,
        allow_lootbox: bool,
    ) -> Result<u64, MarketPoolError> {
        let receipt = self.internal_create_item_type(
            &env::predecessor_account_id(),
            market_id,
            ItemTypeConfig {
                name,
                total_supply,
                allow_sale,
                allow_auction,
                allow_rent,
                allow_lootbox,
            },
        )?;
        receipt.emit();
        Ok(receipt.item_type_id)
    }
}

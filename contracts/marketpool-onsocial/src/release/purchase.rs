use crate::*;

impl Contract {
    /// Buys one unit of a release: one new item per member type, all to
    /// `new_owner`. Nothing is written until every check has passed.
    pub(crate) fn internal_buy_sale_release(
        &mut self,
        buyer_id: &AccountId,
        market_id: u64,
        release_id: u64,
        new_owner: AccountId,
        deposit: u128,
    ) -> Result<SaleReleaseBought, MarketPoolError> {
        let renounced = self.markets.require(market_id)?.owner_id.is_none();
        let release = self.releases.require(market_id, release_id)?.clone();

        if renounced {
            return Err(MarketPoolError::Disabled(format!(
                "Market {} has no owner to receive proceeds",
                market_id
            )));
        }

        if !release.enable {
            return Err(MarketPoolError::Disabled(format!(
                "Sale release {} in market {} is not enabled",
                release_id, market_id
            )));
        }
        if release.is_sold_out() {
            return Err(MarketPoolError::SupplyExhausted(format!(
                "Sale release {} in market {} is sold out",
                release_id, market_id
            )));
        }
        if deposit < release.price.0 {
            return Err(MarketPoolError::InsufficientPayment(format!(
                "Price is {} yoctoNEAR, attached {}",
                release.price.0, deposit
            )));
        }
        if is_zero_account(&new_owner) {
            return Err(MarketPoolError::zero_account("New owner"));
        }
        for &item_type_id in &release.item_type_ids {
            self.item_types
                .require(market_id, item_type_id)?
                .check_available()?;
        }

        let mut item_ids = Vec::with_capacity(release.item_type_ids.len());
        for &item_type_id in &release.item_type_ids {
            item_ids.push(self.mint_item(market_id, item_type_id, &new_owner)?);
        }
        self.releases.record_sale(market_id, release_id)?;
        // Overpayment is kept as revenue, not refunded.
        self.credit_market_revenue(market_id, deposit)?;

        Ok(SaleReleaseBought {
            market_id,
            release_id,
            buyer_id: buyer_id.clone(),
            new_owner,
            item_ids,
            price: release.price,
            paid: U128(deposit),
        })
    }
}

#[near]
impl Contract {
    #[payable]
    #[handle_result]
    pub fn buy_sale_release(
        &mut self,
        market_id: u64,
        release_id: u64,
        new_owner: AccountId,
    ) -> Result<Vec<u64>, MarketPoolError> {
        let receipt = self.internal_buy_sale_release(
            &env::predecessor_account_id(),
            market_id,
            release_id,
            new_owner,
            env::attached_deposit().as_yoctonear(),
        )?;
        receipt.emit();
        Ok(receipt.item_ids)
    }
}

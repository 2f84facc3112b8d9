use crate::guards::check_not_zero;
use crate::validation::validate_name;
use crate::*;

impl Contract {
    pub(crate) fn internal_create_market(
        &mut self,
        actor_id: &AccountId,
        name: String,
    ) -> Result<MarketCreated, MarketPoolError> {
        validate_name(&name, "Market", self.config.max_name_len)?;
        let market_id = self.markets.create(actor_id, name.clone())?;
        Ok(MarketCreated {
            market_id,
            owner_id: actor_id.clone(),
            name,
        })
    }

    pub(crate) fn internal_transfer_market_ownership(
        &mut self,
        actor_id: &AccountId,
        market_id: u64,
        new_owner: AccountId,
    ) -> Result<MarketOwnershipTransferred, MarketPoolError> {
        self.markets.require_owned(market_id, actor_id)?;
        check_not_zero(&new_owner, "New market owner")?;

        let market = self.markets.require_mut(market_id)?;
        market.owner_id = Some(new_owner.clone());
        Ok(MarketOwnershipTransferred {
            market_id,
            previous_owner: actor_id.clone(),
            new_owner,
        })
    }

    pub(crate) fn internal_renounce_market_ownership(
        &mut self,
        actor_id: &AccountId,
        market_id: u64,
    ) -> Result<MarketOwnershipRenounced, MarketPoolError> {
        let market = self.markets.require_owned_mut(market_id, actor_id)?;
        market.owner_id = None;
        // Accrued revenue goes to the renouncing owner.
        let revenue_paid = std::mem::take(&mut market.revenue);
        if revenue_paid > 0 {
            let _ = Promise::new(actor_id.clone()).transfer(NearToken::from_yoctonear(revenue_paid));
        }
        Ok(MarketOwnershipRenounced {
            market_id,
            previous_owner: actor_id.clone(),
            revenue_paid,
        })
    }

    /// Debits market revenue and schedules the payout to the market owner.
    pub(crate) fn internal_withdraw_market_revenue(
        &mut self,
        actor_id: &AccountId,
        market_id: u64,
        amount: Option<U128>,
    ) -> Result<MarketRevenueWithdrawn, MarketPoolError> {
        let market = self.markets.require_owned(market_id, actor_id)?;
        if market.revenue == 0 {
            return Err(MarketPoolError::InvalidArgument(
                "No revenue to withdraw".into(),
            ));
        }
        let amount = amount.map(|a| a.0).unwrap_or(market.revenue);
        if amount == 0 || amount > market.revenue {
            return Err(MarketPoolError::InvalidArgument(format!(
                "Withdrawal must be 1..={} yoctoNEAR",
                market.revenue
            )));
        }

        let market = self.markets.require_mut(market_id)?;
        market.revenue -= amount;
        let remaining = market.revenue;

        let _ = Promise::new(actor_id.clone()).transfer(NearToken::from_yoctonear(amount));

        Ok(MarketRevenueWithdrawn {
            market_id,
            owner_id: actor_id.clone(),
            amount,
            remaining,
        })
    }

    pub(crate) fn credit_market_revenue(
        &mut self,
        market_id: u64,
        amount: u128,
    ) -> Result<(), MarketPoolError> {
        let market = self.markets.require_mut(market_id)?;
        market.revenue = market
            .revenue
            .checked_add(amount)
            .ok_or_else(|| MarketPoolError::InternalError("Market revenue overflow".into()))?;
        Ok(())
    }
}

#[near]
impl Contract {
    #[handle_result]
    pub fn create_market(&mut self, name: String) -> Result<u64, MarketPoolError> {
        let receipt = self.internal_create_market(&env::predecessor_account_id(), name)?;
        receipt.emit();
        Ok(receipt.market_id)
    }

    #[handle_result]
    pub fn transfer_market_ownership(
        &mut self,
        market_id: u64,
        new_owner: AccountId,
    ) -> Result<(), MarketPoolError> {
        self.internal_transfer_market_ownership(
            &env::predecessor_account_id(),
            market_id,
            new_owner,
        )?
        .emit();
        Ok(())
    }

    #[handle_result]
    pub fn renounce_market_ownership(&mut self, market_id: u64) -> Result<(), MarketPoolError> {
        self.internal_renounce_market_ownership(&env::predecessor_account_id(), market_id)?
            .emit();
        Ok(())
    }

    #[handle_result]
    pub fn withdraw_market_revenue(
        &mut self,
        market_id: u64,
        amount: Option<U128>,
    ) -> Result<U128, MarketPoolError> {
        let receipt = self.internal_withdraw_market_revenue(
            &env::predecessor_account_id(),
            market_id,
            amount,
        )?;
        receipt.emit();
        Ok(U128(receipt.amount))
    }
}

use crate::*;
use near_sdk::serde_json::Value;

#[near]
impl Contract {
    /// Single entry point for every mutating ledger action. The actor is the
    /// predecessor; only `buy_sale_release` may carry a deposit.
    #[payable]
    #[handle_result]
    pub fn execute(&mut self, action: Action) -> Result<Value, MarketPoolError> {
        let actor_id = env::predecessor_account_id();

        if !action.is_payable() && env::attached_deposit().as_yoctonear() != 0 {
            return Err(MarketPoolError::InvalidArgument(
                "Deposit is only accepted for buy_sale_release".into(),
            ));
        }

        self.dispatch_action(action, &actor_id)
    }
}

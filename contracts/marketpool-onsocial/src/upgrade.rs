use crate::constants::GAS_MIGRATE_TGAS;
use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    /// Deploys the wasm passed as raw input, then calls `migrate` on it.
    #[payable]
    #[handle_result]
    pub fn update_contract(&mut self) -> Result<Promise, MarketPoolError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        let code = env::input()
            .filter(|code| !code.is_empty())
            .ok_or_else(|| MarketPoolError::InvalidArgument("Missing contract code".into()))?;

        Ok(Promise::new(env::current_account_id())
            .deploy_contract(code)
            .function_call(
                "migrate".to_string(),
                vec![],
                NearToken::from_near(0),
                Gas::from_tgas(GAS_MIGRATE_TGAS),
            )
            .as_return())
    }

    #[private]
    #[init(ignore_state)]
    pub fn migrate() -> Self {
        let mut ledger: Self = env::state_read().expect("Ledger state missing");
        let previous_version = std::mem::replace(
            &mut ledger.version,
            env!("CARGO_PKG_VERSION").to_string(),
        );
        events::emit_contract_upgraded(
            &env::current_account_id(),
            &previous_version,
            &ledger.version,
        );
        ledger
    }
}

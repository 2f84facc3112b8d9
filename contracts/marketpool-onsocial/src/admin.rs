use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    #[init]
    #[handle_result]
    pub fn new(owner_id: AccountId, config: Option<LedgerConfig>) -> Result<Self, MarketPoolError> {
        let config = config.unwrap_or_default();
        config.validate()?;
        Ok(Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            config,
            markets: MarketRegistry::new(),
            item_types: ItemTypeCatalog::new(),
            items: ItemLedger::new(),
            releases: SaleReleaseEngine::new(),
            subscribers: SubscriberRegistry::new(),
        })
    }

    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), MarketPoolError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(MarketPoolError::InvalidArgument(
                "New owner must differ from current owner".into(),
            ));
        }
        crate::guards::check_not_zero(&new_owner, "New owner")?;
        let old_owner = std::mem::replace(&mut self.owner_id, new_owner);
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn update_config(&mut self, update: LedgerConfigUpdate) -> Result<(), MarketPoolError> {
        check_one_yocto()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        self.config.validate_patch(&update)?;
        self.config.apply_patch(&update);
        events::emit_config_updated(&self.owner_id, &self.config);
        Ok(())
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }
}

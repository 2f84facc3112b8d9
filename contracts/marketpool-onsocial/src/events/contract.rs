use near_sdk::AccountId;

use super::CONTRACT;
use super::builder::EventBuilder;
use crate::LedgerConfig;

pub fn emit_contract_upgraded(contract_id: &AccountId, old_version: &str, new_version: &str) {
    EventBuilder::new(CONTRACT, "contract_upgrade", contract_id)
        .field("old_version", old_version)
        .field("new_version", new_version)
        .emit();
}

pub fn emit_owner_transferred(old_owner: &AccountId, new_owner: &AccountId) {
    EventBuilder::new(CONTRACT, "owner_transferred", old_owner)
        .field("old_owner", old_owner)
        .field("new_owner", new_owner)
        .emit();
}

pub fn emit_config_updated(owner_id: &AccountId, config: &LedgerConfig) {
    EventBuilder::new(CONTRACT, "config_updated", owner_id)
        .field("max_name_len", config.max_name_len as u64)
        .field("max_release_item_types", config.max_release_item_types as u64)
        .field("max_page_size", config.max_page_size as u64)
        .emit();
}

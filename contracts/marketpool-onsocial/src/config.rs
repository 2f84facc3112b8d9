use crate::*;

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct LedgerConfig {
    pub max_name_len: u32,
    pub max_release_item_types: u32,
    pub max_page_size: u32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            max_name_len: DEFAULT_MAX_NAME_LEN,
            max_release_item_types: DEFAULT_MAX_RELEASE_ITEM_TYPES,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

fn check_bound(name: &str, value: u32, cap: u32) -> Result<(), MarketPoolError> {
    if value == 0 || value > cap {
        return Err(MarketPoolError::InvalidArgument(format!(
            "{name} must be 1..={cap}"
        )));
    }
    Ok(())
}

impl LedgerConfig {
    pub fn validate(&self) -> Result<(), MarketPoolError> {
        check_bound("max_name_len", self.max_name_len, MAX_NAME_LEN_CAP)?;
        check_bound(
            "max_release_item_types",
            self.max_release_item_types,
            MAX_RELEASE_ITEM_TYPES_CAP,
        )?;
        check_bound("max_page_size", self.max_page_size, MAX_PAGE_SIZE_CAP)
    }

    pub fn validate_patch(&self, patch: &LedgerConfigUpdate) -> Result<(), MarketPoolError> {
        let mut merged = self.clone();
        merged.apply_patch(patch);
        merged.validate()
    }

    pub fn apply_patch(&mut self, patch: &LedgerConfigUpdate) {
        if let Some(v) = patch.max_name_len {
            self.max_name_len = v;
        }
        if let Some(v) = patch.max_release_item_types {
            self.max_release_item_types = v;
        }
        if let Some(v) = patch.max_page_size {
            self.max_page_size = v;
        }
    }
}

#[near(serializers = [json])]
#[derive(Clone, Default)]
pub struct LedgerConfigUpdate {
    pub max_name_len: Option<u32>,
    pub max_release_item_types: Option<u32>,
    pub max_page_size: Option<u32>,
}

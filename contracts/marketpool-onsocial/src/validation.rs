use crate::*;
use std::collections::BTreeSet;

pub(crate) fn validate_name(name: &str, what: &str, max_len: u32) -> Result<(), MarketPoolError> {
    if name.trim().is_empty() {
        return Err(MarketPoolError::InvalidArgument(format!(
            "{} name cannot be empty",
            what
        )));
    }
    if name.len() > max_len as usize {
        return Err(MarketPoolError::InvalidArgument(format!(
            "{} name exceeds max length of {} bytes",
            what, max_len
        )));
    }
    Ok(())
}

/// Collapses a caller-supplied id list into the set a release is keyed on.
pub(crate) fn normalize_item_type_ids(
    item_type_ids: &[u64],
    max_len: u32,
) -> Result<BTreeSet<u64>, MarketPoolError> {
    if item_type_ids.is_empty() {
        return Err(MarketPoolError::NotFound(
            "Sale release requires at least one item type".into(),
        ));
    }
    let set: BTreeSet<u64> = item_type_ids.iter().copied().collect();
    if set.len() > max_len as usize {
        return Err(MarketPoolError::InvalidArgument(format!(
            "Sale release cannot span more than {} item types",
            max_len
        )));
    }
    Ok(set)
}

use crate::*;

pub(crate) fn hash_account_id(account_id: &AccountId) -> Vec<u8> {
    env::sha256(account_id.as_bytes())
}

pub(crate) fn check_one_yocto() -> Result<(), MarketPoolError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(MarketPoolError::InsufficientPayment(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

pub fn is_zero_account(account_id: &AccountId) -> bool {
    account_id.as_str() == ZERO_ACCOUNT
}

fn is_lower_hex(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

// Keypair-derived accounts (NEAR implicit, ETH implicit, deterministic) are never
// named contract deployments, so they cannot act as subscribers.
pub(crate) fn is_implicit_account(account_id: &AccountId) -> bool {
    let id = account_id.as_str();
    if id.len() == 64 && is_lower_hex(id) {
        return true;
    }
    if id.len() == 42 {
        if let Some(rest) = id.strip_prefix("0x").or_else(|| id.strip_prefix("0s")) {
            return is_lower_hex(rest);
        }
    }
    false
}

pub(crate) fn check_not_zero(account_id: &AccountId, what: &str) -> Result<(), MarketPoolError> {
    if is_zero_account(account_id) {
        return Err(MarketPoolError::zero_account(what));
    }
    Ok(())
}

/// Out-of-range offsets saturate so they yield an empty page.
pub(crate) fn page_start(from_index: Option<u64>) -> usize {
    usize::try_from(from_index.unwrap_or(0)).unwrap_or(usize::MAX)
}

impl Contract {
    pub(crate) fn check_contract_owner(&self, actor_id: &AccountId) -> Result<(), MarketPoolError> {
        if actor_id != &self.owner_id {
            return Err(MarketPoolError::only_owner("contract owner"));
        }
        Ok(())
    }

    pub(crate) fn page_limit(&self, limit: Option<u32>) -> usize {
        limit
            .unwrap_or(DEFAULT_PAGE_LIMIT)
            .min(self.config.max_page_size) as usize
    }
}

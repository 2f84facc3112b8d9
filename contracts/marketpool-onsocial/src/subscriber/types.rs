use crate::*;
use near_sdk::borsh::{BorshDeserialize, BorshSerialize};

/// Proof that the wrapped account was a subscriber when it was authorized.
/// Only [`SubscriberRegistry::authorize`] can construct one.
#[derive(Debug)]
pub struct SubscriberCapability {
    subscriber_id: AccountId,
}

impl SubscriberCapability {
    pub fn subscriber_id(&self) -> &AccountId {
        &self.subscriber_id
    }
}

/// Contracts allowed to mint and move items through a distribution channel.
#[derive(BorshSerialize, BorshDeserialize)]
#[borsh(crate = "near_sdk::borsh")]
pub struct SubscriberRegistry {
    subscribers: IterableSet<AccountId>,
}

impl SubscriberRegistry {
    pub fn new() -> Self {
        Self {
            subscribers: IterableSet::new(StorageKey::Subscribers),
        }
    }

    pub fn contains(&self, account_id: &AccountId) -> bool {
        self.subscribers.contains(account_id)
    }

    pub fn len(&self) -> u64 {
        self.subscribers.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    pub fn authorize(&self, caller_id: &AccountId) -> Result<SubscriberCapability, MarketPoolError> {
        if !self.subscribers.contains(caller_id) {
            return Err(MarketPoolError::only_owner("a subscriber"));
        }
        Ok(SubscriberCapability {
            subscriber_id: caller_id.clone(),
        })
    }

    /// Returns `false` when already present.
    pub(crate) fn add(&mut self, account_id: AccountId) -> bool {
        self.subscribers.insert(account_id)
    }

    /// Returns `false` when absent.
    pub(crate) fn remove(&mut self, account_id: &AccountId) -> bool {
        self.subscribers.remove(account_id)
    }

    pub(crate) fn page(&self, from_index: usize, limit: usize) -> Vec<AccountId> {
        self.subscribers
            .iter()
            .skip(from_index)
            .take(limit)
            .cloned()
            .collect()
    }
}

impl Default for SubscriberRegistry {
    fn default() -> Self {
        Self::new()
    }
}

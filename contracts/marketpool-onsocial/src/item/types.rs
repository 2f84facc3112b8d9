use crate::guards::hash_account_id;
use crate::*;
use near_sdk::borsh::{BorshDeserialize, BorshSerialize};

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub market_id: u64,
    pub item_id: u64,
    pub item_type_id: u64,
    pub owner_id: AccountId,
}

/// Item records plus the per-(market, owner) index. A balance is the size of
/// the owner's set, so the two cannot disagree.
#[derive(BorshSerialize, BorshDeserialize)]
#[borsh(crate = "near_sdk::borsh")]
pub struct ItemLedger {
    items: LookupMap<(u64, u64), Item>,
    items_per_owner: LookupMap<(u64, AccountId), IterableSet<u64>>,
}

impl ItemLedger {
    pub fn new() -> Self {
        Self {
            items: LookupMap::new(StorageKey::Items),
            items_per_owner: LookupMap::new(StorageKey::ItemsPerOwner),
        }
    }

    pub fn get(&self, market_id: u64, item_id: u64) -> Option<&Item> {
        self.items.get(&(market_id, item_id))
    }

    pub fn contains(&self, market_id: u64, item_id: u64) -> bool {
        self.items.contains_key(&(market_id, item_id))
    }

    pub(crate) fn require(&self, market_id: u64, item_id: u64) -> Result<&Item, MarketPoolError> {
        self.get(market_id, item_id)
            .ok_or_else(|| MarketPoolError::item_not_found(market_id, item_id))
    }

    pub fn balance_of(&self, market_id: u64, owner_id: &AccountId) -> u64 {
        self.items_per_owner
            .get(&(market_id, owner_id.clone()))
            .map(|set| set.len() as u64)
            .unwrap_or(0)
    }

    pub(crate) fn insert(&mut self, item: Item) {
        self.add_to_owner(item.market_id, &item.owner_id, item.item_id);
        self.items.insert((item.market_id, item.item_id), item);
    }

    /// Reassigns an existing item and returns its previous owner.
    pub(crate) fn reassign(
        &mut self,
        market_id: u64,
        item_id: u64,
        new_owner: &AccountId,
    ) -> Result<AccountId, MarketPoolError> {
        let item = self
            .items
            .get_mut(&(market_id, item_id))
            .ok_or_else(|| MarketPoolError::item_not_found(market_id, item_id))?;
        let previous_owner = std::mem::replace(&mut item.owner_id, new_owner.clone());

        self.remove_from_owner(market_id, &previous_owner, item_id);
        self.add_to_owner(market_id, new_owner, item_id);
        Ok(previous_owner)
    }

    pub(crate) fn page_for_owner(
        &self,
        market_id: u64,
        owner_id: &AccountId,
        from_index: usize,
        limit: usize,
    ) -> Vec<Item> {
        let Some(owned) = self.items_per_owner.get(&(market_id, owner_id.clone())) else {
            return vec![];
        };
        owned
            .iter()
            .skip(from_index)
            .filter_map(|item_id| self.get(market_id, *item_id).cloned())
            .take(limit)
            .collect()
    }

    fn add_to_owner(&mut self, market_id: u64, owner_id: &AccountId, item_id: u64) {
        let key = (market_id, owner_id.clone());
        if !self.items_per_owner.contains_key(&key) {
            self.items_per_owner.insert(
                key.clone(),
                IterableSet::new(StorageKey::ItemsPerOwnerInner {
                    market_id,
                    account_id_hash: hash_account_id(owner_id),
                }),
            );
        }
        self.items_per_owner.get_mut(&key).unwrap().insert(item_id);
    }

    fn remove_from_owner(&mut self, market_id: u64, owner_id: &AccountId, item_id: u64) {
        let key = (market_id, owner_id.clone());
        if let Some(owned) = self.items_per_owner.get_mut(&key) {
            owned.remove(&item_id);
            if owned.is_empty() {
                self.items_per_owner.remove(&key);
            }
        }
    }
}

impl Default for ItemLedger {
    fn default() -> Self {
        Self::new()
    }
}

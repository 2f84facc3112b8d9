use crate::*;
use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use std::collections::BTreeSet;

#[near(serializers = [borsh])]
#[derive(Clone, Debug, PartialEq)]
pub struct SaleRelease {
    pub market_id: u64,
    pub release_id: u64,
    pub item_type_ids: BTreeSet<u64>,
    pub price: U128,
    /// 0 = unlimited.
    pub total_supply: u64,
    pub remaining_supply: u64,
    pub enable: bool,
    pub sold_count: u64,
}

impl SaleRelease {
    /// Finality is a function of `total_supply` and is never stored.
    pub fn is_final(&self) -> bool {
        self.total_supply > 0
    }

    pub fn is_sold_out(&self) -> bool {
        self.is_final() && self.remaining_supply == 0
    }
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct SaleReleaseView {
    pub market_id: u64,
    pub release_id: u64,
    pub item_type_ids: Vec<u64>,
    pub price: U128,
    pub total_supply: u64,
    pub remaining_supply: u64,
    pub enable: bool,
    pub is_final: bool,
    pub sold_count: u64,
}

impl From<&SaleRelease> for SaleReleaseView {
    fn from(release: &SaleRelease) -> Self {
        Self {
            market_id: release.market_id,
            release_id: release.release_id,
            item_type_ids: release.item_type_ids.iter().copied().collect(),
            price: release.price,
            total_supply: release.total_supply,
            remaining_supply: release.remaining_supply,
            enable: release.enable,
            is_final: release.is_final(),
            sold_count: release.sold_count,
        }
    }
}

/// Parameters for `create_sale_release`.
#[near(serializers = [json])]
#[derive(Clone)]
pub struct SaleReleaseConfig {
    pub item_type_ids: Vec<u64>,
    #[serde(default)]
    pub total_supply: u64,
    pub price: U128,
    #[serde(default)]
    pub enable: bool,
}

/// Release records plus the `(market, item type) -> release ids` reverse
/// index. Both maps are private; every write goes through methods that update
/// them together.
#[derive(BorshSerialize, BorshDeserialize)]
#[borsh(crate = "near_sdk::borsh")]
pub struct SaleReleaseEngine {
    releases: LookupMap<(u64, u64), SaleRelease>,
    by_item_type: LookupMap<(u64, u64), IterableSet<u64>>,
}

impl SaleReleaseEngine {
    pub fn new() -> Self {
        Self {
            releases: LookupMap::new(StorageKey::SaleReleases),
            by_item_type: LookupMap::new(StorageKey::ReleasesByItemType),
        }
    }

    pub fn get(&self, market_id: u64, release_id: u64) -> Option<&SaleRelease> {
        self.releases.get(&(market_id, release_id))
    }

    pub fn contains(&self, market_id: u64, release_id: u64) -> bool {
        self.releases.contains_key(&(market_id, release_id))
    }

    pub(crate) fn require(
        &self,
        market_id: u64,
        release_id: u64,
    ) -> Result<&SaleRelease, MarketPoolError> {
        self.get(market_id, release_id)
            .ok_or_else(|| MarketPoolError::release_not_found(market_id, release_id))
    }

    pub(crate) fn insert(&mut self, release: SaleRelease) {
        let market_id = release.market_id;
        for &item_type_id in &release.item_type_ids {
            self.index(market_id, item_type_id, release.release_id);
        }
        self.releases.insert((market_id, release.release_id), release);
    }

    pub(crate) fn remove(
        &mut self,
        market_id: u64,
        release_id: u64,
    ) -> Result<SaleRelease, MarketPoolError> {
        let release = self
            .releases
            .remove(&(market_id, release_id))
            .ok_or_else(|| MarketPoolError::release_not_found(market_id, release_id))?;
        for &item_type_id in &release.item_type_ids {
            self.unindex(market_id, item_type_id, release_id);
        }
        Ok(release)
    }

    /// Absolute overwrite; `remaining_supply` restarts at `total_supply`.
    pub(crate) fn update_terms(
        &mut self,
        market_id: u64,
        release_id: u64,
        total_supply: u64,
        price: U128,
        enable: bool,
    ) -> Result<(), MarketPoolError> {
        let release = self
            .releases
            .get_mut(&(market_id, release_id))
            .ok_or_else(|| MarketPoolError::release_not_found(market_id, release_id))?;
        release.total_supply = total_supply;
        release.remaining_supply = total_supply;
        release.price = price;
        release.enable = enable;
        Ok(())
    }

    pub(crate) fn record_sale(
        &mut self,
        market_id: u64,
        release_id: u64,
    ) -> Result<(), MarketPoolError> {
        let release = self
            .releases
            .get_mut(&(market_id, release_id))
            .ok_or_else(|| MarketPoolError::release_not_found(market_id, release_id))?;
        if release.is_final() {
            release.remaining_supply = release.remaining_supply.checked_sub(1).ok_or_else(|| {
                MarketPoolError::SupplyExhausted(format!(
                    "Sale release {} in market {} is sold out",
                    release_id, market_id
                ))
            })?;
        }
        release.sold_count = release
            .sold_count
            .checked_add(1)
            .ok_or_else(|| MarketPoolError::InternalError("Sold count overflow".into()))?;
        Ok(())
    }

    /// Release ids that include `item_type_id`, ascending.
    pub fn release_ids_for_item_type(&self, market_id: u64, item_type_id: u64) -> Vec<u64> {
        let Some(ids) = self.by_item_type.get(&(market_id, item_type_id)) else {
            return vec![];
        };
        let mut ids: Vec<u64> = ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// `from_index` is a release id; removed ids in the range are skipped.
    pub(crate) fn page(
        &self,
        market_id: u64,
        issued: u64,
        from_index: u64,
        limit: usize,
    ) -> Vec<SaleReleaseView> {
        (from_index..issued)
            .filter_map(|id| self.get(market_id, id))
            .take(limit)
            .map(SaleReleaseView::from)
            .collect()
    }

    fn index(&mut self, market_id: u64, item_type_id: u64, release_id: u64) {
        let key = (market_id, item_type_id);
        if !self.by_item_type.contains_key(&key) {
            self.by_item_type.insert(
                key,
                IterableSet::new(StorageKey::ReleasesByItemTypeInner {
                    market_id,
                    item_type_id,
                }),
            );
        }
        self.by_item_type.get_mut(&key).unwrap().insert(release_id);
    }

    fn unindex(&mut self, market_id: u64, item_type_id: u64, release_id: u64) {
        let key = (market_id, item_type_id);
        if let Some(ids) = self.by_item_type.get_mut(&key) {
            ids.remove(&release_id);
            if ids.is_empty() {
                self.by_item_type.remove(&key);
            }
        }
    }
}

impl Default for SaleReleaseEngine {
    fn default() -> Self {
        Self::new()
    }
}

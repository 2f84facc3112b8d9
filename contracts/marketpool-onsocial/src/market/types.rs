use crate::*;
use near_sdk::borsh::{BorshDeserialize, BorshSerialize};

#[near(serializers = [borsh])]
#[derive(Clone, Debug)]
pub struct Market {
    pub market_id: u64,
    pub name: String,
    // None once renounced; no path sets it back.
    pub owner_id: Option<AccountId>,
    pub created_at: u64,
    pub revenue: u128,
    pub item_type_ids: IdAllocator,
    pub item_ids: IdAllocator,
    pub release_ids: IdAllocator,
}

impl Market {
    pub fn is_owner(&self, account_id: &AccountId) -> bool {
        self.owner_id.as_ref() == Some(account_id)
    }
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct MarketView {
    pub market_id: u64,
    pub name: String,
    pub owner_id: Option<AccountId>,
    pub created_at: u64,
    pub item_type_count: u64,
    pub item_count: u64,
    pub sale_release_count: u64,
    pub revenue: U128,
}

impl From<&Market> for MarketView {
    fn from(market: &Market) -> Self {
        Self {
            market_id: market.market_id,
            name: market.name.clone(),
            owner_id: market.owner_id.clone(),
            created_at: market.created_at,
            item_type_count: market.item_type_ids.peek(),
            item_count: market.item_ids.peek(),
            sale_release_count: market.release_ids.peek(),
            revenue: U128(market.revenue),
        }
    }
}

/// All markets, keyed by their sequential id.
#[derive(BorshSerialize, BorshDeserialize)]
#[borsh(crate = "near_sdk::borsh")]
pub struct MarketRegistry {
    markets: IterableMap<u64, Market>,
    market_ids: IdAllocator,
}

impl MarketRegistry {
    pub fn new() -> Self {
        Self {
            markets: IterableMap::new(StorageKey::Markets),
            market_ids: IdAllocator::new(),
        }
    }

    pub fn get(&self, market_id: u64) -> Option<&Market> {
        self.markets.get(&market_id)
    }

    pub fn contains(&self, market_id: u64) -> bool {
        self.markets.contains_key(&market_id)
    }

    pub fn len(&self) -> u64 {
        self.markets.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.markets.is_empty()
    }

    pub(crate) fn require(&self, market_id: u64) -> Result<&Market, MarketPoolError> {
        self.markets
            .get(&market_id)
            .ok_or_else(|| MarketPoolError::market_not_found(market_id))
    }

    pub(crate) fn require_mut(&mut self, market_id: u64) -> Result<&mut Market, MarketPoolError> {
        self.markets
            .get_mut(&market_id)
            .ok_or_else(|| MarketPoolError::market_not_found(market_id))
    }

    /// Existence is checked before ownership.
    pub(crate) fn require_owned(
        &self,
        market_id: u64,
        actor_id: &AccountId,
    ) -> Result<&Market, MarketPoolError> {
        let market = self.require(market_id)?;
        if !market.is_owner(actor_id) {
            return Err(MarketPoolError::only_owner("market owner"));
        }
        Ok(market)
    }

    pub(crate) fn require_owned_mut(
        &mut self,
        market_id: u64,
        actor_id: &AccountId,
    ) -> Result<&mut Market, MarketPoolError> {
        let market = self.require_mut(market_id)?;
        if !market.is_owner(actor_id) {
            return Err(MarketPoolError::only_owner("market owner"));
        }
        Ok(market)
    }

    pub(crate) fn create(
        &mut self,
        owner_id: &AccountId,
        name: String,
    ) -> Result<u64, MarketPoolError> {
        let market_id = self.market_ids.allocate()?;
        self.markets.insert(
            market_id,
            Market {
                market_id,
                name,
                owner_id: Some(owner_id.clone()),
                created_at: env::block_timestamp(),
                revenue: 0,
                item_type_ids: IdAllocator::new(),
                item_ids: IdAllocator::new(),
                release_ids: IdAllocator::new(),
            },
        );
        Ok(market_id)
    }

    pub(crate) fn page(&self, from_index: usize, limit: usize) -> Vec<MarketView> {
        self.markets
            .values()
            .skip(from_index)
            .take(limit)
            .map(MarketView::from)
            .collect()
    }
}

impl Default for MarketRegistry {
    fn default() -> Self {
        Self::new()
    }
}

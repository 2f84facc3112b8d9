use crate::*;
use near_sdk::borsh::{BorshDeserialize, BorshSerialize};

/// Distribution channel an item type can be released through. Each maps to
/// one capability flag on [`ItemType`].
#[near(serializers = [borsh, json])]
#[serde(rename_all = "snake_case")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemChannel {
    Sale,
    Auction,
    Rent,
    Lootbox,
}

impl ItemChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sale => "sale",
            Self::Auction => "auction",
            Self::Rent => "rent",
            Self::Lootbox => "lootbox",
        }
    }
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct ItemType {
    pub market_id: u64,
    pub item_type_id: u64,
    pub name: String,
    /// 0 = unlimited.
    pub total_supply: u64,
    pub remaining_supply: u64,
    pub minted_count: u64,
    pub allow_sale: bool,
    pub allow_auction: bool,
    pub allow_rent: bool,
    pub allow_lootbox: bool,
}

impl ItemType {
    pub fn is_unlimited(&self) -> bool {
        self.total_supply == 0
    }

    pub fn is_exhausted(&self) -> bool {
        !self.is_unlimited() && self.remaining_supply == 0
    }

    pub fn allows(&self, channel: ItemChannel) -> bool {
        match channel {
            ItemChannel::Sale => self.allow_sale,
            ItemChannel::Auction => self.allow_auction,
            ItemChannel::Rent => self.allow_rent,
            ItemChannel::Lootbox => self.allow_lootbox,
        }
    }

    pub(crate) fn check_available(&self) -> Result<(), MarketPoolError> {
        if self.is_exhausted() {
            return Err(MarketPoolError::SupplyExhausted(format!(
                "Item type {} in market {} has no remaining supply",
                self.item_type_id, self.market_id
            )));
        }
        Ok(())
    }

    pub(crate) fn check_channel(&self, channel: ItemChannel) -> Result<(), MarketPoolError> {
        if !self.allows(channel) {
            return Err(MarketPoolError::Unauthorized(format!(
                "Item type {} does not allow {} distribution",
                self.item_type_id,
                channel.as_str()
            )));
        }
        Ok(())
    }

    // Finite types keep remaining_supply + minted_count == total_supply.
    pub(crate) fn record_mint(&mut self) -> Result<(), MarketPoolError> {
        self.check_available()?;
        if !self.is_unlimited() {
            self.remaining_supply -= 1;
        }
        self.minted_count = self
            .minted_count
            .checked_add(1)
            .ok_or_else(|| MarketPoolError::InternalError("Minted count overflow".into()))?;
        Ok(())
    }
}

/// Parameters for `create_item_type`.
#[near(serializers = [json])]
#[derive(Clone)]
pub struct ItemTypeConfig {
    pub name: String,
    #[serde(default)]
    pub total_supply: u64,
    #[serde(default)]
    pub allow_sale: bool,
    #[serde(default)]
    pub allow_auction: bool,
    #[serde(default)]
    pub allow_rent: bool,
    #[serde(default)]
    pub allow_lootbox: bool,
}

#[derive(BorshSerialize, BorshDeserialize)]
#[borsh(crate = "near_sdk::borsh")]
pub struct ItemTypeCatalog {
    types: LookupMap<(u64, u64), ItemType>,
}

impl ItemTypeCatalog {
    pub fn new() -> Self {
        Self {
            types: LookupMap::new(StorageKey::ItemTypes),
        }
    }

    pub fn get(&self, market_id: u64, item_type_id: u64) -> Option<&ItemType> {
        self.types.get(&(market_id, item_type_id))
    }

    pub fn contains(&self, market_id: u64, item_type_id: u64) -> bool {
        self.types.contains_key(&(market_id, item_type_id))
    }

    pub(crate) fn require(
        &self,
        market_id: u64,
        item_type_id: u64,
    ) -> Result<&ItemType, MarketPoolError> {
        self.get(market_id, item_type_id)
            .ok_or_else(|| MarketPoolError::item_type_not_found(market_id, item_type_id))
    }

    pub(crate) fn insert(&mut self, item_type: ItemType) {
        self.types
            .insert((item_type.market_id, item_type.item_type_id), item_type);
    }

    pub(crate) fn record_mint(
        &mut self,
        market_id: u64,
        item_type_id: u64,
    ) -> Result<(), MarketPoolError> {
        self.types
            .get_mut(&(market_id, item_type_id))
            .ok_or_else(|| MarketPoolError::item_type_not_found(market_id, item_type_id))?
            .record_mint()
    }

    /// Types are never removed, so ids `0..issued` enumerate a market densely.
    pub(crate) fn page(
        &self,
        market_id: u64,
        issued: u64,
        from_index: u64,
        limit: usize,
    ) -> Vec<ItemType> {
        (from_index..issued)
            .filter_map(|id| self.get(market_id, id).cloned())
            .take(limit)
            .collect()
    }
}

impl Default for ItemTypeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum MarketPoolError {
    NotFound(String),
    Unauthorized(String),
    InvalidArgument(String),
    SupplyExhausted(String),
    Disabled(String),
    InsufficientPayment(String),
    InternalError(String),
}

impl std::fmt::Display for MarketPoolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Self::SupplyExhausted(msg) => write!(f, "Supply exhausted: {}", msg),
            Self::Disabled(msg) => write!(f, "Disabled: {}", msg),
            Self::InsufficientPayment(msg) => write!(f, "Insufficient payment: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl MarketPoolError {
    pub fn market_not_found(market_id: u64) -> Self {
        Self::NotFound(format!("Market {} not found", market_id))
    }
    pub fn item_type_not_found(market_id: u64, item_type_id: u64) -> Self {
        Self::NotFound(format!(
            "Item type {} not found in market {}",
            item_type_id, market_id
        ))
    }
    pub fn item_not_found(market_id: u64, item_id: u64) -> Self {
        Self::NotFound(format!("Item {} not found in market {}", item_id, market_id))
    }
    pub fn release_not_found(market_id: u64, release_id: u64) -> Self {
        Self::NotFound(format!(
            "Sale release {} not found in market {}",
            release_id, market_id
        ))
    }
    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }
    pub fn zero_account(what: &str) -> Self {
        Self::InvalidArgument(format!("{} cannot be the zero account", what))
    }
}

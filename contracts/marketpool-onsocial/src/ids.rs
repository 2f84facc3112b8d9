use crate::*;

/// Monotonic id source for one scope (all markets, or one market's types,
/// items or releases). Ids start at 0 and are never reused.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> Result<u64, MarketPoolError> {
        let id = self.next;
        self.next = self
            .next
            .checked_add(1)
            .ok_or_else(|| MarketPoolError::InternalError("Id counter overflow".into()))?;
        Ok(id)
    }

    pub fn peek(&self) -> u64 {
        self.next
    }
}

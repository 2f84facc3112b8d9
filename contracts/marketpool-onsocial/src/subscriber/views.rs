use crate::guards::page_start;
use crate::*;

#[near]
impl Contract {
    pub fn is_subscriber(&self, account_id: AccountId) -> bool {
        self.subscribers.contains(&account_id)
    }

    pub fn get_subscribers(&self, from_index: Option<u64>, limit: Option<u32>) -> Vec<AccountId> {
        self.subscribers
            .page(page_start(from_index), self.page_limit(limit))
    }

    pub fn get_subscriber_count(&self) -> u64 {
        self.subscribers.len()
    }
}

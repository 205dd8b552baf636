//! Memo cache configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum memoized subtotals held per tree. Default: 100 000.
    pub memo_capacity: Option<u64>,
}

impl CacheConfig {
    pub fn effective_memo_capacity(&self) -> u64 {
        self.memo_capacity.unwrap_or(constants::DEFAULT_MEMO_CAPACITY)
    }
}

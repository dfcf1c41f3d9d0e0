mod suffix;

pub use suffix::public_suffix;

use crate::table::RuleTable;

/// Trait for anything that can resolve the public suffix of a host
pub trait SuffixLookup: Send + Sync {
    /// Public suffix of `host`, extended by `additional_parts` labels when non-zero.
    fn public_suffix(&self, host: &str, additional_parts: usize) -> Option<String>;
}

impl SuffixLookup for RuleTable {
    fn public_suffix(&self, host: &str, additional_parts: usize) -> Option<String> {
        public_suffix(self, host, additional_parts)
    }
}

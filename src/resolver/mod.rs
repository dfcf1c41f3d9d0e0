//! Resolver module.
//!
//! Owns an optional shared rule table and caches resolutions. When the suffix
//! list could not be loaded, every suffix and base domain query answers `None`
//! instead of failing the caller.

use std::num::NonZeroUsize;
use std::sync::Arc;

use log::warn;
use lru::LruCache;
use parking_lot::Mutex;

use crate::host;
use crate::matcher::{public_suffix, SuffixLookup};
use crate::source::{LazyRuleTable, RuleSource};
use crate::table::RuleTable;
use crate::types::{CacheKey, Resolution};

/// Default LRU cache size
pub const DEFAULT_CACHE_SIZE: usize = 1024;

/// Resolver builder options.
#[derive(Debug, Clone)]
pub struct ResolverOptions {
    /// LRU cache size for suffix resolution results
    pub cache_size: usize,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            cache_size: DEFAULT_CACHE_SIZE,
        }
    }
}

impl ResolverOptions {
    /// Create new resolver options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set cache size.
    pub fn with_cache_size(mut self, size: usize) -> Self {
        self.cache_size = size;
        self
    }
}

/// Public suffix resolver with LRU caching.
pub struct Resolver {
    table: Option<Arc<RuleTable>>,
    cache: Mutex<LruCache<CacheKey, Option<String>>>,
}

impl Resolver {
    /// Create a resolver over an already-loaded table, or none.
    pub fn new(table: Option<Arc<RuleTable>>, options: ResolverOptions) -> Self {
        let cache_size = NonZeroUsize::new(options.cache_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            table,
            cache: Mutex::new(LruCache::new(cache_size)),
        }
    }

    /// Create a resolver by loading a source. A failed load leaves the table absent.
    pub fn from_source(source: &dyn RuleSource, options: ResolverOptions) -> Self {
        let table = match source.load() {
            Ok(table) => Some(Arc::new(table)),
            Err(e) => {
                warn!("public suffix list unavailable, suffix resolution disabled: {}", e);
                None
            }
        };
        Self::new(table, options)
    }

    /// Create a resolver sharing the table of a lazily-loaded handle.
    pub fn from_lazy(lazy: &LazyRuleTable, options: ResolverOptions) -> Self {
        Self::new(lazy.get(), options)
    }

    /// Whether a rule table is available
    pub fn has_table(&self) -> bool {
        self.table.is_some()
    }

    /// The shared rule table, if loaded
    pub fn table(&self) -> Option<&Arc<RuleTable>> {
        self.table.as_ref()
    }

    /// Public suffix of `host`, e.g. `co.uk` for `www.bbc.co.uk`.
    pub fn public_suffix(&self, host: &str) -> Option<String> {
        host::public_suffix_of(self, host)
    }

    /// Registrable domain of `host`, e.g. `bbc.co.uk` for `www.bbc.co.uk`.
    pub fn base_domain(&self, host: &str) -> Option<String> {
        host::base_domain(self, host)
    }

    /// Public suffix extended by `additional_parts` labels.
    ///
    /// Like [`Resolver::base_domain`], a bare hostname without a dot is its own
    /// base domain whenever `additional_parts` is non-zero.
    pub fn base_domain_with_parts(&self, host: &str, additional_parts: usize) -> Option<String> {
        if host::is_ipv6_literal(host) {
            return None;
        }
        if additional_parts > 0 && !host.is_empty() && !host.contains('.') {
            return Some(host.to_string());
        }
        self.lookup(host, additional_parts)
    }

    /// Host with one leading `www.`, `mobile.` or `m.` label removed.
    pub fn normalized_host(&self, host: &str) -> Option<String> {
        host::normalized_host(host)
    }

    /// Second-level domain, e.g. `foo` for `m.foo.com`.
    pub fn second_level_domain(&self, host: &str) -> String {
        host::second_level_domain(self, host)
    }

    /// Canonical `scheme://host/` origin.
    pub fn canonical_origin(&self, scheme: &str, host: &str) -> String {
        host::canonical_origin(scheme, host)
    }

    /// Resolve suffix and base domain in one call.
    pub fn resolve(&self, host: &str) -> Resolution {
        Resolution {
            host: host.to_string(),
            suffix: self.public_suffix(host),
            base_domain: self.base_domain(host),
        }
    }

    /// Clear the cache
    pub fn clear_cache(&self) {
        let mut cache = self.cache.lock();
        cache.clear();
    }

    fn lookup(&self, host: &str, additional_parts: usize) -> Option<String> {
        let table = self.table.as_ref()?;
        let key = CacheKey::new(host, additional_parts);

        let mut cache = self.cache.lock();

        if let Some(cached) = cache.get(&key) {
            return cached.clone();
        }

        // Matching is CPU-only, so computing under the lock is acceptable
        // and keeps concurrent callers from computing the same key twice.
        let result = public_suffix(table, host, additional_parts);
        cache.put(key, result.clone());

        result
    }
}

impl SuffixLookup for Resolver {
    fn public_suffix(&self, host: &str, additional_parts: usize) -> Option<String> {
        self.lookup(host, additional_parts)
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("table_entries", &self.table.as_ref().map(|t| t.len()))
            .field("cached", &self.cache.lock().len())
            .finish()
    }
}

//! PSL Engine - Public-suffix-aware domain resolution for Rust
//!
//! This library provides:
//! - Parsing of rule lists in the published public suffix list format
//! - Public suffix and registrable domain resolution (plain, wildcard and exception rules)
//! - Host normalization (common prefix stripping, second-level domain, canonical origin)
//! - Wrapper URL helpers for reader-mode, error and about pages
//! - LRU caching and graceful degradation when the list is unavailable
//!
//! # Example
//!
//! ```rust
//! use psl_engine::{MemoryRuleSource, Resolver, ResolverOptions};
//!
//! let list = "
//! // ===BEGIN ICANN DOMAINS===
//! com
//! uk
//! co.uk
//! *.ck
//! !www.ck
//! ";
//!
//! let resolver = Resolver::from_source(&MemoryRuleSource::new(list), ResolverOptions::new());
//!
//! assert_eq!(resolver.public_suffix("www.bbc.co.uk").as_deref(), Some("co.uk"));
//! assert_eq!(resolver.base_domain("www.bbc.co.uk").as_deref(), Some("bbc.co.uk"));
//! assert_eq!(resolver.second_level_domain("m.foo.com"), "foo");
//! assert_eq!(resolver.base_domain("::1"), None);
//! ```
//!
//! # Rule Syntax
//!
//! | Line | Kind | Meaning |
//! |------|------|---------|
//! | `co.uk` | Normal | `co.uk` is a public suffix |
//! | `*.ck` | Wildcard | every direct child of `ck` is a public suffix |
//! | `!www.ck` | Exception | `www.ck` is registrable despite `*.ck` |
//! | `// ...` | Comment | ignored, as are blank lines |

pub mod error;
pub mod host;
pub mod matcher;
pub mod parser;
pub mod resolver;
pub mod source;
pub mod table;
pub mod types;
pub mod wrapper;

// Re-export commonly used items
pub use error::{PslError, Result, SourceErrorKind};
pub use host::{
    base_domain, canonical_origin, domain_url, is_ipv6_literal, normalized_host,
    public_suffix_of, second_level_domain,
};
pub use matcher::{public_suffix, SuffixLookup};
pub use parser::{parse_rules, parse_rules_from_file};
pub use resolver::{Resolver, ResolverOptions, DEFAULT_CACHE_SIZE};
pub use source::{FileRuleSource, LazyRuleTable, MemoryRuleSource, NilRuleSource, RuleSource};
pub use table::RuleTable;
pub use types::{Resolution, Rule, RuleKind};
pub use wrapper::{
    about_component, classify, decode_reader_mode_url, encode_reader_mode_url,
    is_about_home_url, is_about_url, is_error_page_url, is_reader_mode_url,
    original_url_from_error_url, strip_credentials, InternalPage,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_workflow() {
        let list = r#"
// ===BEGIN ICANN DOMAINS===
com
uk
co.uk
jp
*.kawasaki.jp
!city.kawasaki.jp
// ===END ICANN DOMAINS===
// ===BEGIN PRIVATE DOMAINS===
blogspot.com
// ===END PRIVATE DOMAINS===
"#;

        // Parse rules
        let rules = parse_rules(list);
        assert_eq!(rules.len(), 7);

        // Build the table and share it
        let table = std::sync::Arc::new(rules.into_iter().collect::<RuleTable>());
        let resolver = Resolver::new(Some(table), ResolverOptions::new());

        // Plain multi-level suffix
        assert_eq!(resolver.public_suffix("www.bbc.co.uk").as_deref(), Some("co.uk"));

        // Private-section suffix is longer than "com"
        assert_eq!(
            resolver.base_domain("me.blogspot.com").as_deref(),
            Some("me.blogspot.com")
        );

        // Wildcard and exception
        assert_eq!(
            resolver.public_suffix("www.foo.kawasaki.jp").as_deref(),
            Some("foo.kawasaki.jp")
        );
        assert_eq!(
            resolver.base_domain("www.city.kawasaki.jp").as_deref(),
            Some("city.kawasaki.jp")
        );

        // Bare hosts and literals
        assert_eq!(resolver.base_domain("localhost").as_deref(), Some("localhost"));
        assert_eq!(resolver.base_domain("::1"), None);
    }
}

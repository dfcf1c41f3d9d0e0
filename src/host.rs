//! Host normalization helpers built on top of suffix resolution.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::matcher::SuffixLookup;

/// Leading subdomain labels stripped by [`normalized_host`]
static COMMON_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(www|mobile|m)\.").expect("COMMON_PREFIX: hardcoded regex is invalid")
});

/// Whether `host` is an IPv6 literal. Such hosts never have a public suffix.
pub fn is_ipv6_literal(host: &str) -> bool {
    host.contains(':')
}

/// IPv6-aware public suffix of `host`.
pub fn public_suffix_of<L: SuffixLookup + ?Sized>(lookup: &L, host: &str) -> Option<String> {
    if is_ipv6_literal(host) {
        return None;
    }
    lookup.public_suffix(host, 0)
}

/// Registrable base domain of `host`.
///
/// Bare hostnames without a dot (e.g. `localhost`) are their own base domain.
pub fn base_domain<L: SuffixLookup + ?Sized>(lookup: &L, host: &str) -> Option<String> {
    if is_ipv6_literal(host) {
        return None;
    }
    if !host.contains('.') {
        return Some(host.to_string());
    }
    lookup.public_suffix(host, 1)
}

/// Strip one leading `www.`, `mobile.` or `m.` label from `host`.
pub fn normalized_host(host: &str) -> Option<String> {
    if host.is_empty() {
        return None;
    }
    Some(COMMON_PREFIX.replace(host, "").into_owned())
}

/// Second-level domain of `host`: the base domain without its public suffix.
///
/// `m.foo.com` yields `foo`. Falls back to the normalized host, then the raw
/// host, when either the suffix or the base domain cannot be resolved.
pub fn second_level_domain<L: SuffixLookup + ?Sized>(lookup: &L, host: &str) -> String {
    let suffix = public_suffix_of(lookup, host);
    let base = base_domain(lookup, host);

    if let (Some(suffix), Some(base)) = (suffix, base) {
        let dotted = format!(".{}", suffix);
        if let Some(sld) = base.strip_suffix(&dotted) {
            return sld.to_string();
        }
        return base;
    }

    normalized_host(host).unwrap_or_else(|| host.to_string())
}

/// Canonical `scheme://host/` origin for a host with common prefixes removed.
///
/// An empty host has no normalized form and is returned unchanged.
pub fn canonical_origin(scheme: &str, host: &str) -> String {
    match normalized_host(host) {
        Some(normalized) => format!("{}://{}/", scheme, normalized),
        None => host.to_string(),
    }
}

/// Domain-only URL for `url`: scheme, normalized host and port, root path.
///
/// URLs without a host are returned unchanged.
pub fn domain_url(url: &Url) -> Url {
    let Some(normalized) = url.host_str().and_then(normalized_host) else {
        return url.clone();
    };

    let origin = match url.port() {
        Some(port) => format!("{}://{}:{}/", url.scheme(), normalized, port),
        None => format!("{}://{}/", url.scheme(), normalized),
    };
    Url::parse(&origin).unwrap_or_else(|_| url.clone())
}

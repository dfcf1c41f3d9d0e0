//! Public suffix resolution over a [`RuleTable`].
//!
//! Walks from the full host toward the root, one label at a time, and stops at
//! the first decisive table entry. Longer host substrings are always checked
//! before shorter ones.
use crate::table::RuleTable;
use crate::types::RuleKind;

/// Compute the public suffix of `host`.
///
/// With `additional_parts == 0` the bare suffix is returned. Otherwise the
/// result is the suffix extended by up to `additional_parts` labels taken from
/// the rest of the host, e.g. `1` yields the registrable base domain.
///
/// Returns `None` for an empty host, when no rule decides, or when the host has
/// no labels left over to extend the suffix with.
pub fn public_suffix(table: &RuleTable, host: &str, additional_parts: usize) -> Option<String> {
    if host.is_empty() {
        return None;
    }

    // Hosts made only of separators, such as "." or "..", have an empty suffix
    // and no base domain
    if host.trim_end_matches('.').is_empty() {
        return (additional_parts == 0).then(String::new);
    }

    let suffix = find_suffix(table, host)?;

    if additional_parts == 0 {
        return Some(suffix.to_string());
    }

    extend_suffix(host, suffix, additional_parts)
}

/// Find the decisive suffix, borrowed from `host`.
fn find_suffix<'a>(table: &RuleTable, host: &'a str) -> Option<&'a str> {
    let mut current = host;
    let mut previous: Option<&'a str> = None;

    loop {
        let next = current.split_once('.').map(|(_, rest)| rest);

        if let Some(kind) = table.get(current) {
            match kind {
                RuleKind::Wildcard if previous.is_some() => return previous,
                RuleKind::Normal => return Some(current),
                _ if next.is_none() => return Some(current),
                RuleKind::Exception => return next,
                RuleKind::Wildcard => {}
            }
        }

        previous = Some(current);
        current = next?;
    }
}

/// Prepend the last `additional_parts` non-empty labels in front of `suffix`.
fn extend_suffix(host: &str, suffix: &str, additional_parts: usize) -> Option<String> {
    let remainder = host.strip_suffix(suffix)?;
    let labels: Vec<&str> = remainder.split('.').filter(|l| !l.is_empty()).collect();

    if labels.is_empty() {
        return None;
    }

    let start = labels.len().saturating_sub(additional_parts);
    Some(format!("{}.{}", labels[start..].join("."), suffix))
}

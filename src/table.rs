//! Immutable public suffix rule table.
//!
//! The table maps a domain string (exact match, case as loaded) to its
//! [`RuleKind`]. It is built once from the list text and never mutated, so an
//! `Arc<RuleTable>` can be shared across any number of threads.

use std::collections::HashMap;
use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::parser::{parse_rules, parse_rules_from_file};
use crate::types::{Rule, RuleKind};

/// Public suffix rule table
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    entries: HashMap<String, RuleKind>,
}

impl RuleTable {
    /// Build a table from list text.
    pub fn parse(text: &str) -> Self {
        Self::from_rules(parse_rules(text))
    }

    /// Build a table from a list file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let rules = parse_rules_from_file(path)?;
        Ok(Self::from_rules(rules))
    }

    /// Build a table from parsed rules. Later duplicates overwrite earlier ones.
    pub fn from_rules(rules: Vec<Rule>) -> Self {
        let mut entries = HashMap::with_capacity(rules.len());
        for rule in rules {
            entries.insert(rule.label, rule.kind);
        }

        debug!("built public suffix table with {} entries", entries.len());
        Self { entries }
    }

    /// Look up the rule kind for an exact label.
    pub fn get(&self, label: &str) -> Option<RuleKind> {
        self.entries.get(label).copied()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Rule> for RuleTable {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self::from_rules(iter.into_iter().collect())
    }
}

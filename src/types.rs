/// Precedence class of a public suffix rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Plain rule: the label itself is a public suffix
    Normal,
    /// Wildcard rule (`*.label`): every direct child of the label is a public suffix
    Wildcard,
    /// Exception rule (`!label`): the label is carved out of an enclosing wildcard
    Exception,
}

impl RuleKind {
    pub fn is_normal(&self) -> bool {
        matches!(self, RuleKind::Normal)
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, RuleKind::Wildcard)
    }

    pub fn is_exception(&self) -> bool {
        matches!(self, RuleKind::Exception)
    }
}

/// Parsed rule line before it is folded into a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Domain with the `*.` or `!` marker stripped
    pub label: String,
    /// Rule precedence class
    pub kind: RuleKind,
    /// Line number in the original text (for diagnostics)
    pub line_num: usize,
}

impl Rule {
    pub fn new(label: impl Into<String>, kind: RuleKind) -> Self {
        Self {
            label: label.into(),
            kind,
            line_num: 0,
        }
    }
}

/// Result of resolving a single host
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// The host that was resolved
    pub host: String,
    /// Public suffix, if a decisive rule was found
    pub suffix: Option<String>,
    /// Registrable domain (suffix plus one label)
    pub base_domain: Option<String>,
}

impl Resolution {
    /// Public suffix, falling back to the whole host when no rule decided.
    ///
    /// IPv6 literals have no suffix at all and yield `None`.
    pub fn suffix_or_host(&self) -> Option<&str> {
        if self.host.is_empty() || self.host.contains(':') {
            return None;
        }
        Some(self.suffix.as_deref().unwrap_or(&self.host))
    }

    /// Whether the host is itself a public suffix
    pub fn is_public_suffix(&self) -> bool {
        self.suffix.as_deref() == Some(self.host.as_str())
    }
}

/// Cache key for the resolution LRU cache
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct CacheKey {
    pub host: String,
    pub additional_parts: usize,
}

impl CacheKey {
    pub fn new(host: &str, additional_parts: usize) -> Self {
        Self {
            host: host.to_string(),
            additional_parts,
        }
    }
}

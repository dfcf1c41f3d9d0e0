//! Rule sources and the lazily-loaded shared table.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::warn;
use once_cell::sync::OnceCell;

use crate::error::{PslError, Result, SourceErrorKind};
use crate::table::RuleTable;

/// Trait for loading a public suffix rule table
pub trait RuleSource: Send + Sync {
    /// Load and parse the rule table
    fn load(&self) -> Result<RuleTable>;
}

/// File-based rule source reading a list in the published format
#[derive(Debug, Clone)]
pub struct FileRuleSource {
    path: PathBuf,
}

impl FileRuleSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RuleSource for FileRuleSource {
    fn load(&self) -> Result<RuleTable> {
        let _span = tracing::debug_span!("load_suffix_list", path = %self.path.display()).entered();

        RuleTable::from_file(&self.path).map_err(|e| {
            let kind = match &e {
                PslError::IoError(io) if io.kind() == std::io::ErrorKind::InvalidData => {
                    SourceErrorKind::InvalidData
                }
                _ => SourceErrorKind::FileError,
            };
            PslError::SourceUnavailable {
                kind,
                message: e.to_string(),
            }
        })
    }
}

/// In-memory rule source, e.g. for a list bundled with `include_str!`
#[derive(Debug, Clone, Default)]
pub struct MemoryRuleSource {
    text: String,
}

impl MemoryRuleSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl RuleSource for MemoryRuleSource {
    fn load(&self) -> Result<RuleTable> {
        Ok(RuleTable::parse(&self.text))
    }
}

/// Source that never provides a table
#[derive(Debug, Clone, Default)]
pub struct NilRuleSource;

impl RuleSource for NilRuleSource {
    fn load(&self) -> Result<RuleTable> {
        Err(PslError::SourceUnavailable {
            kind: SourceErrorKind::NotConfigured,
            message: "no public suffix list configured".to_string(),
        })
    }
}

/// Shared table loaded from a [`RuleSource`] on first use.
///
/// Concurrent first callers block until a single load completes. A failed
/// load is remembered: the table stays absent and the source is not retried.
pub struct LazyRuleTable {
    source: Box<dyn RuleSource>,
    table: OnceCell<Option<Arc<RuleTable>>>,
}

impl LazyRuleTable {
    pub fn new(source: impl RuleSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            table: OnceCell::new(),
        }
    }

    /// The loaded table, or `None` if the source failed.
    pub fn get(&self) -> Option<Arc<RuleTable>> {
        self.table
            .get_or_init(|| match self.source.load() {
                Ok(table) => Some(Arc::new(table)),
                Err(e) => {
                    warn!("public suffix list unavailable, suffix resolution disabled: {}", e);
                    None
                }
            })
            .clone()
    }

    /// Whether a load has been attempted yet
    pub fn is_initialized(&self) -> bool {
        self.table.get().is_some()
    }
}

impl std::fmt::Debug for LazyRuleTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyRuleTable")
            .field("table", &self.table.get())
            .finish()
    }
}

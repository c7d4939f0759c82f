use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Marker that starts an untranslated line: `# ==> key =`
pub const PLACEHOLDER_PREFIX: &str = "# ==> ";

/// One structural line of the canonical catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogEntry {
    /// Comment line, passed through verbatim (including the leading `#`)
    Comment(String),
    /// Translation key
    Key(String),
}

impl CatalogEntry {
    pub fn key(&self) -> Option<&str> {
        match self {
            CatalogEntry::Key(key) => Some(key),
            CatalogEntry::Comment(_) => None,
        }
    }
}

/// Ordered key list of a canonical file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyCatalog {
    pub entries: Vec<CatalogEntry>,
    /// Whether the canonical text ended with a blank line
    pub trailing_blank: bool,
}

impl KeyCatalog {
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(CatalogEntry::key)
    }

    pub fn key_count(&self) -> usize {
        self.keys().count()
    }
}

/// Key to translated value for one target-language file
pub type TranslationMap = BTreeMap<String, String>;

/// Render the untranslated form of a key
pub fn placeholder(key: &str) -> String {
    format!("{}{} =", PLACEHOLDER_PREFIX, key)
}

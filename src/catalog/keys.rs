use std::collections::HashSet;
use std::path::Path;

use super::encoding::read_text;
use super::entry::{CatalogEntry, KeyCatalog};
use crate::error::{Error, Result};

/// Read the ordered key list from a canonical properties file
///
/// Blank lines are dropped, comment lines (`#` or `!` after optional
/// indentation) are kept verbatim, and every other line contributes its first
/// whitespace-delimited token as a key.
pub fn load_keys(path: &Path) -> Result<KeyCatalog> {
    let content = read_text(path).map_err(|e| Error::malformed_key_file(path, e))?;

    let catalog = parse_keys(&content);

    let mut seen = HashSet::new();
    for key in catalog.keys() {
        if !seen.insert(key) {
            tracing::warn!(file = %path.display(), key, "duplicate key in canonical file");
        }
    }
    tracing::debug!(
        file = %path.display(),
        keys = catalog.key_count(),
        entries = catalog.entries.len(),
        "loaded canonical keys"
    );

    Ok(catalog)
}

/// Parse canonical file content; see [`load_keys`]
pub fn parse_keys(content: &str) -> KeyCatalog {
    let mut entries = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with('#') || trimmed.starts_with('!') {
            entries.push(CatalogEntry::Comment(line.to_string()));
            continue;
        }

        let Some(token) = line.split_whitespace().next() else {
            continue;
        };

        // `key=value` written without spaces
        let key = token.split('=').next().unwrap_or(token);
        if key.is_empty() {
            continue;
        }
        entries.push(CatalogEntry::Key(key.to_string()));
    }

    KeyCatalog {
        entries,
        trailing_blank: ends_with_blank_line(content),
    }
}

fn ends_with_blank_line(content: &str) -> bool {
    content.ends_with("\n\n") || content.ends_with("\r\n\r\n")
}

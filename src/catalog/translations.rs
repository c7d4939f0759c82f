use std::io::ErrorKind;
use std::path::Path;

use super::encoding::read_text;
use super::entry::TranslationMap;

/// Read a target-language file into a key/value map
///
/// A missing or unreadable file yields an empty map so a new language can be
/// bootstrapped from nothing. Files that are not UTF-8 are read as ISO-8859-1.
pub fn load_translations(path: &Path) -> TranslationMap {
    match read_text(path) {
        Ok(content) => {
            let map = parse_translations(&content);
            tracing::debug!(file = %path.display(), entries = map.len(), "loaded translations");
            map
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(file = %path.display(), "target file missing, starting from empty");
            TranslationMap::new()
        }
        Err(e) => {
            tracing::warn!(file = %path.display(), error = %e, "target file unreadable, starting from empty");
            TranslationMap::new()
        }
    }
}

/// Parse target-language content; see [`load_translations`]
///
/// Comment lines (`#` or `!`) are skipped, which also drops placeholder lines.
/// Everything after the first `=` is the value.
pub fn parse_translations(content: &str) -> TranslationMap {
    let mut map = TranslationMap::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }

        let Some((key, value)) = trimmed.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        map.insert(key.to_string(), value.trim().to_string());
    }

    map
}

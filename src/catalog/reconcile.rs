use std::fs;
use std::path::Path;

use super::entry::{placeholder, CatalogEntry, KeyCatalog, TranslationMap};
use super::translations::load_translations;
use crate::error::{Error, Result};

/// Target file content rebuilt in canonical order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub lines: Vec<String>,
    /// Keys that got a placeholder, in canonical order
    pub missing_keys: Vec<String>,
    pub trailing_blank: bool,
}

impl Reconciliation {
    pub fn missing(&self) -> usize {
        self.missing_keys.len()
    }

    /// File text: one line per entry, newline-terminated, plus the canonical trailing blank line
    pub fn render(&self) -> String {
        let mut output = String::new();
        for line in &self.lines {
            output.push_str(line);
            output.push('\n');
        }
        if self.trailing_blank {
            output.push('\n');
        }
        output
    }

    /// Overwrite `path` with the rendered text unless it already matches.
    /// Returns whether the file was written.
    pub fn write_to(&self, path: &Path) -> Result<bool> {
        let rendered = self.render();
        if fs::read_to_string(path).is_ok_and(|existing| existing == rendered) {
            tracing::debug!(file = %path.display(), "already up to date");
            return Ok(false);
        }

        fs::write(path, rendered).map_err(|e| Error::write_failed(path, e))?;
        tracing::info!(file = %path.display(), missing = self.missing(), "wrote reconciled file");
        Ok(true)
    }
}

/// Result of reconciling one target file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub reconciliation: Reconciliation,
    pub written: bool,
}

/// Rebuild a target catalog in canonical order
///
/// Non-empty translations are kept as `key = value`; everything else becomes a
/// placeholder that still names the key.
pub fn reconcile(catalog: &KeyCatalog, translations: &TranslationMap) -> Reconciliation {
    let mut lines = Vec::with_capacity(catalog.entries.len());
    let mut missing_keys = Vec::new();

    for entry in &catalog.entries {
        match entry {
            CatalogEntry::Comment(text) => lines.push(text.clone()),
            CatalogEntry::Key(key) => match translations.get(key) {
                Some(value) if !value.is_empty() => lines.push(format!("{} = {}", key, value)),
                _ => {
                    lines.push(placeholder(key));
                    missing_keys.push(key.clone());
                }
            },
        }
    }

    Reconciliation {
        lines,
        missing_keys,
        trailing_blank: catalog.trailing_blank,
    }
}

/// Reconcile the file at `target` and, when `write` is set, persist the result
pub fn reconcile_file(catalog: &KeyCatalog, target: &Path, write: bool) -> Result<FileOutcome> {
    let translations = load_translations(target);
    let reconciliation = reconcile(catalog, &translations);

    let written = if write {
        reconciliation.write_to(target)?
    } else {
        false
    };

    Ok(FileOutcome {
        reconciliation,
        written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::keys::parse_keys;
    use crate::catalog::translations::parse_translations;
    use tempfile::tempdir;

    #[test]
    fn test_greeting_farewell_example() {
        let catalog = parse_keys("greeting = Hello\nfarewell = Goodbye\n");
        let translations = parse_translations("greeting = Hola\n");

        let result = reconcile(&catalog, &translations);
        assert_eq!(result.lines, vec!["greeting = Hola", "# ==> farewell ="]);
        assert_eq!(result.missing(), 1);
        assert_eq!(result.missing_keys, vec!["farewell"]);
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let catalog = parse_keys("a = 1\nb = 2\n");
        let translations = parse_translations("a =\nb = zwei\n");

        let result = reconcile(&catalog, &translations);
        assert_eq!(result.missing_keys, vec!["a"]);
        assert_eq!(result.lines[1], "b = zwei");
    }

    #[test]
    fn test_canonical_order_and_comments() {
        let catalog = parse_keys("# top\nb = B\n# middle\na = A\n");
        let translations = parse_translations("a = alpha\nb = beta\nextra = dropped\n");

        let result = reconcile(&catalog, &translations);
        assert_eq!(
            result.lines,
            vec!["# top", "b = beta", "# middle", "a = alpha"]
        );
        assert_eq!(result.missing(), 0);
    }

    #[test]
    fn test_render_trailing_blank_line() {
        let catalog = parse_keys("a = 1\n\n");
        let result = reconcile(&catalog, &parse_translations("a = un\n"));
        assert_eq!(result.render(), "a = un\n\n");
    }

    #[test]
    fn test_dry_run_leaves_file_untouched() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("gui_es.properties");
        fs::write(&target, "farewell = Adiós\n").unwrap();
        let catalog = parse_keys("greeting = Hello\nfarewell = Goodbye\n");

        let outcome = reconcile_file(&catalog, &target, false).unwrap();
        assert_eq!(outcome.reconciliation.missing(), 1);
        assert!(!outcome.written);
        assert_eq!(fs::read_to_string(&target).unwrap(), "farewell = Adiós\n");
    }

    #[test]
    fn test_write_then_rerun_is_noop() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("gui_es.properties");
        let catalog = parse_keys("# gui\ngreeting = Hello\nfarewell = Goodbye\n");
        fs::write(&target, "greeting = Hola\n").unwrap();

        let first = reconcile_file(&catalog, &target, true).unwrap();
        assert!(first.written);
        let after_first = fs::read_to_string(&target).unwrap();
        assert_eq!(after_first, "# gui\ngreeting = Hola\n# ==> farewell =\n");

        let second = reconcile_file(&catalog, &target, true).unwrap();
        assert!(!second.written);
        assert_eq!(second.reconciliation.missing(), 1);
        assert_eq!(fs::read_to_string(&target).unwrap(), after_first);
    }

    #[test]
    fn test_missing_target_is_bootstrapped() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("gui_ja.properties");
        let catalog = parse_keys("a = 1\nb = 2\n");

        let outcome = reconcile_file(&catalog, &target, true).unwrap();
        assert!(outcome.written);
        assert_eq!(outcome.reconciliation.missing(), 2);
        assert_eq!(
            fs::read_to_string(&target).unwrap(),
            "# ==> a =\n# ==> b =\n"
        );
    }

    #[test]
    fn test_latin1_target_keeps_translations() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("gui_fr.properties");
        fs::write(&target, b"close = Fermer\nalready = D\xe9j\xe0\n").unwrap();
        let catalog = parse_keys("close = Close\nalready = Already\n");

        let outcome = reconcile_file(&catalog, &target, true).unwrap();
        assert_eq!(outcome.reconciliation.missing(), 0);
        assert_eq!(
            fs::read_to_string(&target).unwrap(),
            "close = Fermer\nalready = Déjà\n"
        );
    }

    #[test]
    fn test_bang_comment_is_not_a_key() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("gui_de.properties");
        fs::write(&target, "greeting = Hallo\n").unwrap();
        let catalog = parse_keys("! Section header\ngreeting = Hello\n");

        let first = reconcile_file(&catalog, &target, true).unwrap();
        assert_eq!(first.reconciliation.missing(), 0);
        assert_eq!(
            fs::read_to_string(&target).unwrap(),
            "! Section header\ngreeting = Hallo\n"
        );

        let second = reconcile_file(&catalog, &target, true).unwrap();
        assert!(!second.written);
    }

    #[test]
    fn test_write_failure_is_reported() {
        let dir = tempdir().unwrap();
        // Parent directory does not exist
        let target = dir.path().join("absent").join("gui_de.properties");
        let catalog = parse_keys("a = 1\n");

        let err = reconcile_file(&catalog, &target, true).unwrap_err();
        assert!(matches!(err, Error::WriteFailed { .. }));
    }
}

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::{Error, Result};

/// Catalog root used when neither a config file nor `--root` names one
pub const DEFAULT_ROOT: &str = "resources/strings";

static DOMAIN_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").unwrap());

static LANGUAGE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2,3}(_[A-Z]{2})?$").unwrap());

/// Functional areas that ship their own string catalog
pub fn default_domains() -> Vec<&'static str> {
    vec![
        "analyze", "circuit", "data", "draw", "file", "fpga", "gui", "hex", "log", "menu",
        "prefs", "proj", "soc", "start", "std", "tools", "util",
    ]
}

/// Target languages, base language excluded
pub fn default_languages() -> Vec<&'static str> {
    vec!["de", "el", "es", "fr", "it", "ja", "nl", "pt", "ru", "zh"]
}

pub fn is_valid_domain(name: &str) -> bool {
    DOMAIN_NAME.is_match(name) && name != "." && name != ".."
}

pub fn is_valid_language(code: &str) -> bool {
    LANGUAGE_CODE.is_match(code)
}

/// Reject names that would escape the catalog layout or never match a file
pub fn validate_names(source: &Path, domains: &[String], languages: &[String]) -> Result<()> {
    if let Some(bad) = domains.iter().find(|d| !is_valid_domain(d)) {
        return Err(Error::invalid_config(
            source,
            format!("'{}' is not a valid domain name", bad),
        ));
    }
    if let Some(bad) = languages.iter().find(|l| !is_valid_language(l)) {
        return Err(Error::invalid_config(
            source,
            format!("'{}' is not a valid language code", bad),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(default_domains().iter().all(|d| is_valid_domain(d)));
        assert!(default_languages().iter().all(|l| is_valid_language(l)));
    }

    #[test]
    fn test_language_codes() {
        assert!(is_valid_language("de"));
        assert!(is_valid_language("pt_BR"));
        assert!(!is_valid_language("DE"));
        assert!(!is_valid_language("pt-BR"));
        assert!(!is_valid_language("../x"));
    }

    #[test]
    fn test_domain_names() {
        assert!(is_valid_domain("gui"));
        assert!(is_valid_domain("std-lib"));
        assert!(!is_valid_domain(".."));
        assert!(!is_valid_domain("a/b"));
        assert!(!is_valid_domain(""));
    }

    #[test]
    fn test_validate_names_reports_offender() {
        let err = validate_names(
            Path::new("cli"),
            &["gui".to_string()],
            &["de".to_string(), "Klingon!".to_string()],
        )
        .unwrap_err();
        assert!(err.to_string().contains("Klingon!"));
    }
}

pub mod defaults;
pub mod discover;
pub mod file;

use std::path::{Path, PathBuf};

pub use defaults::{default_domains, default_languages, DEFAULT_ROOT};
pub use discover::discover_languages;
pub use file::ConfigFile;

/// Settings for one synchronization run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Directory holding one subdirectory per domain
    pub root: PathBuf,
    pub domains: Vec<String>,
    pub languages: Vec<String>,
    /// Persist placeholder fills (false = dry run)
    pub write: bool,
    /// Suppress the summary table
    pub quiet: bool,
}

impl SyncConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            domains: default_domains().into_iter().map(String::from).collect(),
            languages: default_languages().into_iter().map(String::from).collect(),
            write: false,
            quiet: false,
        }
    }

    /// Build from a config file, keeping defaults for anything it leaves out
    pub fn from_file(file: ConfigFile) -> Self {
        let mut config = Self::default();
        if let Some(root) = file.root {
            config.root = root;
        }
        if let Some(domains) = file.domains {
            config.domains = domains;
        }
        if let Some(languages) = file.languages {
            config.languages = languages;
        }
        config
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_domains<S: Into<String>>(mut self, domains: impl IntoIterator<Item = S>) -> Self {
        self.domains = domains.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_languages<S: Into<String>>(
        mut self,
        languages: impl IntoIterator<Item = S>,
    ) -> Self {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_write(mut self, write: bool) -> Self {
        self.write = write;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// `<root>/<domain>/<domain>.properties`
    pub fn canonical_path(&self, domain: &str) -> PathBuf {
        self.root
            .join(domain)
            .join(format!("{}.properties", domain))
    }

    /// `<root>/<domain>/<domain>_<lang>.properties`
    pub fn target_path(&self, domain: &str, language: &str) -> PathBuf {
        self.root
            .join(domain)
            .join(format!("{}_{}.properties", domain, language))
    }

    /// Check domain and language names; `source` names where they came from in the error
    pub fn validate(&self, source: &Path) -> crate::Result<()> {
        defaults::validate_names(source, &self.domains, &self.languages)
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT)
    }
}

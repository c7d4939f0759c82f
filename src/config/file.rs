use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Optional settings read from a TOML config file
///
/// ```toml
/// root = "src/main/resources/strings"
/// domains = ["gui", "menu"]
/// languages = ["de", "fr"]
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub root: Option<PathBuf>,
    pub domains: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
}

impl ConfigFile {
    /// Load a config file. A relative `root` is resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::invalid_config(path, e))?;
        let mut config: ConfigFile =
            toml::from_str(&content).map_err(|e| Error::invalid_config(path, e))?;

        if let Some(root) = config.root.take() {
            let resolved = if root.is_relative() {
                path.parent()
                    .map(|dir| dir.join(&root))
                    .unwrap_or(root)
            } else {
                root
            };
            config.root = Some(resolved);
        }

        Ok(config)
    }
}

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Catalog tree under a temp dir: `<root>/<domain>/<domain>[_<lang>].properties`
pub struct CatalogFixture {
    pub dir: TempDir,
}

impl CatalogFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn canonical(&self, domain: &str, content: &str) -> PathBuf {
        let dir = self.root().join(domain);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(format!("{}.properties", domain));
        fs::write(&path, content).unwrap();
        path
    }

    pub fn target(&self, domain: &str, lang: &str, content: &str) -> PathBuf {
        let path = self.target_path(domain, lang);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    pub fn target_path(&self, domain: &str, lang: &str) -> PathBuf {
        self.root()
            .join(domain)
            .join(format!("{}_{}.properties", domain, lang))
    }

    pub fn read(&self, domain: &str, lang: &str) -> String {
        fs::read_to_string(self.target_path(domain, lang)).unwrap()
    }
}

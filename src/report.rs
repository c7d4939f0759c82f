use serde::Serialize;
use std::path::PathBuf;

/// Exit code reported when at least one translation is missing
pub const MISSING_EXIT_CODE: i32 = 100;

/// Outcome of one (domain, language) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub domain: String,
    pub language: String,
    pub path: PathBuf,
    pub missing_keys: Vec<String>,
    /// Whether the file was rewritten on disk
    pub written: bool,
}

impl FileReport {
    pub fn missing(&self) -> usize {
        self.missing_keys.len()
    }
}

/// Result of a full synchronization run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub root: PathBuf,
    pub domains: Vec<String>,
    pub languages: Vec<String>,
    pub write: bool,
    pub files: Vec<FileReport>,
}

impl SyncReport {
    pub fn missing_for(&self, domain: &str, language: &str) -> Option<usize> {
        self.files
            .iter()
            .find(|f| f.domain == domain && f.language == language)
            .map(FileReport::missing)
    }

    pub fn total_missing(&self) -> usize {
        self.files.iter().map(FileReport::missing).sum()
    }

    pub fn files_written(&self) -> usize {
        self.files.iter().filter(|f| f.written).count()
    }

    pub fn status(&self) -> SyncStatus {
        if self.files.iter().any(|f| f.missing() > 0) {
            SyncStatus::Missing
        } else {
            SyncStatus::Synced
        }
    }
}

/// Automation-facing summary of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SyncStatus {
    /// Every target file is fully translated
    Synced,
    /// At least one target file has a missing key
    Missing,
}

impl SyncStatus {
    pub fn exit_code(self) -> i32 {
        match self {
            SyncStatus::Synced => 0,
            SyncStatus::Missing => MISSING_EXIT_CODE,
        }
    }
}

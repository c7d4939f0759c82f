use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for catalog synchronization and test-vector generation
#[derive(Debug, Error)]
pub enum Error {
    /// Canonical (base-language) file is missing, unreadable or not valid text
    #[error("Cannot read canonical key file {path}:\n{reason}\n\nTip: The base-language file defines the key list; check the catalog root and domain names")]
    MalformedKeyFile { path: PathBuf, reason: String },

    /// Reconciled file could not be persisted
    #[error("Failed to write {path}: {source}\n\nTip: Check file permissions and free disk space")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Test vector references a signal that does not fit the declared schema
    #[error("Test vector for {instruction} does not match the signal schema: signal '{signal}' {reason}")]
    SchemaMismatch {
        instruction: String,
        signal: String,
        reason: String,
    },

    /// Instruction encoding is not a 32-digit binary string
    #[error("Test vector for {instruction} has an invalid encoding '{encoding}': expected exactly 32 binary digits")]
    InvalidEncoding {
        instruction: String,
        encoding: String,
    },

    /// Configuration file or option could not be used
    #[error("Invalid configuration ({path}): {reason}\n\nTip: Domains and languages are plain names such as 'gui' or 'pt_BR'")]
    InvalidConfig { path: PathBuf, reason: String },

    /// Report could not be serialized
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a MalformedKeyFile error from a path and reason
    pub fn malformed_key_file(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::MalformedKeyFile {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a WriteFailed error wrapping the underlying IO error
    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a SchemaMismatch error
    pub fn schema_mismatch(
        instruction: impl Into<String>,
        signal: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::SchemaMismatch {
            instruction: instruction.into(),
            signal: signal.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfig error
    pub fn invalid_config(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::InvalidConfig {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for Error
pub type Result<T> = std::result::Result<T, Error>;

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod report;
pub mod vectors;

use std::io::Write;

// Re-export commonly used types
pub use catalog::{
    load_keys, load_translations, reconcile, reconcile_file, CatalogEntry, KeyCatalog,
    Reconciliation, TranslationMap,
};
pub use config::{ConfigFile, SyncConfig};
pub use error::{Error, Result};
pub use output::SummaryFormatter;
pub use report::{FileReport, SyncReport, SyncStatus, MISSING_EXIT_CODE};
pub use vectors::{VectorFormatter, VectorTable};

/// Reconcile every (domain, language) pair named by the config
///
/// An unreadable canonical file or a failed write aborts the run; a missing
/// target file is treated as an empty translation set.
#[must_use = "this function returns a Result that should be handled"]
pub fn run_sync(config: &SyncConfig) -> Result<SyncReport> {
    let mut files = Vec::with_capacity(config.domains.len() * config.languages.len());

    for domain in &config.domains {
        let canonical = config.canonical_path(domain);
        let catalog = load_keys(&canonical)?;

        for language in &config.languages {
            let target = config.target_path(domain, language);
            let outcome = reconcile_file(&catalog, &target, config.write)?;
            tracing::info!(
                domain = domain.as_str(),
                language = language.as_str(),
                missing = outcome.reconciliation.missing(),
                written = outcome.written,
                "reconciled"
            );

            files.push(FileReport {
                domain: domain.clone(),
                language: language.clone(),
                path: target,
                missing_keys: outcome.reconciliation.missing_keys,
                written: outcome.written,
            });
        }
    }

    Ok(SyncReport {
        root: config.root.clone(),
        domains: config.domains.clone(),
        languages: config.languages.clone(),
        write: config.write,
        files,
    })
}

/// Run a synchronization and print the summary table to `out` unless the config is quiet
#[must_use = "this function returns a Result that should be handled"]
pub fn run<W: Write>(config: &SyncConfig, out: &mut W) -> Result<SyncStatus> {
    let report = run_sync(config)?;
    if !config.quiet {
        out.write_all(SummaryFormatter::new().format(&report).as_bytes())?;
    }
    Ok(report.status())
}

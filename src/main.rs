use anyhow::Context;
use clap::Parser;
use colored::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use propsync::config::discover_languages;
use propsync::output::format_json;
use propsync::{ConfigFile, SummaryFormatter, SyncConfig, SyncReport, SyncStatus};

/// Propsync - Keep translated .properties catalogs in step with the base language
#[derive(Parser, Debug)]
#[command(name = "propsync")]
#[command(author, version, about, long_about = None)]
#[command(help_template = "{name} {version}\n{about}\n\nUSAGE:\n    {usage}\n\n{all-args}")]
struct Cli {
    /// Write placeholder lines for missing keys (default: dry run)
    #[arg(long)]
    write: bool,

    /// Suppress the summary table
    #[arg(short, long)]
    quiet: bool,

    /// Catalog root: one subdirectory per domain
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// TOML file providing root, domains and languages
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Domains to check (e.g., "gui,menu"); replaces the configured list
    #[arg(long = "domain", value_name = "NAME", value_delimiter = ',')]
    domains: Vec<String>,

    /// Target languages (e.g., "de,pt_BR"); replaces the configured list
    #[arg(long = "lang", value_name = "CODE", value_delimiter = ',')]
    languages: Vec<String>,

    /// Use every language that already has a file under the domain directories
    #[arg(long, conflicts_with = "languages")]
    discover: bool,

    /// Print the full report as JSON instead of the table
    #[arg(long)]
    json: bool,

    /// After the table, list every missing key as domain/lang: key
    #[arg(long, conflicts_with = "json")]
    list_missing: bool,

    /// Disable colored status output
    #[arg(long)]
    no_color: bool,

    /// Log more detail to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    propsync::logging::init(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    match run(&cli) {
        Ok(status) => process::exit(status.exit_code()),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<SyncStatus> {
    let config = build_config(cli)?;
    let report = propsync::run_sync(&config).context("synchronization aborted")?;

    if !config.quiet {
        let mut stdout = io::stdout().lock();
        if cli.json {
            stdout.write_all(format_json(&report)?.as_bytes())?;
        } else {
            let formatter = SummaryFormatter::new();
            stdout.write_all(formatter.format(&report).as_bytes())?;
            if cli.list_missing {
                stdout.write_all(formatter.format_missing(&report).as_bytes())?;
            }
        }
        stdout.flush()?;
        print_status(&report);
    }

    Ok(report.status())
}

/// Merge defaults, the optional config file and command-line overrides
fn build_config(cli: &Cli) -> anyhow::Result<SyncConfig> {
    let (mut config, source) = match &cli.config {
        Some(path) => {
            let file = ConfigFile::load(path)?;
            (SyncConfig::from_file(file), path.clone())
        }
        None => (SyncConfig::default(), PathBuf::from("command line")),
    };

    if let Some(root) = &cli.root {
        config.root = root.clone();
    }
    if !cli.domains.is_empty() {
        config.domains = cli.domains.clone();
    }
    if !cli.languages.is_empty() {
        config.languages = cli.languages.clone();
    }
    if cli.discover {
        config.languages = discover_languages(&config.root, &config.domains);
        tracing::info!(languages = ?config.languages, "discovered languages");
    }

    config = config.with_write(cli.write).with_quiet(cli.quiet);
    config.validate(Path::new(&source))?;
    Ok(config)
}

fn print_status(report: &SyncReport) {
    let total = report.total_missing();
    let line = match report.status() {
        SyncStatus::Synced => "All translations in sync".green().to_string(),
        SyncStatus::Missing => format!("{} missing translations", total).yellow().to_string(),
    };
    if report.write {
        eprintln!("{} ({} files updated)", line, report.files_written());
    } else {
        eprintln!("{}", line);
    }
}

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use propsync::{VectorFormatter, VectorTable};

/// Control Vectors - Print expected decoder outputs for hand-encoded instructions
#[derive(Parser, Debug)]
#[command(name = "control-vectors")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Put a "# MNEMONIC" comment line before each row
    #[arg(long)]
    annotate: bool,

    /// Only emit these instructions (e.g., "addiu,lw")
    #[arg(long, value_name = "MNEMONIC", value_delimiter = ',')]
    only: Vec<String>,

    /// Write the table to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the instruction mnemonics and exit
    #[arg(long, conflicts_with_all = ["annotate", "output"])]
    list: bool,

    /// Log more detail to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    propsync::logging::init(cli.verbose);

    let mut table = VectorTable::builtin().context("built-in test vectors are inconsistent")?;

    if !cli.only.is_empty() {
        let unknown = table.retain_mnemonics(&cli.only);
        if !unknown.is_empty() {
            bail!("unknown instruction(s): {}", unknown.join(", "));
        }
    }

    if cli.list {
        let mut stdout = io::stdout().lock();
        for mnemonic in table.mnemonics() {
            writeln!(stdout, "{}", mnemonic)?;
        }
        return Ok(());
    }

    let formatter = VectorFormatter::new().annotate(cli.annotate);
    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            formatter.write_to(&table, &mut writer)?;
            writer.flush()?;
            tracing::info!(file = %path.display(), rows = table.tests().len(), "wrote test vectors");
        }
        None => {
            let mut stdout = io::stdout().lock();
            formatter.write_to(&table, &mut stdout)?;
        }
    }

    Ok(())
}

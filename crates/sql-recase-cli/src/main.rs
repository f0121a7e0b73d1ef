//! CLI for recasing SQL keywords embedded in source files.
//!
//! Scans files for quoted SQL statements anchored on a search string
//! (default: the opening double quote itself) and rewrites the keywords
//! inside them to a single case, in place.
//!
//! # Examples
//!
//! ```bash
//! # Uppercase keywords in one file
//! sql-recase src/queries.c
//!
//! # Lowercase keywords in every file under src/, anchored on `exec(`
//! sql-recase -r -l src "exec("
//! ```

use std::path::PathBuf;

use clap::Parser;
use miette::Result;

use sql_recase::{CaseMode, StatementRewriter};

mod config;
mod driver;

use config::Config;

#[derive(Parser, Debug)]
#[command(name = "sql-recase")]
#[command(author, version, about = "Rewrite embedded SQL statements to a single case", long_about = None)]
struct Cli {
    /// Path to the file or directory to process.
    path: PathBuf,

    /// Search string for the scanner to lock onto for SQL replacement.
    /// This should be everything BEFORE the first " (do not include the
    /// double quote).
    search: Option<String>,

    /// Treat path as a directory and recursively iterate through it.
    #[arg(short = 'r', long = "recursive")]
    recursive: bool,

    /// Make SQL statements uppercase. This is the default option.
    #[arg(short = 'u', long = "uppercase")]
    uppercase: bool,

    /// Make SQL statements lowercase.
    #[arg(short = 'l', long = "lowercase")]
    lowercase: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    // Checked after parsing rather than with a clap conflict so the usage
    // error exits with code 1 instead of clap's 2.
    if cli.uppercase && cli.lowercase {
        return Err(miette::miette!(
            "Cannot use both uppercase and lowercase flags at the same time"
        ));
    }

    let config = Config::load();

    let mode = if cli.lowercase {
        CaseMode::Lower
    } else if cli.uppercase {
        CaseMode::Upper
    } else {
        config.scan.case_mode()
    };

    let delimiter = cli
        .search
        .unwrap_or_else(|| config.scan.delimiter.clone());

    tracing::info!("Running on path '{}'", cli.path.display());

    let rewriter = StatementRewriter::new(Some(&delimiter), mode);

    if cli.recursive {
        driver::process_directory(&rewriter, &cli.path)
    } else {
        driver::process_single(&rewriter, &cli.path)
    }
}

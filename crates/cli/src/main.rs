//! Vidstore CLI - Rental statements from the command line
//!
//! Usage:
//! ```bash
//! vidstore statement
//! vidstore statement --format html --output statement.html
//! vidstore statement --data rentals.json --as-of 2026-08-06
//! vidstore formats
//! ```

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

/// Vidstore - movie rental charges, loyalty points and statements
#[derive(Parser)]
#[command(name = "vidstore")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a customer statement
    Statement {
        /// Rental data file (JSON); built-in demo data when omitted
        #[arg(long, short)]
        data: Option<PathBuf>,

        /// Output format name; unknown names fall back to plain
        #[arg(long, short, default_value = "plain")]
        format: String,

        /// Reference date for elapsed-day computation (YYYY-MM-DD); today when omitted
        #[arg(long)]
        as_of: Option<NaiveDate>,

        /// Output file path; stdout when omitted
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// List available statement formats
    Formats,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Statement {
            data,
            format,
            as_of,
            output,
        } => {
            commands::statement::run(data.as_deref(), &format, as_of, output.as_deref())?;
        }

        Commands::Formats => {
            commands::formats::run()?;
        }
    }

    Ok(())
}

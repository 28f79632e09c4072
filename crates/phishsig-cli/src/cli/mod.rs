//! CLI for the phishsig URL feature engine.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use phishsig_core::config;
use std::path::PathBuf;

use commands::{run_batch, run_completions, run_extract, run_manpage, run_predict, run_schema};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "phishsig")]
#[command(about = "phishsig: lexical URL features for phishing classification", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Output encoding for a single feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VectorFormat {
    Json,
    Toml,
    Csv,
}

/// Output encoding for many feature vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BatchFormat {
    Csv,
    Jsonl,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the feature vector of one URL.
    Extract {
        /// URL to measure (never fetched).
        url: String,
        #[arg(long, value_enum, default_value = "json")]
        format: VectorFormat,
    },

    /// Extract features for every line of a file ("-" for stdin).
    Batch {
        /// File with one URL per line; blank lines are skipped.
        path: String,
        #[arg(long, value_enum, default_value = "csv")]
        format: BatchFormat,
    },

    /// Show the feature schema version and column order.
    Schema {
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Classify a URL with a linear model file and explain the verdict.
    Predict {
        /// URL to classify (never fetched).
        url: String,
        /// Model JSON file; defaults to `model_path` from config.toml.
        #[arg(long, value_name = "PATH")]
        model: Option<PathBuf>,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions.
    Completions {
        shell: Shell,
    },

    /// Render the man page to stdout.
    Manpage,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Extract { url, format } => run_extract(&cfg, &url, format)?,
            CliCommand::Batch { path, format } => run_batch(&cfg, &path, format)?,
            CliCommand::Schema { json } => run_schema(json)?,
            CliCommand::Predict { url, model, json } => {
                run_predict(&cfg, &url, model.as_deref(), json)?
            }
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Manpage => run_manpage()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;

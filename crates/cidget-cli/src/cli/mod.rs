//! CLI for the cidget gateway fetcher.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cidget_core::config;
use std::path::PathBuf;

use commands::{run_checksum, run_get, run_url};

/// Top-level CLI for the cidget gateway fetcher.
#[derive(Debug, Parser)]
#[command(name = "cidget")]
#[command(about = "cidget: fetch content-addressed files from an HTTP gateway", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch one content identifier from the gateway and write it to disk.
    Get {
        /// Content identifier to fetch (opaque token, e.g. an IPFS CID).
        cid: String,

        /// Gateway base URL (overrides config).
        #[arg(long, value_name = "URL")]
        gateway: Option<String>,

        /// Exact output path (overrides directory and template).
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Directory to write into (overrides config).
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Output filename template; `{cid}` is replaced by the identifier.
        #[arg(long, value_name = "TEMPLATE")]
        template: Option<String>,
    },

    /// Print the request URL a `get` would use, without fetching.
    Url {
        /// Content identifier.
        cid: String,

        /// Gateway base URL (overrides config).
        #[arg(long, value_name = "URL")]
        gateway: Option<String>,
    },

    /// Compute SHA-256 of a file (e.g. after download).
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Get {
                cid,
                gateway,
                output,
                output_dir,
                template,
            } => run_get(&cfg, &cid, gateway, output, output_dir, template).await?,
            CliCommand::Url { cid, gateway } => run_url(&cfg, &cid, gateway)?,
            CliCommand::Checksum { path } => run_checksum(&path)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;

//! `cidget get <cid>` – fetch one identifier from the gateway.

use anyhow::Result;
use cidget_core::config::CidgetConfig;
use cidget_core::fetcher::{self, FetchOptions};
use std::path::PathBuf;

/// Runs one fetch. Flags override config field by field; `--output` bypasses
/// directory and template entirely.
pub async fn run_get(
    cfg: &CidgetConfig,
    cid: &str,
    gateway: Option<String>,
    output: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    template: Option<String>,
) -> Result<()> {
    let mut opts = FetchOptions::from_config(cfg);
    if let Some(base) = gateway {
        opts.gateway_base = base;
    }
    if let Some(dir) = output_dir {
        opts.output_dir = dir;
    }
    if let Some(tpl) = template {
        opts.output_template = tpl;
    }

    let outcome = match output {
        Some(path) => fetcher::fetch_to_path(cid, &opts.gateway_base, &path, &opts.http).await?,
        None => fetcher::fetch(cid, &opts).await?,
    };

    println!(
        "Downloaded: {} ({} bytes)",
        outcome.path.display(),
        outcome.bytes
    );
    Ok(())
}

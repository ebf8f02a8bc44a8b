//! `cidget url <cid>` – print the resolved request URL.

use anyhow::Result;
use cidget_core::config::CidgetConfig;
use cidget_core::gateway;

pub fn run_url(cfg: &CidgetConfig, cid: &str, gateway_override: Option<String>) -> Result<()> {
    let base = gateway_override.as_deref().unwrap_or(&cfg.gateway_base);
    let url = gateway::request_url(base, cid)?;
    println!("{url}");
    Ok(())
}

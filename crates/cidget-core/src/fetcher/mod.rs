//! The fetch operation: one streaming GET from the gateway into a local file.
//!
//! The whole lifecycle is awaitable: the returned future resolves only after
//! the body has been received, fsynced, and renamed onto the output path (or
//! the fetch has failed and its temp file is gone). Fetches for different
//! identifiers are independent and safe to run concurrently.

mod error;
mod get;

pub use error::FetchError;

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::CidgetConfig;
use crate::gateway;
use crate::naming;
use crate::storage::{self, PartFile};

use get::get_streaming;

/// Transfer tuning knobs, usually sourced from config.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Receive-rate cap in bytes per second (None = no cap).
    pub max_recv_speed: Option<u64>,
    /// Receive buffer size in bytes (None = library default).
    pub buffer_size: Option<usize>,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            request_timeout: Duration::from_secs(3600),
            max_recv_speed: None,
            buffer_size: None,
        }
    }
}

/// Where a fetch goes: gateway endpoint plus output path derivation.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub gateway_base: String,
    pub output_dir: PathBuf,
    pub output_template: String,
    pub http: HttpOptions,
}

impl FetchOptions {
    pub fn from_config(cfg: &CidgetConfig) -> Self {
        Self {
            gateway_base: cfg.gateway_base.clone(),
            output_dir: cfg.output_dir.clone().unwrap_or_else(|| PathBuf::from(".")),
            output_template: cfg.output_template.clone(),
            http: HttpOptions {
                connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
                request_timeout: Duration::from_secs(cfg.request_timeout_secs),
                max_recv_speed: cfg.max_bytes_per_sec,
                buffer_size: cfg.buffer_bytes,
            },
        }
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            gateway_base: gateway::DEFAULT_GATEWAY.to_string(),
            output_dir: PathBuf::from("."),
            output_template: naming::DEFAULT_TEMPLATE.to_string(),
            http: HttpOptions::default(),
        }
    }
}

/// Result of a completed fetch.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// Identifier that was fetched.
    pub cid: String,
    /// Request URL the GET was issued against.
    pub url: String,
    /// Final output path.
    pub path: PathBuf,
    /// Bytes written.
    pub bytes: u64,
}

/// Fetches `cid` from the gateway, deriving the output path from the
/// configured directory and template.
pub async fn fetch(cid: &str, opts: &FetchOptions) -> Result<FetchOutcome, FetchError> {
    let path = naming::output_path(&opts.output_dir, &opts.output_template, cid);
    fetch_to_path(cid, &opts.gateway_base, &path, &opts.http).await
}

/// Fetches `cid` from `gateway_base` into exactly `final_path`.
///
/// Issues one GET against `<gateway_base>/ipfs/<cid>`. The body streams into
/// `<final_path>.part`, which is fsynced and atomically renamed on success;
/// every failure path discards the part file, so `final_path` only ever holds
/// a complete body.
pub async fn fetch_to_path(
    cid: &str,
    gateway_base: &str,
    final_path: &Path,
    http: &HttpOptions,
) -> Result<FetchOutcome, FetchError> {
    let url = gateway::request_url(gateway_base, cid)?;
    let temp = storage::temp_path(final_path);
    let part = PartFile::create(&temp).map_err(|e| FetchError::storage(&temp, e))?;
    tracing::debug!("GET {} -> {}", url, final_path.display());

    let transfer = tokio::task::spawn_blocking({
        let url = url.to_string();
        let sink = part.clone();
        let http = http.clone();
        move || get_streaming(&url, &sink, &http)
    })
    .await;

    let bytes = match transfer {
        Ok(Ok(n)) => n,
        Ok(Err(e)) => {
            discard_part(part);
            return Err(e);
        }
        Err(join_err) => {
            discard_part(part);
            return Err(FetchError::Join(join_err));
        }
    };

    if let Err(e) = part.sync() {
        let path = part.temp_path().to_path_buf();
        discard_part(part);
        return Err(FetchError::storage(&path, e));
    }
    part.finalize(final_path)
        .map_err(|e| FetchError::storage(final_path, e))?;

    tracing::info!("fetched {} ({} bytes): {}", cid, bytes, final_path.display());

    Ok(FetchOutcome {
        cid: cid.to_string(),
        url: url.into(),
        path: final_path.to_path_buf(),
        bytes,
    })
}

fn discard_part(part: PartFile) {
    if let Err(e) = part.discard() {
        tracing::debug!("failed to remove part file: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_from_config_maps_fields() {
        let mut cfg = CidgetConfig::default();
        cfg.gateway_base = "http://gateway.local:9090".to_string();
        cfg.output_dir = Some(PathBuf::from("/srv/fetched"));
        cfg.connect_timeout_secs = 5;
        cfg.max_bytes_per_sec = Some(1_000_000);

        let opts = FetchOptions::from_config(&cfg);
        assert_eq!(opts.gateway_base, "http://gateway.local:9090");
        assert_eq!(opts.output_dir, PathBuf::from("/srv/fetched"));
        assert_eq!(opts.http.connect_timeout, Duration::from_secs(5));
        assert_eq!(opts.http.max_recv_speed, Some(1_000_000));
    }

    #[test]
    fn options_from_config_defaults_output_dir_to_cwd() {
        let opts = FetchOptions::from_config(&CidgetConfig::default());
        assert_eq!(opts.output_dir, PathBuf::from("."));
        assert_eq!(opts.output_template, naming::DEFAULT_TEMPLATE);
    }
}

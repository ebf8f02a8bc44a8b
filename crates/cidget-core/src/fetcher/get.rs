//! Blocking single-stream HTTP GET.
//!
//! Streams the response body into a part file via curl's write callback.
//! Runs on the current thread; the async layer drives it from
//! `spawn_blocking`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::storage::PartFile;

use super::{FetchError, HttpOptions};

/// Streams `url` into `part` with one GET. Returns the number of bytes
/// written.
///
/// A storage error inside the write callback aborts the transfer and is
/// reported as [`FetchError::Storage`], taking precedence over the curl
/// write-abort error it provokes. A non-2xx response code is
/// [`FetchError::Status`]; note the error body may already have streamed into
/// `part`, so the caller must discard it on failure.
pub(super) fn get_streaming(
    url: &str,
    part: &PartFile,
    http: &HttpOptions,
) -> Result<u64, FetchError> {
    let received = Arc::new(AtomicU64::new(0));
    let write_err: Arc<Mutex<Option<std::io::Error>>> = Arc::new(Mutex::new(None));

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(http.connect_timeout)?;
    easy.timeout(http.request_timeout)?;
    // Stall guard: give up when under 1 KiB/s for a minute.
    easy.low_speed_limit(1024)?;
    easy.low_speed_time(Duration::from_secs(60))?;
    if let Some(speed) = http.max_recv_speed {
        easy.max_recv_speed(speed)?;
    }
    if let Some(sz) = http.buffer_size {
        easy.buffer_size(sz)?;
    }

    {
        let received = Arc::clone(&received);
        let write_err_slot = Arc::clone(&write_err);
        let sink = part.clone();
        let mut transfer = easy.transfer();
        transfer.write_function(move |data| match sink.append(data) {
            Ok(()) => {
                received.fetch_add(data.len() as u64, Ordering::Relaxed);
                Ok(data.len())
            }
            Err(e) => {
                tracing::warn!("write to part file failed: {}", e);
                *write_err_slot.lock().unwrap() = Some(e);
                Ok(0) // abort transfer
            }
        })?;
        if let Err(e) = transfer.perform() {
            if let Some(io_err) = write_err.lock().unwrap().take() {
                return Err(FetchError::storage(part.temp_path(), io_err));
            }
            return Err(FetchError::Transport(e));
        }
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Status {
            code,
            url: url.to_string(),
        });
    }

    Ok(received.load(Ordering::Relaxed))
}

//! CLI command handlers, one file per command.

mod checksum;
mod get;
mod url;

pub use checksum::run_checksum;
pub use get::run_get;
pub use url::run_url;

//! Request URL construction against the content gateway.
//!
//! A gateway serves content-addressed objects under `/ipfs/<cid>`; the
//! identifier is an opaque token and is inserted verbatim.

use url::Url;

use crate::fetcher::FetchError;

/// Default local gateway endpoint.
pub const DEFAULT_GATEWAY: &str = "http://127.0.0.1:8080";

/// Path prefix gateways serve content-addressed objects under.
pub const IPFS_PATH_PREFIX: &str = "/ipfs/";

/// Builds the request URL for `cid` against `gateway_base`.
///
/// A single trailing slash on the base is tolerated. The result must parse as
/// an absolute URL; anything else is reported as [`FetchError::Url`].
pub fn request_url(gateway_base: &str, cid: &str) -> Result<Url, FetchError> {
    let base = gateway_base.trim_end_matches('/');
    let raw = format!("{base}{IPFS_PATH_PREFIX}{cid}");
    let url = Url::parse(&raw)?;
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_base_and_cid() {
        let url = request_url("http://127.0.0.1:8080", "QmFoo").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/ipfs/QmFoo");
    }

    #[test]
    fn trailing_slash_on_base() {
        let url = request_url("http://gateway.local:9090/", "bafybeigdyrzt").unwrap();
        assert_eq!(url.as_str(), "http://gateway.local:9090/ipfs/bafybeigdyrzt");
    }

    #[test]
    fn identifier_is_not_interpreted() {
        // Opaque token: whatever the caller passes ends up in the path.
        let url = request_url("http://127.0.0.1:8080", "not-a-real-cid").unwrap();
        assert_eq!(url.path(), "/ipfs/not-a-real-cid");
    }

    #[test]
    fn unparsable_base_is_rejected() {
        assert!(matches!(
            request_url("not a url", "QmFoo"),
            Err(FetchError::Url(_))
        ));
    }
}

//! Remote endpoint configuration.

use tracing::warn;
use url::Url;

/// Sentinel value left in place of a real URL by a fresh install.
pub const ENDPOINT_PLACEHOLDER: &str = "YOUR_WEB_APP_URL";

/// Whether a remote backend is reachable by configuration.
///
/// Resolved once at startup; the gateway fails fast on `Unconfigured`
/// without attempting a network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Configured(Url),
    Unconfigured,
}

impl Endpoint {
    /// Resolve the endpoint from a raw setting.
    ///
    /// Unset, blank, the placeholder sentinel, and unparseable values all
    /// resolve to `Unconfigured` (demo/offline installs are expected).
    pub fn from_setting(raw: Option<&str>) -> Self {
        let raw = match raw {
            Some(raw) => raw.trim(),
            None => return Endpoint::Unconfigured,
        };

        if raw.is_empty() || raw == ENDPOINT_PLACEHOLDER {
            return Endpoint::Unconfigured;
        }

        match Url::parse(raw) {
            Ok(url) => Endpoint::Configured(url),
            Err(err) => {
                warn!(setting = raw, error = %err, "endpoint setting is not a valid URL, treating as unconfigured");
                Endpoint::Unconfigured
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Endpoint::Configured(_))
    }
}

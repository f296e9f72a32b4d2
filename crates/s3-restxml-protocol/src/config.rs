//! Client configuration.
//!
//! Provides [`ClientConfig`] for the [`S3Client`](crate::client::S3Client). Values are
//! loaded from environment variables, defaulting to a local emulator endpoint.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// S3 client configuration.
///
/// # Examples
///
/// ```
/// use s3_restxml_protocol::config::ClientConfig;
///
/// let config = ClientConfig::default();
/// assert_eq!(config.endpoint_url, "http://localhost:4566");
/// assert!(config.force_path_style);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Endpoint URL, e.g. `"http://localhost:4566"`.
    #[builder(default = String::from("http://localhost:4566"))]
    pub endpoint_url: String,

    /// Keep the bucket in the path. When disabled, DNS-compatible bucket names move
    /// into the host name (virtual-hosted style).
    #[builder(default = true)]
    pub force_path_style: bool,

    /// Value of the `user-agent` header sent with every request.
    #[builder(default)]
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint_url: String::from("http://localhost:4566"),
            force_path_style: true,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `S3_ENDPOINT_URL` | `http://localhost:4566` |
    /// | `S3_FORCE_PATH_STYLE` | `true` |
    /// | `S3_USER_AGENT` | unset |
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("S3_ENDPOINT_URL") {
            config.endpoint_url = v;
        }
        if let Ok(v) = std::env::var("S3_FORCE_PATH_STYLE") {
            config.force_path_style = parse_bool(&v);
        }
        if let Ok(v) = std::env::var("S3_USER_AGENT") {
            config.user_agent = Some(v).filter(|v| !v.is_empty());
        }

        config
    }
}

/// Parse a string as a boolean, accepting `"1"` and `"true"` (case-insensitive).
fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

//! Shared HTTP client construction for consistent timeout configuration.

use std::time::Duration;

/// HTTP client with standard folio configuration: 30s connect timeout,
/// 60s request timeout, `folio/{version}` user-agent.
#[must_use]
pub fn default_client() -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(30))
        .timeout(Duration::from_secs(60))
        .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("default HTTP client construction must not fail")
}

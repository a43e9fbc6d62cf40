use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use std::time::Duration;

/// Identifies this service to Scryfall, which asks API clients for a real UA.
pub const SERVICE_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Builds the single client shared by both upstream lookups.
///
/// No timeout is applied unless the configuration sets one, so a stalled
/// upstream stalls only the request waiting on it.
pub fn build_client<C: ConfigProvider + ?Sized>(config: &C) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let mut builder = Client::builder()
        .user_agent(SERVICE_USER_AGENT)
        .default_headers(headers);

    if let Some(seconds) = config.request_timeout_seconds() {
        tracing::debug!("Upstream request timeout set to {}s", seconds);
        builder = builder.timeout(Duration::from_secs(seconds));
    }

    Ok(builder.build()?)
}

pub(crate) fn join_base(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

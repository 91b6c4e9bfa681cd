use crate::language::DEFAULT_COUNTRY;

const DEFAULT_USER_AGENT: &str = "Rust news API";

/// Connection settings for a news API client.
///
/// Replaces ambient process-wide state: the endpoint and key are handed to
/// [`crate::api::Api::new`] / [`crate::api_sync::ApiSync::new`] explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the API, without a trailing slash.
    pub api_endpoint: String,
    /// Key merged into the query string of every request.
    pub api_key: String,
    /// Country code injected into top-headlines requests that carry none.
    pub default_country: String,
    /// User agent name, extended with the crate name and version on the wire.
    pub user_agent: String,
}

impl Config {
    /// Returns a new `Config` for the given endpoint and key, with the
    /// default country and user agent.
    pub fn new<S: Into<String>>(api_endpoint: S, api_key: S) -> Config {
        Config {
            api_endpoint: api_endpoint.into(),
            api_key: api_key.into(),
            default_country: DEFAULT_COUNTRY.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

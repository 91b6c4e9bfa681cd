/*!
The `Api` class serves as the async interface to the news API.
*/

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

use serde_json::Value;
use std::collections::HashMap;
use tracing::info;

use crate::config::Config;
use crate::error::{Operation, Result};
use crate::request;
use crate::response::NewsResponse;
use crate::transport::{self, Method};
use crate::Params;

/// `Api` is the main class to interact with a news API
#[derive(Debug, Clone)]
pub struct Api {
    config: Config,
    client: reqwest::Client,
}

impl Api {
    /// Returns a new `Api` element for the given configuration.
    /// No request is issued at construction time.
    pub fn new(config: Config) -> Result<Api> {
        Api::new_from_builder(config, reqwest::Client::builder())
    }

    /// Returns a new `Api` element for the given configuration.
    /// Uses a bespoke reqwest::ClientBuilder, e.g. to set a timeout or a
    /// proxy; the library itself imposes neither.
    pub fn new_from_builder(config: Config, builder: reqwest::ClientBuilder) -> Result<Api> {
        Ok(Api {
            config,
            client: builder.build()?,
        })
    }

    /// Returns the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a reference to the reqwest client
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Returns an empty parameter list
    pub fn no_params(&self) -> Params {
        HashMap::new()
    }

    /// Returns the user agent string, as it is passed to the API through a HTTP header
    pub fn user_agent_full(&self) -> String {
        format!(
            "{}; {}-rust/{}",
            self.config.user_agent,
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        )
    }

    /// Returns the current top articles, filtered by country/category
    /// parameters. A missing `country` parameter is filled with the
    /// configured default before the language is resolved.
    pub async fn top_headlines(&self, params: Params) -> Result<NewsResponse> {
        let url = request::top_headlines_url(&self.config, params);
        let value = self.get(Operation::TopHeadlines, &url).await?;
        into_response(Operation::TopHeadlines, value)
    }

    /// Returns articles matching a free-text query. Additional parameters
    /// pass through; no default country is applied.
    pub async fn search(&self, q: &str, params: Params) -> Result<NewsResponse> {
        let url = request::search_url(&self.config, q, params);
        let value = self.get(Operation::Search, &url).await?;
        into_response(Operation::Search, value)
    }

    async fn get(&self, operation: Operation, url: &str) -> Result<Value> {
        transport::execute(
            &self.client,
            operation,
            Method::Get,
            url,
            &self.user_agent_full(),
            None,
        )
        .await
    }
}

/// Deserializes a transport value into the response model. Shared with the
/// blocking client.
pub(crate) fn into_response(operation: Operation, value: Value) -> Result<NewsResponse> {
    let response: NewsResponse = serde_json::from_value(value)?;
    info!(
        operation = operation.path(),
        articles = response.articles.len(),
        "response received"
    );
    Ok(response)
}

/*!
The `ApiSync` class serves as the blocking interface to the news API, for
callers without an async runtime.
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

use crate::api::into_response;
use crate::config::Config;
use crate::error::{Operation, Result};
use crate::request;
use crate::response::NewsResponse;
use crate::transport::{self, Method};
use crate::Params;

/// `ApiSync` is the blocking variant of [`crate::api::Api`]. Both share
/// the request preparation and response interpretation; only the
/// execution strategy differs.
#[derive(Debug, Clone)]
pub struct ApiSync {
    config: Config,
    client: reqwest::blocking::Client,
}

impl ApiSync {
    /// Returns a new `ApiSync` element for the given configuration.
    /// No request is issued at construction time.
    pub fn new(config: Config) -> Result<ApiSync> {
        ApiSync::new_from_builder(config, reqwest::blocking::Client::builder())
    }

    /// Returns a new `ApiSync` element for the given configuration.
    /// Uses a bespoke reqwest::blocking::ClientBuilder.
    pub fn new_from_builder(
        config: Config,
        builder: reqwest::blocking::ClientBuilder,
    ) -> Result<ApiSync> {
        Ok(ApiSync {
            config,
            client: builder.build()?,
        })
    }

    /// Returns the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a reference to the blocking reqwest client
    pub fn client(&self) -> &reqwest::blocking::Client {
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
    /// parameters, blocking until the response arrives. A missing
    /// `country` parameter is filled with the configured default.
    pub fn top_headlines(&self, params: Params) -> Result<NewsResponse> {
        let url = request::top_headlines_url(&self.config, params);
        let value = self.get(Operation::TopHeadlines, &url)?;
        into_response(Operation::TopHeadlines, value)
    }

    /// Returns articles matching a free-text query, blocking until the
    /// response arrives. No default country is applied.
    pub fn search(&self, q: &str, params: Params) -> Result<NewsResponse> {
        let url = request::search_url(&self.config, q, params);
        let value = self.get(Operation::Search, &url)?;
        into_response(Operation::Search, value)
    }

    fn get(&self, operation: Operation, url: &str) -> Result<Value> {
        transport::execute_blocking(
            &self.client,
            operation,
            Method::Get,
            url,
            &self.user_agent_full(),
            None,
        )
    }
}

/*!
Request preparation: parameter decoration and final URL construction,
shared by the async and blocking clients.
*/

use crate::config::Config;
use crate::error::Operation;
use crate::language::language_for;
use crate::query::build_query_url;
use crate::Params;

/// Final URL for a top-headlines request.
///
/// A missing `country` parameter is filled with the configured default
/// before the language is resolved.
pub fn top_headlines_url(config: &Config, mut params: Params) -> String {
    if !params.contains_key("country") {
        params.insert("country".to_string(), config.default_country.clone());
    }
    decorate(config, &mut params);
    endpoint_url(config, Operation::TopHeadlines, &params)
}

/// Final URL for a search request.
///
/// No default country is applied; the language follows whatever `country`
/// the params carry. A `q` already present in `params` wins over the `q`
/// argument.
pub fn search_url(config: &Config, q: &str, mut params: Params) -> String {
    params.entry("q".to_string()).or_insert_with(|| q.to_string());
    decorate(config, &mut params);
    endpoint_url(config, Operation::Search, &params)
}

/// Injects the resolved language and the API key. Map semantics keep both
/// keys unique, and the auth side wins any collision with caller params.
fn decorate(config: &Config, params: &mut Params) {
    let country = params.get("country").map(String::as_str).unwrap_or("");
    params.insert("language".to_string(), language_for(country).to_string());
    params.insert("apiKey".to_string(), config.api_key.clone());
}

fn endpoint_url(config: &Config, operation: Operation, params: &Params) -> String {
    let url = format!("{}/{}", config.api_endpoint, operation.path());
    build_query_url(&url, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config() -> Config {
        Config::new("https://news.example.org", "secret")
    }

    fn query_pairs(url: &str) -> Vec<(String, String)> {
        let query = url.split_once('?').map(|(_, q)| q).unwrap_or("");
        query
            .split('&')
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (key.to_string(), value.to_string())
            })
            .collect()
    }

    fn query_map(url: &str) -> HashMap<String, String> {
        query_pairs(url).into_iter().collect()
    }

    #[test]
    fn top_headlines_injects_the_default_country() {
        let url = top_headlines_url(&config(), HashMap::new());
        let query = query_map(&url);
        assert!(url.starts_with("https://news.example.org/top-headlines?"));
        assert_eq!(query.get("country").map(String::as_str), Some("ru"));
        assert_eq!(query.get("language").map(String::as_str), Some("ru"));
        assert_eq!(query.get("apiKey").map(String::as_str), Some("secret"));
    }

    #[test]
    fn top_headlines_keeps_an_explicit_country() {
        let url = top_headlines_url(&config(), params!["country" => "us"]);
        let query = query_map(&url);
        assert_eq!(query.get("country").map(String::as_str), Some("us"));
        assert_eq!(query.get("language").map(String::as_str), Some("en"));
    }

    #[test]
    fn search_targets_the_everything_endpoint() {
        let url = search_url(&config(), "bitcoin", params!["country" => "us"]);
        let query = query_map(&url);
        assert!(url.starts_with("https://news.example.org/everything?"));
        assert_eq!(query.get("q").map(String::as_str), Some("bitcoin"));
        assert_eq!(query.get("country").map(String::as_str), Some("us"));
        assert_eq!(query.get("language").map(String::as_str), Some("en"));
    }

    #[test]
    fn search_applies_no_default_country() {
        let url = search_url(&config(), "rust", HashMap::new());
        let query = query_map(&url);
        assert_eq!(query.get("country"), None);
        assert_eq!(query.get("language").map(String::as_str), Some(""));
    }

    #[test]
    fn a_q_parameter_in_the_map_wins() {
        let url = search_url(&config(), "ignored", params!["q" => "kept"]);
        assert_eq!(query_map(&url).get("q").map(String::as_str), Some("kept"));
    }

    #[test]
    fn auth_params_appear_exactly_once() {
        let url = search_url(
            &config(),
            "rust",
            params!["apiKey" => "spoofed", "language" => "xx"],
        );
        let pairs = query_pairs(&url);
        let api_keys: Vec<_> = pairs.iter().filter(|(k, _)| k == "apiKey").collect();
        let languages: Vec<_> = pairs.iter().filter(|(k, _)| k == "language").collect();
        assert_eq!(api_keys.len(), 1);
        assert_eq!(api_keys[0].1, "secret");
        assert_eq!(languages.len(), 1);
        assert_eq!(languages[0].1, "");
    }
}

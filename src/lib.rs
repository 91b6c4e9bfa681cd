/*!
A client library for a news headlines API.

Two operations are exposed: top headlines and free-text article search,
over either an async ([`api::Api`]) or a blocking
([`api_sync::ApiSync`]) execution strategy.
*/

use std::collections::HashMap;

#[macro_export]
/// To quickly create a param set.
/// Example: `params!["country" => "us", "category" => "science"]`
macro_rules! params {
    ($( $key: expr => $val: expr ),* $(,)?) => {{
         let mut map = ::std::collections::HashMap::new();
         $( map.insert($key.into(), $val.into()); )*
         map
    }}
}

/// Query string parameters, as passed to the client operations.
pub type Params = HashMap<String, String>;

pub use reqwest;

pub mod api;
pub mod api_sync;
pub mod config;
pub mod error;
pub mod language;
pub mod query;
pub mod request;
pub mod response;
pub mod transport;

#[cfg(test)]
mod tests {
    #[test]
    fn params_macro_builds_a_map() {
        let params: crate::Params = params!["country" => "us", "q" => "rust"];
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("country").map(String::as_str), Some("us"));
        assert_eq!(params.get("q").map(String::as_str), Some("rust"));
    }
}

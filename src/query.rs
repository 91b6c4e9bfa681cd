use crate::Params;

/// Serializes `params` onto `url` as a query string.
///
/// An empty param set returns `url` unchanged. Otherwise every key and
/// value is percent-encoded independently and the `key=value` pairs are
/// joined with `&`, appended with `?` unless `url` already carries a query
/// string. Pair order follows map enumeration order and is unspecified.
pub fn build_query_url(url: &str, params: &Params) -> String {
    if params.is_empty() {
        return url.to_string();
    }

    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<String>>()
        .join("&");

    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", url, separator, query)
}

/// Country code used for top-headlines requests that specify none.
pub const DEFAULT_COUNTRY: &str = "ru";

/// Returns the news language for a country code, or `""` for countries the
/// API has no language mapping for.
///
/// The default country is applied by the caller, not here; an unknown or
/// empty code resolves to the empty string and is sent as such.
pub fn language_for(country: &str) -> &'static str {
    match country {
        "ru" => "ru",
        "us" => "en",
        _ => "",
    }
}

//! Percent-encoding for path segments and query strings.

use url::form_urlencoded;

/// Percent-encodes everything outside `A-Z a-z 0-9 - _ . ~`.
pub fn encode_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Percent-encodes `value` twice.
///
/// The OLS v2 routes decode a class IRI path segment twice, once in the
/// gateway and once in the application, so a singly encoded IRI does not
/// match the route.
pub fn double_encode(value: &str) -> String {
    encode_segment(&encode_segment(value))
}

/// Builds an `application/x-www-form-urlencoded` query string.
pub fn encode_query(params: &[(&'static str, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())))
        .finish()
}

//! Percent-encoding for path labels and query strings.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything except ASCII alphanumerics and `-_.~` is escaped, including the
/// `!'()*` that URI-component encoding leaves alone.
const EXTENDED_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a value with the extended set.
#[must_use]
pub fn extended_encode(input: &str) -> String {
    utf8_percent_encode(input, EXTENDED_ENCODE_SET).to_string()
}

/// Encode a greedy label: each `/`-separated segment is encoded on its own and the
/// separators are kept.
#[must_use]
pub fn encode_greedy(input: &str) -> String {
    input
        .split('/')
        .map(extended_encode)
        .collect::<Vec<_>>()
        .join("/")
}

/// Render a query list as `k=v&k2=v2`. Keys without a value render as `k=`.
#[must_use]
pub fn encode_query(query: &[(String, String)]) -> String {
    query
        .iter()
        .map(|(k, v)| format!("{}={}", extended_encode(k), extended_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

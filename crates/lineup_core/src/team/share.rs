//! Share-link codec.
//!
//! A lineup travels in the page URL as `?heroes=Axe,Shadow%20Shaman`: hero
//! names joined with [`DELIMITER`], percent-encoded as a query value.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Query parameter carrying the lineup.
pub const SHARE_PARAM: &str = "heroes";

/// Separator between hero names inside the token.
pub const DELIMITER: char = ',';

/// Join names into a share token.
pub fn encode_names<S: AsRef<str>>(names: &[S]) -> String {
    let mut token = String::new();
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            token.push(DELIMITER);
        }
        token.push_str(name.as_ref());
    }
    token
}

/// Split a share token; empty segments are dropped.
pub fn decode_names(token: &str) -> Vec<String> {
    token.split(DELIMITER).filter(|s| !s.is_empty()).map(str::to_string).collect()
}

/// `heroes=<token>`, or an empty string for an empty lineup.
pub fn share_query<S: AsRef<str>>(names: &[S]) -> String {
    if names.is_empty() {
        return String::new();
    }
    format!("{}={}", SHARE_PARAM, percent_encode(&encode_names(names)))
}

/// `base?heroes=...`; the bare `base` clears the lineup.
pub fn share_link<S: AsRef<str>>(base: &str, names: &[S]) -> String {
    let query = share_query(names);
    if query.is_empty() {
        base.to_string()
    } else {
        format!("{}?{}", base, query)
    }
}

/// Extract the decoded `heroes` value from a query string or full link.
///
/// Returns `None` when the parameter is missing, empty, valueless or
/// repeated.
pub fn parse_query(query: &str) -> Option<String> {
    let query = match query.split_once('?') {
        Some((_, rest)) => rest,
        None => query,
    };
    let query = query.split('#').next().unwrap_or_default();

    let mut found: Option<Option<String>> = None;
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = match pair.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (pair, None),
        };
        if percent_decode(key) != SHARE_PARAM {
            continue;
        }
        if found.is_some() {
            // repeated parameter parses as a list, not a token
            return None;
        }
        found = Some(value.map(percent_decode));
    }

    found.flatten().filter(|token| !token.is_empty())
}

/// Query-value bytes left literal: alphanumerics and `-_.~!*'(),`.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'!')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b',');

/// Percent-encode a query value; the delimiter stays literal.
pub fn percent_encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Decode `%XX` escapes and `+`; malformed escapes pass through verbatim.
pub fn percent_decode(value: &str) -> String {
    let value = value.replace('+', " ");
    percent_decode_str(&value).decode_utf8_lossy().into_owned()
}

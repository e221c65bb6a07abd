//! Query-string and path-segment helpers.

#[cfg(test)]
#[path = "url_test.rs"]
mod url_test;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Percent-encode everything outside the RFC 3986 unreserved set.
pub fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => out.push(char::from(byte)),
            _ => {
                out.push('%');
                out.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
                out.push(char::from(HEX_DIGITS[usize::from(byte & 0x0F)]));
            }
        }
    }
    out
}

/// `base?k=v&...` with each value encoded; no `?` when `pairs` is empty.
pub fn with_query(base: &str, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return base.to_owned();
    }
    let query = pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", encode_component(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{base}?{query}")
}

/// Split `a=1&b=2` (optionally prefixed with `#` or `?`) into pairs.
///
/// Values are returned as-is; callers only read token-safe values.
pub fn parse_pairs(raw: &str) -> Vec<(&str, &str)> {
    raw.trim_start_matches(['#', '?'])
        .split('&')
        .filter(|part| !part.is_empty())
        .map(|part| part.split_once('=').unwrap_or((part, "")))
        .collect()
}

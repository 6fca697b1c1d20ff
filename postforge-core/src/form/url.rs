use crate::config::constants::urls::{DEFAULT_SCHEME_PREFIX, SCHEME_SEPARATOR};
use reqwest::Url;

/// Trim `raw` and prepend `https://` when no scheme is present.
///
/// An empty or whitespace-only value normalizes to `""`, which callers treat
/// as invalid.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if has_scheme(trimmed) {
        return trimmed.to_string();
    }
    format!("{DEFAULT_SCHEME_PREFIX}{trimmed}")
}

/// Parse `value` as an absolute URL with a host
pub fn parse_absolute(value: &str) -> Option<Url> {
    let url = Url::parse(value).ok()?;
    url.host_str().filter(|host| !host.is_empty())?;
    Some(url)
}

fn has_scheme(value: &str) -> bool {
    let Some(idx) = value.find(SCHEME_SEPARATOR) else {
        return false;
    };
    let scheme = &value[..idx];
    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}

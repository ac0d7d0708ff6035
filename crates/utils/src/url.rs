const INSECURE_PREFIX: &str = "http://";
const SECURE_PREFIX: &str = "https://";

/// Rewrites a leading `http://` to `https://`; anything else is returned as-is
pub fn ensure_https(url: &str) -> String {
    match url.strip_prefix(INSECURE_PREFIX) {
        Some(rest) => format!("{}{}", SECURE_PREFIX, rest),
        None => url.to_string(),
    }
}

/// True when the string already carries an http(s) scheme
pub fn is_absolute_http(url: &str) -> bool {
    url.starts_with("http")
}

/// Last `/`-separated segment of a path or URL, ignoring a trailing slash
pub fn last_segment(value: &str) -> &str {
    value
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(value)
}

//! Log sanitization utilities
//!
//! Keeps record payloads and API keys from being written in full to
//! debug/error logs.

/// Maximum number of bytes of a response body included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of a secret kept visible.
const SECRET_PREFIX: usize = 4;

/// Truncate a string for safe logging.
///
/// Strings within the limit are returned unchanged; longer ones are cut on a
/// character boundary and suffixed with the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}

/// Mask an API key, keeping a short prefix so keys can be told apart in logs.
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "<empty>".to_string();
    }
    let prefix: String = secret.chars().take(SECRET_PREFIX).collect();
    if prefix.len() == secret.len() {
        return "****".to_string();
    }
    format!("{prefix}****")
}

//! Shared utility functions.

/// Shorten `s` for log output to at most `max_bytes` bytes plus an ellipsis.
///
/// Never splits a UTF-8 character; strings that already fit are returned
/// as-is.
pub fn log_preview(s: &str, max_bytes: usize) -> String {
    if s.len() <= max_bytes {
        return s.to_string();
    }
    let end = (0..=max_bytes)
        .rev()
        .find(|&i| s.is_char_boundary(i))
        .unwrap_or(0);
    format!("{}…", &s[..end])
}

//! Logging utilities with sensitive data redaction.

use std::fmt;

/// Maximum number of bytes of a response body written to debug logs
pub const MAX_LOGGED_BODY_BYTES: usize = 2048;

/// Wrapper for sensitive data that redacts on display
#[derive(Clone)]
pub struct Redacted<T>(T);

impl<T> Redacted<T> {
    /// Create a new redacted value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Get the inner value (use sparingly)
    pub fn expose(&self) -> &T {
        &self.0
    }
}

impl<T> fmt::Debug for Redacted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl<T> fmt::Display for Redacted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

/// Redact an access key, preserving a short prefix for debugging
pub fn redact_access_key(key: &str) -> String {
    if key.len() <= 8 || !key.is_char_boundary(4) {
        "[REDACTED]".to_string()
    } else {
        format!("{}...[REDACTED]", &key[..4])
    }
}

/// Truncate a body for logging, keeping at most [`MAX_LOGGED_BODY_BYTES`]
pub fn truncate_body(body: &str) -> &str {
    if body.len() <= MAX_LOGGED_BODY_BYTES {
        return body;
    }
    let mut end = MAX_LOGGED_BODY_BYTES;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redacted_display() {
        let secret = Redacted::new("AccessKey live_abc");
        assert_eq!(format!("{}", secret), "[REDACTED]");
        assert_eq!(format!("{:?}", secret), "[REDACTED]");
        assert_eq!(secret.expose(), &"AccessKey live_abc");
    }

    #[test]
    fn test_redact_access_key() {
        assert_eq!(redact_access_key("test_gshuPaZoeEG6ovbc"), "test...[REDACTED]");
        assert_eq!(redact_access_key("short"), "[REDACTED]");
    }

    #[test]
    fn test_truncate_body() {
        assert_eq!(truncate_body("{}"), "{}");

        let long = "é".repeat(MAX_LOGGED_BODY_BYTES);
        let truncated = truncate_body(&long);
        assert!(truncated.len() <= MAX_LOGGED_BODY_BYTES);
        assert!(truncated.chars().all(|c| c == 'é'));
    }
}

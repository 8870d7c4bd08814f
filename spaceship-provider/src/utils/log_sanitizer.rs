//! Log sanitization utilities
//!
//! Keeps API secrets and large response bodies out of debug/error logs.

/// Maximum number of bytes of a body included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of a secret left visible.
const SECRET_VISIBLE_CHARS: usize = 4;

/// Largest char boundary `<= index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

/// Truncate a string for safe logging.
///
/// Strings within the limit are returned as is; longer ones are cut on a char
/// boundary and suffixed with the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask a credential, keeping only a short prefix for identification.
///
/// Short or empty secrets are fully masked.
pub fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= SECRET_VISIBLE_CHARS * 2 {
        return "****".to_string();
    }
    let prefix: String = secret.chars().take(SECRET_VISIBLE_CHARS).collect();
    format!("{prefix}****")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_unchanged() {
        let s = r#"{"items":[]}"#;
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn long_body_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
        assert!(result.contains(&format!("{} bytes]", TRUNCATE_LIMIT + 100)));
    }

    #[test]
    fn multibyte_chars_not_split() {
        let s = "é".repeat(300);
        let result = truncate_for_log(&s);
        assert!(result.starts_with('é'));
        assert!(result.contains("... [truncated, total 600 bytes]"));
    }

    #[test]
    fn secret_keeps_prefix_only() {
        assert_eq!(mask_secret("abcd1234efgh5678"), "abcd****");
    }

    #[test]
    fn short_secret_fully_masked() {
        assert_eq!(mask_secret(""), "****");
        assert_eq!(mask_secret("abc"), "****");
    }
}

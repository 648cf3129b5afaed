//! Masking of personal data before it reaches the logs.

const VISIBLE_CHARS: usize = 3;

/// Mask an email address for safe logging.
///
/// Keeps at most the first three characters of the local part and the whole
/// domain. Works on characters, not bytes, so multi-byte addresses never
/// split inside a code point.
///
/// # Examples
/// ```ignore
/// assert_eq!(mask_email("user@example.com"), "use***@example.com");
/// assert_eq!(mask_email("ab@test.org"), "ab***@test.org");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => format!("{}***@{}", visible_prefix(local), domain),
        None => format!("{}***", visible_prefix(email)),
    }
}

fn visible_prefix(value: &str) -> String {
    value.chars().take(VISIBLE_CHARS).collect()
}

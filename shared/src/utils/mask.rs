//! Masking helpers for secrets that end up in logs

/// Mask a credential for logging, keeping only the last four characters.
///
/// ```ignore
/// assert_eq!(mask_secret("10000000000003"), "**********0003");
/// ```
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }

    let visible = 4;
    let hidden = chars.len() - visible;
    let tail: String = chars[hidden..].iter().collect();
    format!("{}{}", "*".repeat(hidden), tail)
}

/// Fully redact a value, preserving only whether it was set
pub fn redact(value: &str) -> &'static str {
    if value.is_empty() {
        "<empty>"
    } else {
        "<redacted>"
    }
}

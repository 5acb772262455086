//! Domain name utilities

use once_cell::sync::Lazy;
use regex::Regex;

// URL scheme prefix such as "https://"
static SCHEME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").unwrap()
});

/// Normalize a user-typed institution domain.
///
/// Strips whitespace, any URL scheme, and anything after the host, then lowercases.
/// `"  HTTPS://School.Instructure.com/login "` becomes `"school.instructure.com"`.
pub fn normalize_domain(input: &str) -> String {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let without_scheme = SCHEME_REGEX.replace(&compact, "");
    let host = without_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    host.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_plain_domain() {
        assert_eq!(normalize_domain("school.instructure.com"), "school.instructure.com");
    }

    #[test]
    fn test_normalize_strips_scheme_and_path() {
        assert_eq!(
            normalize_domain("  HTTPS://School.Instructure.com/login/canvas "),
            "school.instructure.com"
        );
        assert_eq!(normalize_domain("http://localhost:3000?x=1"), "localhost:3000");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_domain("   "), "");
        assert_eq!(normalize_domain("https://"), "");
    }
}

//! Pure text helpers for user fields.
//!
//! No logging, no side effects.

/// Normalize an email for storage and lookups: trim and ASCII-lowercase.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// Join name parts into a display name, collapsing extra whitespace.
///
/// Empty parts are skipped, so a missing last name does not leave a
/// trailing space.
pub fn full_name(first: &str, last: &str) -> String {
    let mut out = String::new();
    for part in [first, last] {
        for word in part.split_whitespace() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(word);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Alice@Example.COM "), "alice@example.com");
        assert_eq!(normalize_email("bob@example.com"), "bob@example.com");
        assert_eq!(normalize_email("   "), "");
    }

    #[test]
    fn test_full_name() {
        assert_eq!(full_name("Alice", "Smith"), "Alice Smith");
        assert_eq!(full_name("  Alice ", " van  Dyk "), "Alice van Dyk");
        assert_eq!(full_name("Prince", ""), "Prince");
        assert_eq!(full_name("", ""), "");
    }
}

//! Input sanitization.
//!
//! Card numbers arrive as free text: grouped with spaces or hyphens, pasted
//! with stray punctuation, or not numbers at all. Everything that is not an
//! ASCII digit is dropped before any checksum or brand rule runs.

/// Strips every character that is not an ASCII digit (`0`-`9`).
///
/// The relative order of the remaining digits is preserved. No length or
/// format checks are made; the result may be empty.
///
/// # Example
///
/// ```
/// use cc_brand::sanitize;
///
/// assert_eq!(sanitize("4532-1234-5678-8909"), "4532123456788909");
/// assert_eq!(sanitize("4532 1234 5678 8909"), "4532123456788909");
/// assert_eq!(sanitize("invalid_number"), "");
/// ```
pub fn sanitize(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Extracts the digit values (0-9) of `raw`, skipping everything else.
///
/// This is the numeric counterpart of [`sanitize`], suitable for
/// [`luhn::validate`](crate::luhn::validate).
pub fn digits(raw: &str) -> Vec<u8> {
    raw.bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators_removed() {
        assert_eq!(sanitize("4532-1234-5678-8901"), "4532123456788901");
        assert_eq!(sanitize("4532 1234 5678 8901"), "4532123456788901");
        assert_eq!(sanitize("4532.1234/5678_8901"), "4532123456788901");
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("invalid_number"), "");
        assert_eq!(sanitize(" - - "), "");
    }

    #[test]
    fn test_non_ascii_digits_dropped() {
        // Unicode digits outside 0-9 are not card digits
        assert_eq!(sanitize("4٣1"), "41");
        assert_eq!(sanitize("１２3"), "3");
    }

    #[test]
    fn test_idempotent() {
        let once = sanitize("  37-1234 567890 120 ");
        assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn test_digit_values() {
        assert_eq!(digits("4-1 2"), vec![4, 1, 2]);
        assert!(digits("none").is_empty());
    }
}

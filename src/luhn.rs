//! Luhn algorithm implementation.
//!
//! The Luhn algorithm (also known as the "modulus 10" algorithm) is the
//! checksum carried by every payment card number. A number whose checksum
//! fails is never assigned a brand.

/// Lookup table for doubled digits: double the value, subtract 9 if > 9.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Checks a digit string against the Luhn checksum.
///
/// Returns `false` for an empty string or for any string containing a
/// character other than an ASCII digit, so the result holds even when the
/// input was never passed through [`sanitize`](crate::sanitize::sanitize).
///
/// # Example
///
/// ```
/// use cc_brand::is_luhn_valid;
///
/// assert!(is_luhn_valid("4111111111111111"));
/// assert!(!is_luhn_valid("4111111111111112"));
/// assert!(!is_luhn_valid("4111-1111-1111-1111"));
/// assert!(!is_luhn_valid(""));
/// ```
pub fn is_luhn_valid(digits: &str) -> bool {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let values: Vec<u8> = digits.bytes().map(|b| b - b'0').collect();
    validate(&values)
}

/// Validates a sequence of digit values (0-9) using the Luhn algorithm.
///
/// # Returns
///
/// `true` if the checksum is valid, `false` otherwise. An empty slice is
/// never valid.
///
/// # Algorithm
///
/// 1. Starting from the rightmost digit (check digit), moving left
/// 2. Double every second digit
/// 3. If doubling results in a number > 9, subtract 9
/// 4. Sum all digits
/// 5. If the sum is divisible by 10, the number is valid
///
/// # Example
///
/// ```
/// use cc_brand::luhn::validate;
///
/// let digits = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert!(validate(&digits));
///
/// let invalid = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2];
/// assert!(!validate(&invalid));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    if digits.is_empty() {
        return false;
    }

    checksum_mod10(digits) == 0
}

/// Computes the Luhn sum (not reduced modulo 10) for a sequence of digits.
///
/// The rightmost digit is position 0 and is not doubled; every digit at an
/// odd position is doubled.
///
/// Values above 9 are reduced modulo 10 so the table lookup cannot go out
/// of bounds; callers are expected to pass digit values only.
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u64 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| weighted(digit, i % 2 == 1) as u64)
        .sum()
}

/// The Luhn sum modulo 10, reduced at every step so it cannot overflow.
#[inline]
fn checksum_mod10(digits: &[u8]) -> u8 {
    digits
        .iter()
        .rev()
        .enumerate()
        .fold(0, |acc, (i, &digit)| (acc + weighted(digit, i % 2 == 1)) % 10)
}

#[inline]
fn weighted(digit: u8, doubled: bool) -> u8 {
    let digit = digit % 10;
    if doubled {
        DOUBLE_TABLE[digit as usize]
    } else {
        digit
    }
}

/// Generates the check digit for a partial card number.
///
/// Given digits without the check digit, computes what the check digit
/// should be for the number to pass Luhn validation.
///
/// # Example
///
/// ```
/// use cc_brand::luhn::generate_check_digit;
///
/// let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(generate_check_digit(&partial), 1);
/// ```
#[inline]
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    // Every existing digit shifts one position left once the check digit is
    // appended, so the doubling parity flips relative to compute_checksum.
    let sum = digits
        .iter()
        .rev()
        .enumerate()
        .fold(0u8, |acc, (i, &digit)| (acc + weighted(digit, i % 2 == 0)) % 10);

    (10 - sum) % 10
}

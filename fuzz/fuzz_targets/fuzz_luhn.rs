//! Fuzz target for the Luhn algorithm.
//!
//! Tests that luhn functions never panic and maintain invariants.

#![no_main]

use cc_brand::luhn;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Clamp values to valid digit range
    let digits: Vec<u8> = data.iter().map(|&b| b % 10).collect();

    let valid = luhn::validate(&digits);

    // The string form must agree with the slice form
    let text: String = digits.iter().map(|&d| (b'0' + d) as char).collect();
    assert_eq!(luhn::is_luhn_valid(&text), valid);

    // Adding the check digit should always make the number valid
    let mut with_check = digits.clone();
    with_check.push(luhn::generate_check_digit(&digits));
    assert!(luhn::validate(&with_check), "Adding check digit should make valid");
});

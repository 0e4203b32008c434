//! Fuzz target for the classification pipeline.
//!
//! Classification must never panic, and a brand is only ever reported for
//! a Luhn-valid sanitized number.

#![no_main]

use cc_brand::{classify, detect, is_luhn_valid, sanitize};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let result = classify(input);

    assert!(result.sanitized_number.bytes().all(|b| b.is_ascii_digit()));
    assert_eq!(sanitize(&result.sanitized_number), result.sanitized_number);

    if let Some(brand) = result.brand {
        assert!(is_luhn_valid(&result.sanitized_number), "brand without valid checksum");
        assert_eq!(detect::match_rules(&result.sanitized_number), Some(brand));
    }
});

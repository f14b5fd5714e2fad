// crates/formcheck-core/src/checksum.rs
// ============================================================================
// Module: Luhn Checksum Validator
// Description: Mod-10 checksum validation for card-like identifiers.
// Purpose: Total, allocation-light validation over arbitrary user input.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Validates candidate numbers with the Luhn (mod 10) checksum. Only ASCII
//! digits are significant; separators such as spaces and dashes are dropped
//! silently. Candidates outside the accepted digit-count window are rejected
//! before any arithmetic is performed.
//!
//! ## Invariants
//! - Every input yields a boolean; no input panics.
//! - The result depends only on the digit subsequence of the input.

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Minimum number of digits accepted for a checksum candidate.
pub const MIN_CHECKSUM_DIGITS: usize = 13;
/// Maximum number of digits accepted for a checksum candidate.
pub const MAX_CHECKSUM_DIGITS: usize = 19;

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Returns the ASCII digit subsequence of `candidate`.
#[must_use]
pub fn normalize_digits(candidate: &str) -> String {
    candidate.chars().filter(char::is_ascii_digit).collect()
}

/// Returns true when `candidate` carries 13 to 19 digits satisfying the Luhn checksum.
///
/// # Examples
///
/// ```
/// use formcheck_core::checksum::is_valid_checksum;
///
/// assert!(is_valid_checksum("4532 0151 1283 0366"));
/// assert!(!is_valid_checksum("4532 0151 1283 0367"));
/// assert!(!is_valid_checksum(""));
/// ```
#[must_use]
pub fn is_valid_checksum(candidate: &str) -> bool {
    let digits = normalize_digits(candidate);
    if digits.len() < MIN_CHECKSUM_DIGITS || digits.len() > MAX_CHECKSUM_DIGITS {
        return false;
    }

    let mut sum = 0u32;
    let mut double = false;
    for digit in digits.bytes().rev() {
        let mut value = u32::from(digit - b'0');
        if double {
            value *= 2;
            if value > 9 {
                value -= 9;
            }
        }
        sum += value;
        double = !double;
    }
    sum % 10 == 0
}

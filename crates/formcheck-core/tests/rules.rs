// crates/formcheck-core/tests/rules.rs
// ============================================================================
// Module: Validation Rule Tests
// Description: Known-answer tests for the pre-built validation rules.
// Purpose: Pin rule acceptance and the violations each rule reports.
// ============================================================================

//! Validation rule tests for formcheck-core.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use formcheck_core::FieldRule;
use formcheck_core::FileConstraints;
use formcheck_core::FileMeta;
use formcheck_core::FileRule;
use formcheck_core::Locale;
use formcheck_core::MessageKey;
use formcheck_core::MessageParams;
use formcheck_core::MessageResolver;
use formcheck_core::PasswordPolicy;
use formcheck_core::PasswordRule;
use formcheck_core::PasswordStrength;
use formcheck_core::PostalCountry;
use formcheck_core::Violation;
use formcheck_core::rules::check_file;
use formcheck_core::rules::check_password;
use formcheck_core::rules::first_violation;
use formcheck_core::rules::is_valid_email;
use formcheck_core::rules::is_valid_phone;
use formcheck_core::rules::is_valid_postal_code;
use formcheck_core::rules::password_strength;

// ============================================================================
// SECTION: Email and Phone
// ============================================================================

#[test]
fn email_accepts_common_addresses() {
    for value in ["user@example.com", "first.last+tag@sub.example.co.uk", " padded@example.org "] {
        assert!(is_valid_email(value), "{value} should pass");
    }
}

#[test]
fn email_rejects_malformed_addresses() {
    for value in ["", "plain", "@example.com", "user@", "user@example", "a b@example.com", "a@b@c.com", "user@example.c"] {
        assert!(!is_valid_email(value), "{value} should fail");
    }
}

#[test]
fn phone_accepts_formatted_numbers() {
    for value in ["+1 (555) 123-4567", "555.123.4567", "+33 1 23 45 67 89", "5551234567"] {
        assert!(is_valid_phone(value), "{value} should pass");
    }
}

#[test]
fn phone_rejects_bad_numbers() {
    for value in ["", "555-1234", "1234567890123456", "555-CALL-NOW", "++15551234567", "555 123 4567 ext"] {
        assert!(!is_valid_phone(value), "{value} should fail");
    }
}

// ============================================================================
// SECTION: Postal Codes
// ============================================================================

#[test]
fn postal_codes_follow_country_formats() {
    let cases = [
        (PostalCountry::Us, "12345", true),
        (PostalCountry::Us, "12345-6789", true),
        (PostalCountry::Us, "1234", false),
        (PostalCountry::Us, "12345-67", false),
        (PostalCountry::Ca, "K1A 0B1", true),
        (PostalCountry::Ca, "k1a0b1", true),
        (PostalCountry::Ca, "K1A-0B1", false),
        (PostalCountry::Fr, "75008", true),
        (PostalCountry::Fr, "7500", false),
        (PostalCountry::Uk, "SW1A 1AA", true),
        (PostalCountry::Uk, "M1 1AE", true),
        (PostalCountry::Uk, "EC1A1BB", true),
        (PostalCountry::Uk, "12345", false),
    ];
    for (country, value, expected) in cases {
        assert_eq!(
            is_valid_postal_code(value, country),
            expected,
            "{value} for {}",
            country.as_str()
        );
    }
}

#[test]
fn postal_country_parse_accepts_gb_alias() {
    assert_eq!(PostalCountry::parse("GB"), Some(PostalCountry::Uk));
    assert_eq!(PostalCountry::parse(" ca "), Some(PostalCountry::Ca));
    assert_eq!(PostalCountry::parse("de"), None);
}

// ============================================================================
// SECTION: Passwords
// ============================================================================

#[test]
fn password_reports_failures_in_rule_order() {
    let policy = PasswordPolicy::default();
    assert_eq!(
        check_password("abc", &policy),
        vec![
            PasswordRule::MinLength,
            PasswordRule::Uppercase,
            PasswordRule::Number,
            PasswordRule::Special
        ]
    );
    assert!(check_password("Str0ng!pass", &policy).is_empty());
}

#[test]
fn password_policy_flags_disable_rules() {
    let policy = PasswordPolicy {
        min_length: 4,
        require_uppercase: false,
        require_lowercase: true,
        require_number: false,
        require_special: false,
    };
    assert!(check_password("abcd", &policy).is_empty());
    assert_eq!(check_password("ABCD", &policy), vec![PasswordRule::Lowercase]);
}

#[test]
fn password_length_counts_characters() {
    let policy = PasswordPolicy {
        min_length: 4,
        ..PasswordPolicy::default()
    };
    // Three characters, seven bytes.
    assert!(check_password("Éé1", &policy).contains(&PasswordRule::MinLength));
}

#[test]
fn password_strength_scores_satisfied_rules() {
    let policy = PasswordPolicy::default();
    assert_eq!(password_strength("", &policy), PasswordStrength::Weak);
    assert_eq!(password_strength("abcdefgh", &policy), PasswordStrength::Weak);
    assert_eq!(password_strength("Abcdefgh", &policy), PasswordStrength::Fair);
    assert_eq!(password_strength("Abcdefg1", &policy), PasswordStrength::Fair);
    assert_eq!(password_strength("Abcdef1!", &policy), PasswordStrength::Strong);
}

#[test]
fn password_strength_uses_policy_length_bound() {
    let policy = PasswordPolicy {
        min_length: 12,
        ..PasswordPolicy::default()
    };
    let rules = [
        FieldRule::Required,
        FieldRule::Password {
            policy: policy.clone(),
        },
    ];
    assert_eq!(
        first_violation(&rules, "Abcdef1!x"),
        Some(Violation::with_params(
            MessageKey::Password(PasswordRule::MinLength),
            MessageParams::Number(12)
        ))
    );
    assert_eq!(password_strength("Abcdef1!x", &policy), PasswordStrength::Fair);
    assert_eq!(password_strength("Abcdef1!xyz0", &policy), PasswordStrength::Strong);
}

// ============================================================================
// SECTION: Files
// ============================================================================

fn constraints() -> FileConstraints {
    FileConstraints {
        max_size_mb: 2,
        allowed_types: vec!["image/*".to_string(), "application/pdf".to_string()],
    }
}

fn file(name: &str, size_bytes: u64, mime_type: &str) -> FileMeta {
    FileMeta {
        name: name.to_string(),
        size_bytes,
        mime_type: mime_type.to_string(),
    }
}

#[test]
fn file_checks_run_in_order() {
    let rules = constraints();
    assert_eq!(
        check_file(&file("", 10, "text/plain"), &rules),
        Some(Violation::new(MessageKey::File(FileRule::Required)))
    );
    assert_eq!(
        check_file(&file("big.png", 3 * 1024 * 1024, "text/plain"), &rules),
        Some(Violation::with_params(MessageKey::File(FileRule::TooLarge), MessageParams::Number(2)))
    );
    assert_eq!(
        check_file(&file("notes.txt", 10, "text/plain"), &rules),
        Some(Violation::with_params(
            MessageKey::File(FileRule::InvalidType),
            MessageParams::List(rules.allowed_types.clone())
        ))
    );
}

#[test]
fn file_size_limit_is_inclusive() {
    assert_eq!(check_file(&file("edge.pdf", 2 * 1024 * 1024, "application/pdf"), &constraints()), None);
}

#[test]
fn file_type_matching_supports_families_and_case() {
    let rules = constraints();
    assert_eq!(check_file(&file("a.png", 1, "image/png"), &rules), None);
    assert_eq!(check_file(&file("a.jpg", 1, "IMAGE/JPEG"), &rules), None);
    assert_eq!(check_file(&file("a.pdf", 1, "Application/PDF"), &rules), None);
    assert!(check_file(&file("a", 1, "image"), &rules).is_some());
}

#[test]
fn empty_allowed_types_accept_any_type() {
    let rules = FileConstraints {
        max_size_mb: 1,
        allowed_types: Vec::new(),
    };
    assert_eq!(check_file(&file("a.bin", 1, "application/octet-stream"), &rules), None);
}

#[test]
fn file_violation_renders_size_in_both_locales() {
    let resolver = MessageResolver::silent();
    let violation = check_file(&file("big.png", u64::MAX, "image/png"), &constraints())
        .expect("oversized file fails");
    assert_eq!(violation.render(&resolver, Locale::En), "File must be smaller than 2MB");
    assert_eq!(violation.render(&resolver, Locale::Fr), "Le fichier doit faire moins de 2 Mo");
}

// ============================================================================
// SECTION: Field Rules
// ============================================================================

#[test]
fn required_rejects_blank_values() {
    assert_eq!(FieldRule::Required.check(""), Some(Violation::new(MessageKey::Required)));
    assert_eq!(FieldRule::Required.check("   "), Some(Violation::new(MessageKey::Required)));
    assert_eq!(FieldRule::Required.check("x"), None);
}

#[test]
fn optional_rules_skip_empty_values() {
    let rules = [
        FieldRule::Email,
        FieldRule::Phone,
        FieldRule::CreditCard,
        FieldRule::MinLength {
            min: 3,
        },
        FieldRule::PostalCode {
            country: PostalCountry::Fr,
        },
        FieldRule::Password {
            policy: PasswordPolicy::default(),
        },
    ];
    assert_eq!(first_violation(&rules, ""), None);
}

#[test]
fn length_rules_carry_their_bound() {
    let min = FieldRule::MinLength {
        min: 5,
    };
    let max = FieldRule::MaxLength {
        max: 3,
    };
    assert_eq!(
        min.check("abc"),
        Some(Violation::with_params(MessageKey::MinLength, MessageParams::Number(5)))
    );
    assert_eq!(min.check("abcde"), None);
    assert_eq!(
        max.check("abcd"),
        Some(Violation::with_params(MessageKey::MaxLength, MessageParams::Number(3)))
    );
    assert_eq!(max.check("äöü"), None);
}

#[test]
fn password_rule_reports_first_failure_with_bound() {
    let rule = FieldRule::Password {
        policy: PasswordPolicy {
            min_length: 10,
            ..PasswordPolicy::default()
        },
    };
    assert_eq!(
        rule.check("Short1!"),
        Some(Violation::with_params(
            MessageKey::Password(PasswordRule::MinLength),
            MessageParams::Number(10)
        ))
    );
    assert_eq!(
        rule.check("longenough1!"),
        Some(Violation::new(MessageKey::Password(PasswordRule::Uppercase)))
    );
}

#[test]
fn credit_card_rule_uses_checksum() {
    assert_eq!(FieldRule::CreditCard.check("4532 0151 1283 0366"), None);
    assert_eq!(
        FieldRule::CreditCard.check("4532 0151 1283 0367"),
        Some(Violation::new(MessageKey::CreditCard))
    );
}

#[test]
fn first_violation_follows_rule_order() {
    let rules = [
        FieldRule::Required,
        FieldRule::MinLength {
            min: 20,
        },
        FieldRule::Email,
    ];
    assert_eq!(first_violation(&rules, "").map(|v| v.key), Some(MessageKey::Required));
    assert_eq!(first_violation(&rules, "bad").map(|v| v.key), Some(MessageKey::MinLength));
    assert_eq!(
        first_violation(&rules, "not-an-email-but-long").map(|v| v.key),
        Some(MessageKey::Email)
    );
    assert_eq!(first_violation(&rules, "someone.long@example.com"), None);
}

#[test]
fn field_rules_deserialize_from_tagged_tables() {
    let rule: FieldRule =
        serde_json::from_str(r#"{"rule":"min_length","min":4}"#).expect("parse rule");
    assert_eq!(
        rule,
        FieldRule::MinLength {
            min: 4
        }
    );
    let rule: FieldRule =
        serde_json::from_str(r#"{"rule":"postal_code","country":"uk"}"#).expect("parse rule");
    assert_eq!(
        rule,
        FieldRule::PostalCode {
            country: PostalCountry::Uk
        }
    );
}

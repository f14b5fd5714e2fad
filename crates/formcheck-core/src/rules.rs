// crates/formcheck-core/src/rules.rs
// ============================================================================
// Module: Validation Rules
// Description: Pre-built field validation rules and their message mapping.
// Purpose: Pure predicates that report failures as renderable violations.
// Dependencies: crate::{checksum, messages}, regex, serde
// ============================================================================

//! ## Overview
//! Rules are pure predicates over user input. A failing rule yields a
//! [`Violation`] carrying the [`MessageKey`] and [`MessageParams`] required to
//! render it through the [`MessageResolver`]. Rules never error: malformed
//! input is a normal failed check.
//!
//! ## Invariants
//! - Rules other than [`FieldRule::Required`] accept empty values.
//! - Length rules count characters, not bytes.
//! - Password rules are evaluated in [`PasswordRule::ALL`] order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;
use serde::Serialize;

use crate::checksum::is_valid_checksum;
use crate::messages::FileRule;
use crate::messages::Locale;
use crate::messages::MessageKey;
use crate::messages::MessageParams;
use crate::messages::MessageResolver;
use crate::messages::PasswordRule;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Email shape: one `@`, no whitespace, alphabetic TLD of two or more letters.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[A-Za-z]{2,}$";
/// Phone character set: optional leading `+`, digits, and common separators.
const PHONE_PATTERN: &str = r"^\+?[0-9 ().\-]+$";
/// US ZIP or ZIP+4.
const POSTAL_US_PATTERN: &str = r"^\d{5}(-\d{4})?$";
/// Canadian postal code, optional space.
const POSTAL_CA_PATTERN: &str = r"^[A-Za-z]\d[A-Za-z] ?\d[A-Za-z]\d$";
/// French code postal.
const POSTAL_FR_PATTERN: &str = r"^\d{5}$";
/// UK postcode (outward + inward code).
const POSTAL_UK_PATTERN: &str = r"^[A-Za-z]{1,2}\d[A-Za-z\d]? ?\d[A-Za-z]{2}$";
/// Minimum digit count for phone numbers.
pub const MIN_PHONE_DIGITS: usize = 10;
/// Maximum digit count for phone numbers (E.164).
pub const MAX_PHONE_DIGITS: usize = 15;
/// Default minimum password length.
pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 8;
/// Bytes per megabyte for file size limits.
const BYTES_PER_MB: u64 = 1024 * 1024;

// ============================================================================
// SECTION: Violations
// ============================================================================

/// A failed rule, ready to be rendered in any locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Message key describing the failure.
    pub key: MessageKey,
    /// Parameter embedded in the message.
    pub params: MessageParams,
}

impl Violation {
    /// Creates a violation without parameters.
    #[must_use]
    pub const fn new(key: MessageKey) -> Self {
        Self {
            key,
            params: MessageParams::None,
        }
    }

    /// Creates a violation with a parameter.
    #[must_use]
    pub const fn with_params(key: MessageKey, params: MessageParams) -> Self {
        Self {
            key,
            params,
        }
    }

    /// Renders the violation for `locale`.
    #[must_use]
    pub fn render(&self, resolver: &MessageResolver, locale: Locale) -> String {
        resolver.resolve(self.key, locale, &self.params)
    }
}

// ============================================================================
// SECTION: Pattern Helpers
// ============================================================================

/// Returns the compiled pattern, or `None` if it failed to compile.
fn compiled(cell: &'static OnceLock<Option<Regex>>, source: &str) -> Option<&'static Regex> {
    cell.get_or_init(|| Regex::new(source).ok()).as_ref()
}

/// Matches `value` against a lazily compiled pattern. Fails closed.
fn matches(cell: &'static OnceLock<Option<Regex>>, source: &str, value: &str) -> bool {
    compiled(cell, source).is_some_and(|pattern| pattern.is_match(value))
}

/// Converts a length bound to a message parameter.
fn length_param(value: usize) -> MessageParams {
    MessageParams::Number(u64::try_from(value).unwrap_or(u64::MAX))
}

// ============================================================================
// SECTION: Email, Phone, Card
// ============================================================================

/// Returns true when `value` looks like an email address.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    matches(&PATTERN, EMAIL_PATTERN, value.trim())
}

/// Returns true when `value` is a phone number of 10 to 15 digits.
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    let trimmed = value.trim();
    if !matches(&PATTERN, PHONE_PATTERN, trimmed) {
        return false;
    }
    let digits = trimmed.chars().filter(char::is_ascii_digit).count();
    (MIN_PHONE_DIGITS ..= MAX_PHONE_DIGITS).contains(&digits)
}

/// Returns true when `value` passes the card checksum.
#[must_use]
pub fn is_valid_card_number(value: &str) -> bool {
    is_valid_checksum(value)
}

// ============================================================================
// SECTION: Postal Codes
// ============================================================================

/// Countries with postal code rules.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostalCountry {
    /// United States ZIP codes.
    #[default]
    Us,
    /// Canadian postal codes.
    Ca,
    /// French postal codes.
    Fr,
    /// United Kingdom postcodes.
    Uk,
}

impl PostalCountry {
    /// Returns the lowercase country label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Us => "us",
            Self::Ca => "ca",
            Self::Fr => "fr",
            Self::Uk => "uk",
        }
    }

    /// Parses a country label (case-insensitive; `gb` is accepted for `uk`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "us" => Some(Self::Us),
            "ca" => Some(Self::Ca),
            "fr" => Some(Self::Fr),
            "uk" | "gb" => Some(Self::Uk),
            _ => None,
        }
    }
}

/// Returns true when `value` is a postal code for `country`.
#[must_use]
pub fn is_valid_postal_code(value: &str, country: PostalCountry) -> bool {
    static US: OnceLock<Option<Regex>> = OnceLock::new();
    static CA: OnceLock<Option<Regex>> = OnceLock::new();
    static FR: OnceLock<Option<Regex>> = OnceLock::new();
    static UK: OnceLock<Option<Regex>> = OnceLock::new();
    let value = value.trim();
    match country {
        PostalCountry::Us => matches(&US, POSTAL_US_PATTERN, value),
        PostalCountry::Ca => matches(&CA, POSTAL_CA_PATTERN, value),
        PostalCountry::Fr => matches(&FR, POSTAL_FR_PATTERN, value),
        PostalCountry::Uk => matches(&UK, POSTAL_UK_PATTERN, value),
    }
}

// ============================================================================
// SECTION: Passwords
// ============================================================================

/// Password requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    /// Minimum length in characters.
    pub min_length: usize,
    /// Require an uppercase letter.
    pub require_uppercase: bool,
    /// Require a lowercase letter.
    pub require_lowercase: bool,
    /// Require an ASCII digit.
    pub require_number: bool,
    /// Require a character that is neither alphanumeric nor whitespace.
    pub require_special: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_PASSWORD_MIN_LENGTH,
            require_uppercase: true,
            require_lowercase: true,
            require_number: true,
            require_special: true,
        }
    }
}

impl PasswordPolicy {
    /// Returns whether `rule` is enforced by this policy.
    const fn enforces(&self, rule: PasswordRule) -> bool {
        match rule {
            PasswordRule::MinLength => true,
            PasswordRule::Uppercase => self.require_uppercase,
            PasswordRule::Lowercase => self.require_lowercase,
            PasswordRule::Number => self.require_number,
            PasswordRule::Special => self.require_special,
        }
    }

    /// Returns whether `value` satisfies `rule`, regardless of enforcement.
    fn satisfies(&self, rule: PasswordRule, value: &str) -> bool {
        match rule {
            PasswordRule::MinLength => value.chars().count() >= self.min_length,
            PasswordRule::Uppercase => value.chars().any(char::is_uppercase),
            PasswordRule::Lowercase => value.chars().any(char::is_lowercase),
            PasswordRule::Number => value.chars().any(|ch| ch.is_ascii_digit()),
            PasswordRule::Special => {
                value.chars().any(|ch| !ch.is_alphanumeric() && !ch.is_whitespace())
            }
        }
    }

    /// Returns the violation for a failed rule.
    fn violation(&self, rule: PasswordRule) -> Violation {
        match rule {
            PasswordRule::MinLength => Violation::with_params(
                MessageKey::Password(rule),
                length_param(self.min_length),
            ),
            _ => Violation::new(MessageKey::Password(rule)),
        }
    }
}

/// Returns the enforced rules `value` fails, in evaluation order.
#[must_use]
pub fn check_password(value: &str, policy: &PasswordPolicy) -> Vec<PasswordRule> {
    PasswordRule::ALL
        .iter()
        .copied()
        .filter(|rule| policy.enforces(*rule) && !policy.satisfies(*rule, value))
        .collect()
}

/// Coarse password strength rating.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordStrength {
    /// Two or fewer rules satisfied.
    Weak,
    /// Three or four rules satisfied.
    Fair,
    /// Every rule satisfied.
    Strong,
}

/// Rates `value` by how many password rules it satisfies under `policy`.
///
/// Every rule is scored, enforced or not; only the length bound comes from
/// `policy`.
#[must_use]
pub fn password_strength(value: &str, policy: &PasswordPolicy) -> PasswordStrength {
    let satisfied =
        PasswordRule::ALL.iter().filter(|rule| policy.satisfies(**rule, value)).count();
    match satisfied {
        0 ..= 2 => PasswordStrength::Weak,
        3 | 4 => PasswordStrength::Fair,
        _ => PasswordStrength::Strong,
    }
}

// ============================================================================
// SECTION: Files
// ============================================================================

/// Metadata of a selected file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    /// File name; empty when nothing was selected.
    pub name: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// MIME type reported for the file.
    pub mime_type: String,
}

/// File upload constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConstraints {
    /// Maximum file size in megabytes.
    pub max_size_mb: u64,
    /// Allowed MIME types; `type/*` matches a whole family. Empty allows all.
    pub allowed_types: Vec<String>,
}

impl FileConstraints {
    /// Returns whether `mime_type` is allowed.
    fn allows(&self, mime_type: &str) -> bool {
        if self.allowed_types.is_empty() {
            return true;
        }
        let mime_type = mime_type.trim().to_ascii_lowercase();
        self.allowed_types.iter().any(|allowed| {
            let allowed = allowed.trim().to_ascii_lowercase();
            allowed.strip_suffix("/*").map_or(allowed == mime_type, |family| {
                mime_type.split_once('/').is_some_and(|(head, _)| head == family)
            })
        })
    }
}

/// Returns the first file rule `file` fails under `constraints`.
#[must_use]
pub fn check_file(file: &FileMeta, constraints: &FileConstraints) -> Option<Violation> {
    if file.name.trim().is_empty() {
        return Some(Violation::new(MessageKey::File(FileRule::Required)));
    }
    if file.size_bytes > constraints.max_size_mb.saturating_mul(BYTES_PER_MB) {
        return Some(Violation::with_params(
            MessageKey::File(FileRule::TooLarge),
            MessageParams::Number(constraints.max_size_mb),
        ));
    }
    if !constraints.allows(&file.mime_type) {
        return Some(Violation::with_params(
            MessageKey::File(FileRule::InvalidType),
            MessageParams::List(constraints.allowed_types.clone()),
        ));
    }
    None
}

// ============================================================================
// SECTION: Field Rules
// ============================================================================

/// Rule attached to a text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum FieldRule {
    /// Value must contain a non-whitespace character.
    Required,
    /// Value must have at least `min` characters.
    MinLength {
        /// Minimum character count.
        min: usize,
    },
    /// Value must have at most `max` characters.
    MaxLength {
        /// Maximum character count.
        max: usize,
    },
    /// Value must be an email address.
    Email,
    /// Value must be a phone number.
    Phone,
    /// Value must be a postal code for `country`.
    PostalCode {
        /// Country whose format applies.
        country: PostalCountry,
    },
    /// Value must satisfy `policy`.
    Password {
        /// Enforced password policy.
        policy: PasswordPolicy,
    },
    /// Value must be a checksum-valid card number.
    CreditCard,
}

impl FieldRule {
    /// Checks `value`, returning the violation when the rule fails.
    #[must_use]
    pub fn check(&self, value: &str) -> Option<Violation> {
        if let Self::Required = self {
            return value.trim().is_empty().then(|| Violation::new(MessageKey::Required));
        }
        if value.is_empty() {
            return None;
        }
        match self {
            Self::Required => None,
            Self::MinLength {
                min,
            } => (value.chars().count() < *min)
                .then(|| Violation::with_params(MessageKey::MinLength, length_param(*min))),
            Self::MaxLength {
                max,
            } => (value.chars().count() > *max)
                .then(|| Violation::with_params(MessageKey::MaxLength, length_param(*max))),
            Self::Email => (!is_valid_email(value)).then(|| Violation::new(MessageKey::Email)),
            Self::Phone => (!is_valid_phone(value)).then(|| Violation::new(MessageKey::Phone)),
            Self::PostalCode {
                country,
            } => (!is_valid_postal_code(value, *country))
                .then(|| Violation::new(MessageKey::PostalCode)),
            Self::Password {
                policy,
            } => check_password(value, policy).first().map(|rule| policy.violation(*rule)),
            Self::CreditCard => {
                (!is_valid_card_number(value)).then(|| Violation::new(MessageKey::CreditCard))
            }
        }
    }
}

/// Returns the first violation among `rules` for `value`.
#[must_use]
pub fn first_violation(rules: &[FieldRule], value: &str) -> Option<Violation> {
    rules.iter().find_map(|rule| rule.check(value))
}

// crates/formcheck-core/src/messages/mod.rs
// ============================================================================
// Module: Localized Validation Messages
// Description: Message keys, locales, parameters, and catalog entry variants.
// Purpose: Give every validation message a typed key and a typed parameter shape.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Validation messages are addressed by a [`MessageKey`] and rendered for a
//! [`Locale`]. Each catalog entry is a [`CatalogEntry`]: constant text, or a
//! producer that embeds a caller-supplied number or list of strings. Nested
//! keys (`password.*`, `file.*`) are modeled as one extra enum level and use a
//! dotted string form.
//!
//! ## Invariants
//! - Every [`MessageKey`] has an English entry.
//! - [`MessageKey::as_str`] and [`MessageKey::parse`] round-trip for every key.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod catalog;
pub mod resolver;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Locales
// ============================================================================

/// Supported message locales.
///
/// # Invariants
/// - [`Locale::En`] is the baseline locale every key must provide.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// English (default).
    #[default]
    En,
    /// French.
    Fr,
}

impl Locale {
    /// Returns the two-letter locale code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// Attempts to parse a locale value (case-insensitive, tolerant of region tags).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let normalized = value.to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Some(Self::En),
            "fr" => Some(Self::Fr),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered list of supported locales.
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::Fr];

// ============================================================================
// SECTION: Message Keys
// ============================================================================

/// Password sub-rules addressed under the `password.` prefix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordRule {
    /// Minimum password length.
    MinLength,
    /// At least one uppercase letter.
    Uppercase,
    /// At least one lowercase letter.
    Lowercase,
    /// At least one ASCII digit.
    Number,
    /// At least one special character.
    Special,
}

impl PasswordRule {
    /// All password rules in evaluation order.
    pub const ALL: &'static [Self] =
        &[Self::MinLength, Self::Uppercase, Self::Lowercase, Self::Number, Self::Special];

    /// Returns the sub-key label (without the `password.` prefix).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MinLength => "minLength",
            Self::Uppercase => "uppercase",
            Self::Lowercase => "lowercase",
            Self::Number => "number",
            Self::Special => "special",
        }
    }

    /// Parses a sub-key label.
    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|rule| rule.as_str() == value)
    }
}

/// File sub-rules addressed under the `file.` prefix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileRule {
    /// No file was selected.
    Required,
    /// File exceeds the size limit (megabytes).
    TooLarge,
    /// File type is not in the allowed list.
    InvalidType,
}

impl FileRule {
    /// All file rules in evaluation order.
    pub const ALL: &'static [Self] = &[Self::Required, Self::TooLarge, Self::InvalidType];

    /// Returns the sub-key label (without the `file.` prefix).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::TooLarge => "tooLarge",
            Self::InvalidType => "invalidType",
        }
    }

    /// Parses a sub-key label.
    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|rule| rule.as_str() == value)
    }
}

/// Validation message key.
///
/// # Invariants
/// - The key set is closed; unknown string keys never parse.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKey {
    /// Field must not be empty.
    Required,
    /// Field must be an email address.
    Email,
    /// Field must be a phone number.
    Phone,
    /// Field must be a postal code.
    PostalCode,
    /// Field must be a checksum-valid card number.
    CreditCard,
    /// Field is shorter than the minimum length.
    MinLength,
    /// Field is longer than the maximum length.
    MaxLength,
    /// Password sub-rule failure.
    Password(PasswordRule),
    /// File sub-rule failure.
    File(FileRule),
}

impl MessageKey {
    /// Every message key, top-level keys first, then nested groups.
    pub const ALL: &'static [Self] = &[
        Self::Required,
        Self::Email,
        Self::Phone,
        Self::PostalCode,
        Self::CreditCard,
        Self::MinLength,
        Self::MaxLength,
        Self::Password(PasswordRule::MinLength),
        Self::Password(PasswordRule::Uppercase),
        Self::Password(PasswordRule::Lowercase),
        Self::Password(PasswordRule::Number),
        Self::Password(PasswordRule::Special),
        Self::File(FileRule::Required),
        Self::File(FileRule::TooLarge),
        Self::File(FileRule::InvalidType),
    ];

    /// Returns the canonical string key (`"required"`, `"file.tooLarge"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::PostalCode => "postalCode",
            Self::CreditCard => "creditCard",
            Self::MinLength => "minLength",
            Self::MaxLength => "maxLength",
            Self::Password(PasswordRule::MinLength) => "password.minLength",
            Self::Password(PasswordRule::Uppercase) => "password.uppercase",
            Self::Password(PasswordRule::Lowercase) => "password.lowercase",
            Self::Password(PasswordRule::Number) => "password.number",
            Self::Password(PasswordRule::Special) => "password.special",
            Self::File(FileRule::Required) => "file.required",
            Self::File(FileRule::TooLarge) => "file.tooLarge",
            Self::File(FileRule::InvalidType) => "file.invalidType",
        }
    }

    /// Parses a flat or dotted string key. Matching is exact.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        if let Some((group, rule)) = value.split_once('.') {
            return match group {
                "password" => PasswordRule::parse(rule).map(Self::Password),
                "file" => FileRule::parse(rule).map(Self::File),
                _ => None,
            };
        }
        match value {
            "required" => Some(Self::Required),
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            "postalCode" => Some(Self::PostalCode),
            "creditCard" => Some(Self::CreditCard),
            "minLength" => Some(Self::MinLength),
            "maxLength" => Some(Self::MaxLength),
            _ => None,
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Parameters and Entries
// ============================================================================

/// Caller-supplied parameter for a message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum MessageParams {
    /// No parameter.
    #[default]
    None,
    /// A size or length bound.
    Number(u64),
    /// An enumeration of values (for example, allowed file types).
    List(Vec<String>),
}

impl MessageParams {
    /// Builds a list parameter from string slices.
    #[must_use]
    pub fn list<S: AsRef<str>>(items: &[S]) -> Self {
        Self::List(items.iter().map(|item| item.as_ref().to_string()).collect())
    }
}

impl From<u64> for MessageParams {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<Vec<String>> for MessageParams {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// A single catalog entry for one key in one locale.
#[derive(Debug, Copy, Clone)]
pub enum CatalogEntry {
    /// Constant text.
    Text(&'static str),
    /// Text embedding a number.
    Count(fn(u64) -> String),
    /// Text embedding a list of strings.
    List(fn(&[String]) -> String),
}

impl CatalogEntry {
    /// Renders the entry, returning `None` when `params` does not fit the entry shape.
    ///
    /// Constant text ignores any supplied parameter.
    #[must_use]
    pub fn render(self, params: &MessageParams) -> Option<String> {
        match (self, params) {
            (Self::Text(text), _) => Some(text.to_string()),
            (Self::Count(produce), MessageParams::Number(value)) => Some(produce(*value)),
            (Self::List(produce), MessageParams::List(items)) => Some(produce(items)),
            (Self::Count(_) | Self::List(_), _) => None,
        }
    }
}

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use catalog::catalog_for;
pub use catalog::entry;
pub use resolver::MessageMissEvent;
pub use resolver::MessageResolver;
pub use resolver::MissKind;
pub use resolver::MissReporter;
pub use resolver::NoopMissReporter;
pub use resolver::RecordingMissReporter;
pub use resolver::StderrMissReporter;
pub use resolver::resolve_message;

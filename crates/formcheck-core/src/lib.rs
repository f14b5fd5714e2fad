// crates/formcheck-core/src/lib.rs
// ============================================================================
// Module: formcheck Core Library
// Description: Public API surface for form validation helpers.
// Purpose: Expose checksum, rules, messages, interpolation, and form state.
// Dependencies: crate::{checksum, form, interpolate, messages, rules}
// ============================================================================

//! ## Overview
//! `formcheck-core` provides stateless form-validation helpers for web
//! front-ends: a Luhn checksum validator, pre-built validation rules, a
//! localized message catalog with a total resolver, navigation string
//! interpolation, and a form-state capability with two interchangeable
//! backends selected once at startup.
//!
//! Validation never fails: malformed input is a normal `false` or a
//! [`Violation`], and unknown message keys resolve to an empty string.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod checksum;
pub mod form;
pub mod interpolate;
pub mod messages;
pub mod rules;

#[cfg(test)]
mod tests;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use checksum::is_valid_checksum;
pub use form::FormBackend;
pub use form::FormError;
pub use form::FormErrors;
pub use form::FormState;
pub use form::FormValues;
pub use form::LiveFormState;
pub use form::SubmitFormState;
pub use form::build_form_state;
pub use form::render_errors;
pub use interpolate::interpolate;
pub use messages::CatalogEntry;
pub use messages::FileRule;
pub use messages::Locale;
pub use messages::MessageKey;
pub use messages::MessageParams;
pub use messages::MessageResolver;
pub use messages::MissReporter;
pub use messages::PasswordRule;
pub use messages::resolve_message;
pub use rules::FieldRule;
pub use rules::FileConstraints;
pub use rules::FileMeta;
pub use rules::PasswordPolicy;
pub use rules::PasswordStrength;
pub use rules::PostalCountry;
pub use rules::Violation;

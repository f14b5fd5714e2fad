// crates/formcheck-core/src/messages/catalog.rs
// ============================================================================
// Module: Validation Message Catalog
// Description: Static per-locale tables of validation messages.
// Purpose: Compile-time message data with lazily built lookup maps.
// Dependencies: crate::messages
// ============================================================================

//! ## Overview
//! The catalog is a static table per locale mapping every [`MessageKey`] to a
//! [`CatalogEntry`]. Lookup maps are built once on first use and are
//! read-only thereafter.
//!
//! ## Invariants
//! - The English table covers every key in [`MessageKey::ALL`].
//! - Each table holds at most one entry per key.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::messages::CatalogEntry;
use crate::messages::FileRule;
use crate::messages::Locale;
use crate::messages::MessageKey;
use crate::messages::PasswordRule;

// ============================================================================
// SECTION: English
// ============================================================================

/// English minimum length message.
fn en_min_length(n: u64) -> String {
    format!("Must be at least {n} characters")
}

/// English maximum length message.
fn en_max_length(n: u64) -> String {
    format!("Must be at most {n} characters")
}

/// English password length message.
fn en_password_min_length(n: u64) -> String {
    format!("Password must be at least {n} characters")
}

/// English file size message.
fn en_file_too_large(size: u64) -> String {
    format!("File must be smaller than {size}MB")
}

/// English file type message.
fn en_file_invalid_type(types: &[String]) -> String {
    format!("File type must be one of: {}", types.join(", "))
}

/// Static English catalog entries.
const CATALOG_EN: &[(MessageKey, CatalogEntry)] = &[
    (MessageKey::Required, CatalogEntry::Text("This field is required")),
    (MessageKey::Email, CatalogEntry::Text("Please enter a valid email address")),
    (MessageKey::Phone, CatalogEntry::Text("Please enter a valid phone number")),
    (MessageKey::PostalCode, CatalogEntry::Text("Please enter a valid postal code")),
    (MessageKey::CreditCard, CatalogEntry::Text("Please enter a valid card number")),
    (MessageKey::MinLength, CatalogEntry::Count(en_min_length)),
    (MessageKey::MaxLength, CatalogEntry::Count(en_max_length)),
    (MessageKey::Password(PasswordRule::MinLength), CatalogEntry::Count(en_password_min_length)),
    (
        MessageKey::Password(PasswordRule::Uppercase),
        CatalogEntry::Text("Password must contain at least one uppercase letter"),
    ),
    (
        MessageKey::Password(PasswordRule::Lowercase),
        CatalogEntry::Text("Password must contain at least one lowercase letter"),
    ),
    (
        MessageKey::Password(PasswordRule::Number),
        CatalogEntry::Text("Password must contain at least one number"),
    ),
    (
        MessageKey::Password(PasswordRule::Special),
        CatalogEntry::Text("Password must contain at least one special character"),
    ),
    (MessageKey::File(FileRule::Required), CatalogEntry::Text("Please select a file")),
    (MessageKey::File(FileRule::TooLarge), CatalogEntry::Count(en_file_too_large)),
    (MessageKey::File(FileRule::InvalidType), CatalogEntry::List(en_file_invalid_type)),
];

// ============================================================================
// SECTION: French
// ============================================================================

/// French minimum length message.
fn fr_min_length(n: u64) -> String {
    format!("Doit contenir au moins {n} caractères")
}

/// French maximum length message.
fn fr_max_length(n: u64) -> String {
    format!("Doit contenir au plus {n} caractères")
}

/// French password length message.
fn fr_password_min_length(n: u64) -> String {
    format!("Le mot de passe doit contenir au moins {n} caractères")
}

/// French file size message.
fn fr_file_too_large(size: u64) -> String {
    format!("Le fichier doit faire moins de {size} Mo")
}

/// French file type message.
fn fr_file_invalid_type(types: &[String]) -> String {
    format!("Le type de fichier doit être l'un des suivants : {}", types.join(", "))
}

/// Static French catalog entries.
const CATALOG_FR: &[(MessageKey, CatalogEntry)] = &[
    (MessageKey::Required, CatalogEntry::Text("Ce champ est obligatoire")),
    (MessageKey::Email, CatalogEntry::Text("Veuillez saisir une adresse e-mail valide")),
    (MessageKey::Phone, CatalogEntry::Text("Veuillez saisir un numéro de téléphone valide")),
    (MessageKey::PostalCode, CatalogEntry::Text("Veuillez saisir un code postal valide")),
    (MessageKey::CreditCard, CatalogEntry::Text("Veuillez saisir un numéro de carte valide")),
    (MessageKey::MinLength, CatalogEntry::Count(fr_min_length)),
    (MessageKey::MaxLength, CatalogEntry::Count(fr_max_length)),
    (MessageKey::Password(PasswordRule::MinLength), CatalogEntry::Count(fr_password_min_length)),
    (
        MessageKey::Password(PasswordRule::Uppercase),
        CatalogEntry::Text("Le mot de passe doit contenir au moins une lettre majuscule"),
    ),
    (
        MessageKey::Password(PasswordRule::Lowercase),
        CatalogEntry::Text("Le mot de passe doit contenir au moins une lettre minuscule"),
    ),
    (
        MessageKey::Password(PasswordRule::Number),
        CatalogEntry::Text("Le mot de passe doit contenir au moins un chiffre"),
    ),
    (
        MessageKey::Password(PasswordRule::Special),
        CatalogEntry::Text("Le mot de passe doit contenir au moins un caractère spécial"),
    ),
    (MessageKey::File(FileRule::Required), CatalogEntry::Text("Veuillez sélectionner un fichier")),
    (MessageKey::File(FileRule::TooLarge), CatalogEntry::Count(fr_file_too_large)),
    (MessageKey::File(FileRule::InvalidType), CatalogEntry::List(fr_file_invalid_type)),
];

// ============================================================================
// SECTION: Lookup
// ============================================================================

/// Returns the raw catalog entries for `locale` in declaration order.
#[must_use]
pub fn catalog_entries_for(locale: Locale) -> &'static [(MessageKey, CatalogEntry)] {
    match locale {
        Locale::En => CATALOG_EN,
        Locale::Fr => CATALOG_FR,
    }
}

/// Returns the message lookup map for `locale`.
#[must_use]
pub fn catalog_for(locale: Locale) -> &'static HashMap<MessageKey, CatalogEntry> {
    static CATALOG_EN_MAP: OnceLock<HashMap<MessageKey, CatalogEntry>> = OnceLock::new();
    static CATALOG_FR_MAP: OnceLock<HashMap<MessageKey, CatalogEntry>> = OnceLock::new();
    match locale {
        Locale::En => CATALOG_EN_MAP.get_or_init(|| CATALOG_EN.iter().copied().collect()),
        Locale::Fr => CATALOG_FR_MAP.get_or_init(|| CATALOG_FR.iter().copied().collect()),
    }
}

/// Returns the entry for `key` in `locale`, without falling back to another locale.
#[must_use]
pub fn entry(key: MessageKey, locale: Locale) -> Option<CatalogEntry> {
    catalog_for(locale).get(&key).copied()
}

// crates/formcheck-cli/src/i18n.rs
// ============================================================================
// Module: CLI Internationalization Helpers
// Description: Provides message catalog and translation utilities for the CLI.
// Purpose: Centralize user-facing CLI strings in English and French.
// Dependencies: formcheck-core locales, standard library collections.
// ============================================================================

//! ## Overview
//! The formcheck CLI stores its user-facing strings in a small translation
//! catalog, separate from the validation message catalog in `formcheck-core`.
//! All runtime output should be routed through the [`t!`](crate::t) macro.
//!
//! ## Invariants
//! - The catalog is initialized once and read-only thereafter.
//! - Missing keys fall back to English and then to the key itself.
//! - Placeholder substitutions preserve deterministic order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

pub use formcheck_core::Locale;
pub use formcheck_core::messages::SUPPORTED_LOCALES;

// ============================================================================
// SECTION: Types
// ============================================================================

/// A formatted message argument captured by the [`macro@crate::t`] macro.
///
/// # Invariants
/// - `key` matches a placeholder name without braces (for example, `path`).
/// - `value` is preformatted and should be safe for display.
#[derive(Clone)]
pub struct MessageArg {
    /// The placeholder name used in message templates (e.g., `"path"`).
    pub key: &'static str,
    /// The formatted string value to substitute for this placeholder.
    pub value: String,
}

impl MessageArg {
    /// Constructs a new [`MessageArg`] from a key and displayable value.
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

// ============================================================================
// SECTION: Locale Selection
// ============================================================================

/// Global locale selection for CLI output.
static CURRENT_LOCALE: OnceLock<Locale> = OnceLock::new();

/// Sets the CLI locale. Only the first call wins.
pub fn set_locale(locale: Locale) {
    let _ = CURRENT_LOCALE.set(locale);
}

/// Returns the current CLI locale (defaults to English).
#[must_use]
pub fn current_locale() -> Locale {
    CURRENT_LOCALE.get().copied().unwrap_or(Locale::En)
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Static English catalog entries.
const CATALOG_EN: &[(&str, &str)] = &[
    ("main.version", "formcheck {version}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "output"),
    ("output.write_failed", "Failed to write to {stream}: {error}"),
    ("config.load_failed", "Failed to load config: {error}"),
    ("config.validate.ok", "Config valid."),
    ("card.valid", "Valid card number."),
    ("card.invalid", "Invalid card number."),
    ("check.ok", "OK"),
    ("check.strength", "Password strength: {strength}"),
    ("strength.weak", "weak"),
    ("strength.fair", "fair"),
    ("strength.strong", "strong"),
    ("interpolate.var.invalid", "Invalid --var value {value}: expected key=value."),
    ("i18n.lang.invalid_env", "Invalid value for {env}: {value}. Expected 'en' or 'fr'."),
];

/// Static French catalog entries.
const CATALOG_FR: &[(&str, &str)] = &[
    ("main.version", "formcheck {version}"),
    ("output.stream.stdout", "sortie standard"),
    ("output.stream.stderr", "sortie d'erreur"),
    ("output.stream.unknown", "sortie"),
    ("output.write_failed", "Impossible d'écrire sur {stream} : {error}"),
    ("config.load_failed", "Impossible de charger la configuration : {error}"),
    ("config.validate.ok", "Configuration valide."),
    ("card.valid", "Numéro de carte valide."),
    ("card.invalid", "Numéro de carte invalide."),
    ("check.ok", "Valide"),
    ("check.strength", "Robustesse du mot de passe : {strength}"),
    ("strength.weak", "faible"),
    ("strength.fair", "moyenne"),
    ("strength.strong", "forte"),
    ("interpolate.var.invalid", "Valeur --var invalide {value} : format attendu clé=valeur."),
    ("i18n.lang.invalid_env", "Valeur invalide pour {env} : {value}. Attendu 'en' ou 'fr'."),
];

/// Returns the raw catalog entries for `locale`.
pub(crate) const fn catalog_entries_for(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => CATALOG_EN,
        Locale::Fr => CATALOG_FR,
    }
}

/// Returns the message catalog for the requested locale.
pub(crate) fn catalog_for(locale: Locale) -> &'static HashMap<&'static str, &'static str> {
    static CATALOG_EN_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    static CATALOG_FR_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    let cell = match locale {
        Locale::En => &CATALOG_EN_MAP,
        Locale::Fr => &CATALOG_FR_MAP,
    };
    cell.get_or_init(|| catalog_entries_for(locale).iter().copied().collect())
}

// ============================================================================
// SECTION: Translation
// ============================================================================

/// Translates `key` using the selected locale while substituting `args`.
#[must_use]
pub fn translate(key: &str, args: Vec<MessageArg>) -> String {
    translate_for(current_locale(), key, args)
}

/// Translates `key` for an explicit `locale`.
#[must_use]
pub fn translate_for(locale: Locale, key: &str, args: Vec<MessageArg>) -> String {
    let template = catalog_for(locale)
        .get(key)
        .copied()
        .or_else(|| catalog_for(Locale::En).get(key).copied())
        .unwrap_or(key);
    if args.is_empty() {
        return template.to_string();
    }

    let mut result = template.to_string();
    for arg in args {
        let placeholder = format!("{{{}}}", arg.key);
        result = result.replace(&placeholder, &arg.value);
    }
    result
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Formats a localized message from a key and named arguments.
///
/// # Arguments
///
/// - `$key` must match a catalog entry.
/// - Named arguments are substituted into `{placeholder}` positions.
///
/// # Returns
///
/// A localized [`String`] with placeholders substituted.
#[macro_export]
macro_rules! t {
    ($key:literal $(, $name:ident = $value:expr )* $(,)?) => {{
        let args = ::std::vec![
            $(
                $crate::i18n::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $crate::i18n::translate($key, args)
    }};
}

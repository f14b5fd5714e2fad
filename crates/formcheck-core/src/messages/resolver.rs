// crates/formcheck-core/src/messages/resolver.rs
// ============================================================================
// Module: Message Resolver
// Description: Resolves message keys to localized text with miss reporting.
// Purpose: Total lookup that never fails and optionally surfaces misses.
// Dependencies: crate::messages, serde, serde_json
// ============================================================================

//! ## Overview
//! [`MessageResolver`] turns a key, a locale, and optional parameters into a
//! string. Unknown keys, unknown locales, missing entries, and parameters
//! that do not fit the entry shape all resolve to an empty string. There is
//! no cross-locale fallback at this layer.
//!
//! Each miss is reported to a [`MissReporter`]. The default reporter is a
//! no-op; [`StderrMissReporter`] emits one JSON line per miss so typo'd keys
//! surface during integration.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

use serde::Serialize;

use crate::messages::Locale;
use crate::messages::MessageKey;
use crate::messages::MessageParams;
use crate::messages::catalog::entry;

// ============================================================================
// SECTION: Miss Events
// ============================================================================

/// Classification of a resolver miss.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MissKind {
    /// Key is not in the catalog.
    UnknownKey,
    /// Locale code is not supported.
    UnknownLocale,
    /// Locale has no (or an empty) entry for the key.
    MissingEntry,
    /// Parameter shape does not fit the entry.
    ParamMismatch,
}

/// Structured resolver miss payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageMissEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Miss classification.
    pub kind: MissKind,
    /// Requested key as supplied by the caller.
    pub key: String,
    /// Requested locale as supplied by the caller.
    pub locale: String,
}

impl MessageMissEvent {
    /// Builds a miss event.
    #[must_use]
    pub fn new(kind: MissKind, key: &str, locale: &str) -> Self {
        Self {
            event: "message_miss",
            kind,
            key: key.to_string(),
            locale: locale.to_string(),
        }
    }
}

/// Sink for resolver misses.
pub trait MissReporter: Send + Sync {
    /// Record a resolver miss.
    fn record(&self, event: &MessageMissEvent);
}

/// Reporter that discards misses.
pub struct NoopMissReporter;

impl MissReporter for NoopMissReporter {
    fn record(&self, _event: &MessageMissEvent) {}
}

/// Reporter that logs JSON lines to stderr.
pub struct StderrMissReporter;

impl MissReporter for StderrMissReporter {
    fn record(&self, event: &MessageMissEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let mut stderr = std::io::stderr();
            let _ = writeln!(&mut stderr, "{payload}");
        }
    }
}

/// Reporter that keeps misses in memory.
#[derive(Default)]
pub struct RecordingMissReporter {
    /// Recorded events in arrival order.
    events: Mutex<Vec<MessageMissEvent>>,
}

impl RecordingMissReporter {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the recorded events.
    #[must_use]
    pub fn events(&self) -> Vec<MessageMissEvent> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl MissReporter for RecordingMissReporter {
    fn record(&self, event: &MessageMissEvent) {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).push(event.clone());
    }
}

// ============================================================================
// SECTION: Resolver
// ============================================================================

/// Resolves validation messages against the static catalog.
#[derive(Clone)]
pub struct MessageResolver {
    /// Destination for miss events.
    reporter: Arc<dyn MissReporter>,
}

impl Default for MessageResolver {
    fn default() -> Self {
        Self::silent()
    }
}

impl MessageResolver {
    /// Creates a resolver reporting misses to `reporter`.
    #[must_use]
    pub fn new(reporter: Arc<dyn MissReporter>) -> Self {
        Self {
            reporter,
        }
    }

    /// Creates a resolver that discards misses.
    #[must_use]
    pub fn silent() -> Self {
        Self::new(Arc::new(NoopMissReporter))
    }

    /// Resolves a typed key for a supported locale.
    #[must_use]
    pub fn resolve(&self, key: MessageKey, locale: Locale, params: &MessageParams) -> String {
        self.render(key, locale, key.as_str(), locale.as_str(), params)
    }

    /// Resolves a string key (flat or dotted) for a locale code.
    ///
    /// Returns an empty string for unknown keys, unknown locales, missing
    /// entries, and parameters that do not fit the entry.
    #[must_use]
    pub fn resolve_str(&self, key: &str, locale: &str, params: &MessageParams) -> String {
        let Some(parsed_key) = MessageKey::parse(key) else {
            self.miss(MissKind::UnknownKey, key, locale);
            return String::new();
        };
        let Some(parsed_locale) = parse_locale_code(locale) else {
            self.miss(MissKind::UnknownLocale, key, locale);
            return String::new();
        };
        self.render(parsed_key, parsed_locale, key, locale, params)
    }

    /// Renders a parsed key, reporting misses against the caller's labels.
    fn render(
        &self,
        key: MessageKey,
        locale: Locale,
        key_label: &str,
        locale_label: &str,
        params: &MessageParams,
    ) -> String {
        let Some(found) = entry(key, locale) else {
            self.miss(MissKind::MissingEntry, key_label, locale_label);
            return String::new();
        };
        match found.render(params) {
            Some(text) if text.is_empty() => {
                self.miss(MissKind::MissingEntry, key_label, locale_label);
                text
            }
            Some(text) => text,
            None => {
                self.miss(MissKind::ParamMismatch, key_label, locale_label);
                String::new()
            }
        }
    }

    /// Reports a miss to the configured reporter.
    fn miss(&self, kind: MissKind, key: &str, locale: &str) {
        self.reporter.record(&MessageMissEvent::new(kind, key, locale));
    }
}

/// Parses an exact two-letter locale code.
///
/// Region tags are not accepted here; the catalog is keyed by bare codes.
fn parse_locale_code(value: &str) -> Option<Locale> {
    match value {
        "en" => Some(Locale::En),
        "fr" => Some(Locale::Fr),
        _ => None,
    }
}

/// Resolves `key` for `locale` with a silent resolver.
///
/// # Examples
///
/// ```
/// use formcheck_core::messages::MessageParams;
/// use formcheck_core::messages::resolve_message;
///
/// assert_eq!(resolve_message("required", "fr", &MessageParams::None), "Ce champ est obligatoire");
/// assert_eq!(
///     resolve_message("minLength", "en", &MessageParams::Number(5)),
///     "Must be at least 5 characters"
/// );
/// assert_eq!(resolve_message("unknownKey", "en", &MessageParams::None), "");
/// ```
#[must_use]
pub fn resolve_message(key: &str, locale: &str, params: &MessageParams) -> String {
    MessageResolver::silent().resolve_str(key, locale, params)
}

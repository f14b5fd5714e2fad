// crates/formcheck-core/src/form.rs
// ============================================================================
// Module: Form State
// Description: Form-state capability with on-change and on-submit backends.
// Purpose: Select one form-state implementation at startup, not per call.
// Dependencies: crate::{messages, rules}, serde, thiserror
// ============================================================================

//! ## Overview
//! [`FormState`] tracks registered fields, their values, touched flags, and
//! rule violations. Two implementations exist:
//!
//! - [`LiveFormState`] validates a field every time its value changes.
//! - [`SubmitFormState`] validates only on [`FormState::submit`]; a field's
//!   error clears when its value next changes.
//!
//! [`build_form_state`] is the single selection point, driven by
//! [`FormBackend`]. Both backends return identical `submit` results for the
//! same registrations and values.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::messages::Locale;
use crate::messages::MessageResolver;
use crate::rules::FieldRule;
use crate::rules::Violation;
use crate::rules::first_violation;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Submitted field values keyed by field name.
pub type FormValues = BTreeMap<String, String>;

/// Field violations keyed by field name.
pub type FormErrors = BTreeMap<String, Violation>;

/// Form-state backend selection.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormBackend {
    /// Validate on every change ([`LiveFormState`]).
    #[default]
    OnChange,
    /// Validate on submit only ([`SubmitFormState`]).
    OnSubmit,
}

/// Errors from form-state operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The field was never registered.
    #[error("unknown form field: {0}")]
    UnknownField(String),
}

/// Form-state capability shared by both backends.
pub trait FormState: Send {
    /// Returns the backend kind.
    fn backend(&self) -> FormBackend;

    /// Registers `field` with `rules`. Re-registering replaces the rules,
    /// keeps the current value, and clears the field's error.
    fn register(&mut self, field: &str, rules: Vec<FieldRule>);

    /// Sets the value of a registered field and marks it touched.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] when `field` is not registered.
    fn set_value(&mut self, field: &str, value: &str) -> Result<(), FormError>;

    /// Returns the current value of `field`.
    fn value(&self, field: &str) -> Option<&str>;

    /// Returns whether `field` has been changed or submitted.
    fn touched(&self, field: &str) -> bool;

    /// Returns the current violation for `field`.
    fn error(&self, field: &str) -> Option<&Violation>;

    /// Returns all current violations.
    fn errors(&self) -> &FormErrors;

    /// Validates every field and returns the values, or the violations.
    ///
    /// # Errors
    ///
    /// Returns the per-field violations when any rule fails.
    fn submit(&mut self) -> Result<FormValues, FormErrors>;

    /// Clears values, touched flags, and errors. Registrations are kept.
    fn reset(&mut self);
}

/// Builds the form-state implementation for `backend`.
#[must_use]
pub fn build_form_state(backend: FormBackend) -> Box<dyn FormState> {
    match backend {
        FormBackend::OnChange => Box::new(LiveFormState::new()),
        FormBackend::OnSubmit => Box::new(SubmitFormState::new()),
    }
}

/// Renders violations for `locale`, keyed by field name.
#[must_use]
pub fn render_errors(
    errors: &FormErrors,
    locale: Locale,
    resolver: &MessageResolver,
) -> BTreeMap<String, String> {
    errors
        .iter()
        .map(|(field, violation)| (field.clone(), violation.render(resolver, locale)))
        .collect()
}

// ============================================================================
// SECTION: Shared Field Storage
// ============================================================================

/// State held for one registered field.
#[derive(Debug, Clone, Default)]
struct FieldSlot {
    /// Rules checked in order.
    rules: Vec<FieldRule>,
    /// Current value.
    value: String,
    /// Whether the field was changed or submitted.
    touched: bool,
}

/// Registered fields plus their current violations.
#[derive(Debug, Clone, Default)]
struct FieldStore {
    /// Fields keyed by name.
    fields: BTreeMap<String, FieldSlot>,
    /// Current violations keyed by field name.
    errors: FormErrors,
}

impl FieldStore {
    /// Registers or re-registers a field.
    fn register(&mut self, field: &str, rules: Vec<FieldRule>) {
        self.fields.entry(field.to_string()).or_default().rules = rules;
        self.errors.remove(field);
    }

    /// Stores a value and marks the field touched.
    fn store(&mut self, field: &str, value: &str) -> Result<(), FormError> {
        let slot =
            self.fields.get_mut(field).ok_or_else(|| FormError::UnknownField(field.to_string()))?;
        value.clone_into(&mut slot.value);
        slot.touched = true;
        Ok(())
    }

    /// Re-validates one field against its rules.
    fn validate_field(&mut self, field: &str) {
        let violation =
            self.fields.get(field).and_then(|slot| first_violation(&slot.rules, &slot.value));
        match violation {
            Some(violation) => {
                self.errors.insert(field.to_string(), violation);
            }
            None => {
                self.errors.remove(field);
            }
        }
    }

    /// Validates every field, marks all touched, and returns the outcome.
    fn submit(&mut self) -> Result<FormValues, FormErrors> {
        let mut errors = FormErrors::new();
        for (name, slot) in &mut self.fields {
            slot.touched = true;
            if let Some(violation) = first_violation(&slot.rules, &slot.value) {
                errors.insert(name.clone(), violation);
            }
        }
        self.errors = errors;
        if self.errors.is_empty() {
            Ok(self
                .fields
                .iter()
                .map(|(name, slot)| (name.clone(), slot.value.clone()))
                .collect())
        } else {
            Err(self.errors.clone())
        }
    }

    /// Clears values, touched flags, and errors.
    fn reset(&mut self) {
        for slot in self.fields.values_mut() {
            slot.value.clear();
            slot.touched = false;
        }
        self.errors.clear();
    }

    /// Returns the value of a field.
    fn value(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(|slot| slot.value.as_str())
    }

    /// Returns whether a field is touched.
    fn touched(&self, field: &str) -> bool {
        self.fields.get(field).is_some_and(|slot| slot.touched)
    }
}

// ============================================================================
// SECTION: On-Change Backend
// ============================================================================

/// Form state that validates each field as its value changes.
#[derive(Debug, Clone, Default)]
pub struct LiveFormState {
    /// Field storage.
    store: FieldStore,
}

impl LiveFormState {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormState for LiveFormState {
    fn backend(&self) -> FormBackend {
        FormBackend::OnChange
    }

    fn register(&mut self, field: &str, rules: Vec<FieldRule>) {
        self.store.register(field, rules);
    }

    fn set_value(&mut self, field: &str, value: &str) -> Result<(), FormError> {
        self.store.store(field, value)?;
        self.store.validate_field(field);
        Ok(())
    }

    fn value(&self, field: &str) -> Option<&str> {
        self.store.value(field)
    }

    fn touched(&self, field: &str) -> bool {
        self.store.touched(field)
    }

    fn error(&self, field: &str) -> Option<&Violation> {
        self.store.errors.get(field)
    }

    fn errors(&self) -> &FormErrors {
        &self.store.errors
    }

    fn submit(&mut self) -> Result<FormValues, FormErrors> {
        self.store.submit()
    }

    fn reset(&mut self) {
        self.store.reset();
    }
}

// ============================================================================
// SECTION: On-Submit Backend
// ============================================================================

/// Form state that validates only on submit.
#[derive(Debug, Clone, Default)]
pub struct SubmitFormState {
    /// Field storage.
    store: FieldStore,
}

impl SubmitFormState {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormState for SubmitFormState {
    fn backend(&self) -> FormBackend {
        FormBackend::OnSubmit
    }

    fn register(&mut self, field: &str, rules: Vec<FieldRule>) {
        self.store.register(field, rules);
    }

    fn set_value(&mut self, field: &str, value: &str) -> Result<(), FormError> {
        self.store.store(field, value)?;
        self.store.errors.remove(field);
        Ok(())
    }

    fn value(&self, field: &str) -> Option<&str> {
        self.store.value(field)
    }

    fn touched(&self, field: &str) -> bool {
        self.store.touched(field)
    }

    fn error(&self, field: &str) -> Option<&Violation> {
        self.store.errors.get(field)
    }

    fn errors(&self) -> &FormErrors {
        &self.store.errors
    }

    fn submit(&mut self) -> Result<FormValues, FormErrors> {
        self.store.submit()
    }

    fn reset(&mut self) {
        self.store.reset();
    }
}

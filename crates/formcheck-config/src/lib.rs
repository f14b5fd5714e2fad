// crates/formcheck-config/src/lib.rs
// ============================================================================
// Module: formcheck Config Library
// Description: Canonical config model, validation, and example generation.
// Purpose: Single source of truth for formcheck.toml semantics.
// Dependencies: formcheck-core, serde, toml
// ============================================================================

//! ## Overview
//! `formcheck-config` defines the configuration model for formcheck: default
//! message locale, miss diagnostics, form backend selection, password policy,
//! file upload limits, and postal country. Loading is strict and fails closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod examples;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use examples::config_toml_example;

// crates/formcheck-cli/src/lib.rs
// ============================================================================
// Module: formcheck CLI Library
// Description: Shared helpers for the formcheck command-line interface.
// Purpose: Provide reusable components (i18n) for the CLI binary and tests.
// Dependencies: formcheck-core
// ============================================================================

//! ## Overview
//! This library module houses shared CLI utilities, including the localized
//! message catalog. The binary entry point (`src/main.rs`) imports these helpers
//! to keep all user-facing output consistent.

// ============================================================================
// SECTION: Modules
// ============================================================================

/// Internationalization helpers and message catalog.
pub mod i18n;

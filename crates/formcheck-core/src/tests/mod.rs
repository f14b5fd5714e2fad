// crates/formcheck-core/src/tests/mod.rs
// ============================================================================
// Module: formcheck Core Unit Tests
// Description: Shared test-only lint relaxations and unit test modules.
// Purpose: Allow panic-based assertions in crate-internal tests.
// Dependencies: formcheck-core
// ============================================================================

//! ## Overview
//! Crate-internal unit tests for catalog parity and resolver miss reporting.

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
    reason = "Test-only output and panic-based assertions are permitted."
)]

mod catalog;

// crates/formcheck-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payload.
// Purpose: Deterministic example for docs and the CLI.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical example for formcheck configuration. Every value shown is valid
//! and the example loads without error.

/// Returns a canonical example `formcheck.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"[locale]
default = "en"

[diagnostics]
missing_messages = "silent"

[form]
backend = "on_change"

[password]
min_length = 8
require_uppercase = true
require_lowercase = true
require_number = true
require_special = true

[file]
max_size_mb = 10
allowed_types = ["image/*", "application/pdf"]

[postal]
country = "us"
"#,
    )
}

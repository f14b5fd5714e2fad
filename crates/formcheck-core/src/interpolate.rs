// crates/formcheck-core/src/interpolate.rs
// ============================================================================
// Module: Navigation Interpolation
// Description: `{name}` token substitution for navigation strings.
// Purpose: Fill caller-supplied templates from a key/value list.
// Dependencies: std
// ============================================================================

//! ## Overview
//! [`interpolate`] replaces `{name}` tokens in a single left-to-right pass.
//!
//! ## Invariants
//! - Substituted values are never re-scanned for tokens.
//! - Tokens without a matching variable are left verbatim, braces included.
//! - Unmatched braces are copied through unchanged.

/// Substitutes `{name}` tokens in `template` from `vars`.
///
/// When a name appears more than once in `vars`, the first pair wins.
///
/// # Examples
///
/// ```
/// use formcheck_core::interpolate::interpolate;
///
/// assert_eq!(interpolate("/users/{id}/orders", &[("id", "42")]), "/users/42/orders");
/// assert_eq!(interpolate("/users/{id}", &[]), "/users/{id}");
/// ```
#[must_use]
pub fn interpolate(template: &str, vars: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        output.push_str(&rest[.. open]);
        let after = &rest[open + 1 ..];
        let Some(close) = after.find(['{', '}']) else {
            output.push_str(&rest[open ..]);
            return output;
        };
        if after[close ..].starts_with('{') {
            // The brace at `open` never closes before the next one opens.
            output.push('{');
            output.push_str(&after[.. close]);
            rest = &after[close ..];
            continue;
        }
        let name = &after[.. close];
        match vars.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => output.push_str(value),
            None => {
                output.push('{');
                output.push_str(name);
                output.push('}');
            }
        }
        rest = &after[close + 1 ..];
    }
    output.push_str(rest);
    output
}

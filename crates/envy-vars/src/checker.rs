//! Template/variable consistency checking
//!
//! A missing variable means a template placeholder would survive
//! substitution, so the rendered file is wrong; an unused variable is
//! likely dead configuration. Neither is an error at this level: both
//! classes flow through caller-supplied callbacks and every discrepancy is
//! reported, not just the first.

use envy_core::VariableMap;
use std::collections::BTreeSet;

/// Compare the variables templates require against the variables a
/// resolution supplies
///
/// Invokes `on_error` for every template key with no variable, then
/// `on_warning` for every variable no template references. Both passes run
/// to completion.
pub fn check_consistency(
    template_variable_keys: &BTreeSet<String>,
    variables: &VariableMap,
    mut on_error: impl FnMut(&str),
    mut on_warning: impl FnMut(&str),
) {
    for key in template_variable_keys {
        if !variables.contains_key(key) {
            on_error(key);
        }
    }

    for key in variables.keys() {
        if !template_variable_keys.contains(key) {
            on_warning(key);
        }
    }
}

//! Placeholder substitution

use envy_core::VariableMap;

/// Replace every `@name@` occurrence in `content` with the variable's value
///
/// Variables the content never references simply do not match; placeholders
/// with no matching variable pass through verbatim. Surfacing those is the
/// consistency checker's job, so no validation happens here.
pub fn fill_variables(content: &str, variables: &VariableMap) -> String {
    variables
        .iter()
        .fold(content.to_string(), |current, (name, value)| {
            current.replace(&format!("@{}@", name), value)
        })
}

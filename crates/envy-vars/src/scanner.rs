//! Placeholder scanning across registered templates

use anyhow::Result;
use envy_templates::TemplateRegistry;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Pre-compiled pattern for one `@name@` placeholder; names contain no
/// whitespace, and excluding `@` keeps adjacent placeholders on a line from
/// being swallowed into a single match
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@[^\s@]*@").expect("placeholder regex is valid"));

/// Extract the deduplicated set of placeholder names in `content`
pub fn scan_placeholders(content: &str) -> BTreeSet<String> {
    PLACEHOLDER_RE
        .find_iter(content)
        .map(|m| {
            let token = m.as_str();
            token[1..token.len() - 1].to_string()
        })
        .collect()
}

/// Collect every placeholder name referenced by any registered template,
/// deduplicated and in sorted order
pub fn list_template_variable_keys(registry: &TemplateRegistry) -> Result<BTreeSet<String>> {
    let mut keys = BTreeSet::new();

    for registration in registry.load()? {
        let content = registry.read_template(&registration.from)?;
        keys.extend(scan_placeholders(&content));
    }

    Ok(keys)
}

//! Managed `.gitignore` block listing generated files
//!
//! Generated files must never land in version control, so every registered
//! `to` path is kept ignored through a marker-delimited block. The block is
//! rewritten wholesale whenever registrations change; content outside the
//! markers is preserved byte for byte.

use crate::error::Result;
use crate::registry::TemplateRegistration;
use camino::Utf8Path;
use std::fs;

/// First line of the managed block
pub const MARKER_BEGIN: &str = "# Envy files start";

/// Last line of the managed block
pub const MARKER_END: &str = "# Envy files end";

/// Render the managed block for the given registrations
fn render_block(registrations: &[TemplateRegistration]) -> String {
    let mut lines = Vec::with_capacity(registrations.len() + 2);
    lines.push(MARKER_BEGIN.to_string());
    lines.extend(registrations.iter().map(|r| format!("/{}", r.to)));
    lines.push(MARKER_END.to_string());
    lines.join("\n")
}

/// Replace the managed block in `content`, appending one when absent
pub fn update_block(content: &str, registrations: &[TemplateRegistration]) -> String {
    let block = render_block(registrations);

    // Find the section between markers
    if let Some(begin_pos) = content.find(MARKER_BEGIN) {
        if let Some(end_pos) = content[begin_pos..].find(MARKER_END) {
            let end_pos = begin_pos + end_pos + MARKER_END.len();
            return format!("{}{}{}", &content[..begin_pos], block, &content[end_pos..]);
        }
    }

    if content.trim().is_empty() {
        format!("{}\n", block)
    } else {
        format!("{}\n\n{}\n", content.trim_end(), block)
    }
}

/// Rewrite the managed block in the `.gitignore` at `path`, creating the
/// file if it does not exist yet
pub fn write_block(path: &Utf8Path, registrations: &[TemplateRegistration]) -> Result<()> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };

    fs::write(path, update_block(&content, registrations))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registrations() -> Vec<TemplateRegistration> {
        vec![
            TemplateRegistration::new("app.yml", "config/app.yml"),
            TemplateRegistration::new("db.env", "db.env"),
        ]
    }

    #[test]
    fn test_update_block_replaces_existing_section() {
        let content = "\
target/
*.log

# Envy files start
/old/path.yml
# Envy files end

node_modules/
";
        let updated = update_block(content, &registrations());
        assert_eq!(
            updated,
            "\
target/
*.log

# Envy files start
/config/app.yml
/db.env
# Envy files end

node_modules/
"
        );
    }

    #[test]
    fn test_update_block_appends_when_absent() {
        let content = "target/\n*.log\n";
        let updated = update_block(content, &registrations());
        assert_eq!(
            updated,
            "target/\n*.log\n\n# Envy files start\n/config/app.yml\n/db.env\n# Envy files end\n"
        );
    }

    #[test]
    fn test_update_block_on_empty_content() {
        let updated = update_block("", &registrations());
        assert_eq!(
            updated,
            "# Envy files start\n/config/app.yml\n/db.env\n# Envy files end\n"
        );
    }

    #[test]
    fn test_update_block_with_no_registrations() {
        let updated = update_block("", &[]);
        assert_eq!(updated, "# Envy files start\n# Envy files end\n");
    }

    #[test]
    fn test_write_block_creates_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = camino::Utf8PathBuf::from_path_buf(temp.path().join(".gitignore"))
            .expect("path should be valid UTF-8");

        write_block(&path, &registrations()).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("/config/app.yml"));
        assert!(content.starts_with(MARKER_BEGIN));
    }
}

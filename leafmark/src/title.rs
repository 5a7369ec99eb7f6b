//! Page title lookup.

use crate::error::ConvertError;

/// Return the text of the first `# ` heading line, trimmed.
///
/// Only level one headings qualify; `## Title` is skipped.
pub fn extract_title(markdown: &str) -> Result<String, ConvertError> {
    markdown
        .lines()
        .find(|line| line.starts_with("# "))
        .map(|line| line.trim_start_matches('#').trim().to_string())
        .ok_or(ConvertError::NoTitle)
}

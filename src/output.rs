//! Final document assembly for summary results.
//!
//! Concatenates the two streams of a [`SummaryDocument`] into the final
//! Markdown document and optionally writes it to disk. Content is preserved
//! exactly as decoded.

use crate::error::SummaryError;
use crate::types::SummaryDocument;
use std::fs;
use std::path::Path;

/// Renders the final document.
///
/// Layout: `# <project-name>`, the `## Directory Structure` outline, then
/// the `## File Contents` blocks.
pub fn render(project_name: &str, doc: &SummaryDocument) -> String {
    let mut out = String::with_capacity(doc.structure.len() + doc.contents.len() + 64);
    out.push_str(&format!("# {project_name}\n\n## Directory Structure\n\n"));
    out.push_str(&doc.structure);
    out.push_str("\n## File Contents\n\n");
    out.push_str(&doc.contents);
    out
}

/// Renders the document and writes it to a file.
pub fn write_summary(
    project_name: &str,
    doc: &SummaryDocument,
    path: impl AsRef<Path>,
) -> Result<(), SummaryError> {
    let content = render(project_name, doc);
    fs::write(&path, content).map_err(|e| SummaryError::io(path.as_ref(), e))?;
    Ok(())
}

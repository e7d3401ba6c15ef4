use serde::{Deserialize, Serialize};

/// The two output streams accumulated during one traversal pass.
///
/// `structure` holds the indented outline, `contents` holds the per-file
/// labeled blocks. They are built independently and only concatenated by
/// [`crate::output::render`].
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SummaryDocument {
    /// Indented bullet outline of the tree, one entry per line.
    pub structure: String,
    /// `### <relative-path>` blocks with fenced file contents.
    ///
    /// Binary files and files whose decoded content is empty or only
    /// whitespace never get a block here, even though they appear in
    /// `structure`.
    pub contents: String,
}

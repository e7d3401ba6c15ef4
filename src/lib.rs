//! # Dirsum
//!
//! `dirsum` walks a directory tree and produces a single Markdown document
//! describing its structure and the textual content of its files, excluding
//! paths matched by a flat, union-of-patterns ignore model.
//!
//! Patterns come from the root's `.gitignore`, the tool's own `.sumignore`,
//! caller-supplied globs, and a few built-in exclusions. Files are classified
//! binary vs. text with a null-byte sniff on the first kilobyte; text is
//! decoded as UTF-8 with a Shift_JIS fallback. Undecodable or unreadable
//! files stay in the outline but contribute no content block.
//!
//! This is deliberately not a gitignore implementation: no negation
//! patterns, no `**` semantics, no per-directory scoping.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use dirsum::{SummaryBuilder, output, project_name, summarize};
//!
//! let options = SummaryBuilder::new(".")
//!     .respect_gitignore(true)
//!     .ignore_patterns(vec!["*.log".into()])
//!     .file_types(vec![".rs".into()])
//!     .build();
//!
//! let name = project_name(&options.root);
//! let doc = summarize(options).expect("failed to summarize directory");
//! println!("{}", output::render(&name, &doc));
//! ```

mod classify;
mod error;
mod options;
pub mod output;
mod patterns;
mod types;
mod walker;

pub use classify::{Classification, classify_bytes, classify_file};
pub use error::SummaryError;
pub use options::{SummaryBuilder, SummaryOptions};
pub use patterns::{PatternMatcher, load_patterns};
pub use types::SummaryDocument;
pub use walker::{
    TOOL_IGNORE_FILE, VCS_IGNORE_FILE, default_output_name, project_name, summarize,
};

use crate::classify::{Classification, classify_file};
use crate::error::SummaryError;
use crate::options::SummaryOptions;
use crate::patterns::{PatternMatcher, load_patterns};
use crate::types::SummaryDocument;
use std::fs;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

/// Name of the tool's own ignore file, loaded from the traversal root.
pub const TOOL_IGNORE_FILE: &str = ".sumignore";
/// Name of the version-control ignore file, loaded from the traversal root.
pub const VCS_IGNORE_FILE: &str = ".gitignore";
const VCS_METADATA_DIR: &str = ".git";

/// Default output filename for a given project.
pub fn default_output_name(project_name: &str) -> String {
    format!("{project_name}_summary.md")
}

/// Basename of the (resolved) root directory, used as the project name.
pub fn project_name(root: &Path) -> String {
    let resolved = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    resolved
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "project".to_owned())
}

struct TreeWalker {
    root: PathBuf,
    matcher: PatternMatcher,
    file_types: Vec<String>,
}

/// Walks the tree under `options.root` and accumulates the two output
/// streams of a [`SummaryDocument`].
///
/// The pattern set is the union of the root's version-control ignore file,
/// the tool ignore file, caller-supplied patterns, and the built-in
/// exclusions (the output filename, the tool ignore filename, and the
/// version-control metadata directory).
///
/// Only root validation is fatal; everything below the root degrades to
/// omission on error.
pub fn summarize(options: SummaryOptions) -> Result<SummaryDocument, SummaryError> {
    if !options.root.is_dir() {
        return Err(SummaryError::NotADirectory(options.root));
    }
    let root = options
        .root
        .canonicalize()
        .map_err(|e| SummaryError::io(&options.root, e))?;
    #[cfg(feature = "logging")]
    tracing::debug!("summarizing {}", root.display());

    let mut patterns = Vec::new();
    if options.respect_gitignore {
        patterns.extend(load_patterns(&root.join(VCS_IGNORE_FILE)));
    }
    patterns.extend(load_patterns(&root.join(TOOL_IGNORE_FILE)));
    patterns.extend(options.ignore_patterns);
    let output_name = options
        .output
        .as_deref()
        .and_then(Path::file_name)
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| default_output_name(&project_name(&root)));
    patterns.push(output_name);
    patterns.push(TOOL_IGNORE_FILE.to_owned());
    patterns.push(VCS_METADATA_DIR.to_owned());

    let walker = TreeWalker {
        matcher: PatternMatcher::new(&patterns),
        root,
        file_types: options.file_types,
    };
    #[cfg(feature = "logging")]
    tracing::debug!("compiled {} ignore rules", walker.matcher.len());
    let mut doc = SummaryDocument::default();
    walker.visit_dir(&walker.root, 0, &mut doc);
    Ok(doc)
}

impl TreeWalker {
    fn relative(&self, path: &Path) -> String {
        // A path outside the root is treated as the root itself and is
        // never excluded by path rules.
        path.strip_prefix(&self.root)
            .map(|p| p.to_string_lossy().replace('\\', "/"))
            .unwrap_or_default()
    }

    fn visit_dir(&self, dir: &Path, depth: usize, doc: &mut SummaryDocument) {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| ".".to_owned());
        if self.matcher.is_excluded(&self.relative(dir), &name) {
            return;
        }
        doc.structure
            .push_str(&format!("{}- {}/\n", "  ".repeat(depth), name));
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::warn!("cannot read directory {}: {}", dir.display(), _e);
                return;
            }
        };
        let mut children: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .collect();
        // Sorted so output is reproducible across filesystems.
        children.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));
        for child in children {
            if child.is_dir() {
                self.visit_dir(&child, depth + 1, doc);
            } else {
                self.visit_file(&child, depth + 1, doc);
            }
        }
    }

    fn visit_file(&self, file: &Path, depth: usize, doc: &mut SummaryDocument) {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let rel = self.relative(file);
        if self.matcher.is_excluded(&rel, &name) {
            return;
        }
        // The allow-list gate runs before classification and produces no
        // outline entry at all.
        if !self.extension_allowed(file) {
            return;
        }
        let indent = "  ".repeat(depth);
        match classify_file(file) {
            Classification::Binary => {
                doc.structure
                    .push_str(&format!("{indent}- {name} (binary file)\n"));
            }
            Classification::Text(content) => {
                doc.structure.push_str(&format!("{indent}- {name}\n"));
                if !content.trim().is_empty() {
                    doc.contents.push_str(&format!("### {rel}\n\n```\n"));
                    doc.contents.push_str(&content);
                    doc.contents.push_str("\n```\n\n");
                }
            }
            Classification::Unreadable => {
                doc.structure.push_str(&format!("{indent}- {name}\n"));
            }
        }
    }

    fn extension_allowed(&self, file: &Path) -> bool {
        if self.file_types.is_empty() {
            return true;
        }
        let Some(ext) = file.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        // A leading dot in the configured type is optional.
        self.file_types
            .iter()
            .any(|t| t.trim_start_matches('.') == ext)
    }
}

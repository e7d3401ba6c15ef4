//! Ignore-pattern loading and matching.
//!
//! Patterns use a simplified, flat exclusion model: every pattern in the set is
//! tried independently and any match excludes the candidate. There is no
//! negation and no `**` handling. Three pattern shapes are recognized:
//!
//! - trailing separator (`docs/`): directory-anchored, excludes the directory
//!   and everything nested under it,
//! - no separator (`*.log`): shell glob against the basename at any depth,
//! - separator inside (`src/*.rs`): shell glob against the full root-relative
//!   path.

use globset::{Glob, GlobMatcher};
use std::fs;
use std::path::Path;

/// Reads an ignore file into a list of raw pattern strings.
///
/// A missing or unreadable file yields an empty list rather than an error.
/// Blank lines and lines starting with `#` are dropped; nothing else is
/// interpreted (no inline comments, no escapes).
pub fn load_patterns(path: &Path) -> Vec<String> {
    let Ok(text) = fs::read_to_string(path) else {
        return Vec::new();
    };
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .collect()
}

enum Rule {
    /// Stem of a directory-anchored pattern, trailing separator stripped.
    DirPrefix(String),
    Basename(GlobMatcher),
    Rooted(GlobMatcher),
}

/// Compiled union of ignore patterns for one summary run.
pub struct PatternMatcher {
    rules: Vec<Rule>,
}

impl PatternMatcher {
    /// Compiles the accumulated pattern list. Blank patterns and patterns
    /// that fail to compile as globs are skipped.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rules = Vec::new();
        for pattern in patterns {
            let raw = pattern.as_ref().trim();
            if raw.is_empty() {
                continue;
            }
            // Separators are unified before any comparison so rule
            // evaluation is platform-independent.
            let normalized = raw.replace('\\', "/");
            if let Some(stem) = normalized.strip_suffix('/') {
                if !stem.is_empty() {
                    rules.push(Rule::DirPrefix(stem.to_owned()));
                }
            } else {
                match Glob::new(&normalized) {
                    Ok(glob) => {
                        let matcher = glob.compile_matcher();
                        if normalized.contains('/') {
                            rules.push(Rule::Rooted(matcher));
                        } else {
                            rules.push(Rule::Basename(matcher));
                        }
                    }
                    Err(_e) => {
                        #[cfg(feature = "logging")]
                        tracing::warn!("skipping invalid ignore pattern '{}': {}", raw, _e);
                    }
                }
            }
        }
        Self { rules }
    }

    /// Decides whether a candidate is excluded by any pattern in the set.
    ///
    /// `relative_path` is the candidate's path relative to the traversal
    /// root; an empty string denotes the root itself, which is never
    /// excluded. Each path-shaped rule is also tried against a
    /// leading-separator variant of the candidate, to tolerate
    /// absolute-style anchoring habits in authored ignore files.
    pub fn is_excluded(&self, relative_path: &str, basename: &str) -> bool {
        let rel = relative_path.replace('\\', "/");
        if rel.is_empty() {
            return false;
        }
        let rooted = format!("/{rel}");
        self.rules.iter().any(|rule| match rule {
            Rule::DirPrefix(stem) => path_under(&rel, stem) || path_under(&rooted, stem),
            Rule::Basename(glob) => glob.is_match(basename),
            Rule::Rooted(glob) => glob.is_match(&rel) || glob.is_match(&rooted),
        })
    }

    /// Number of usable rules, for diagnostics.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// True when `path` equals `stem` or sits anywhere under it.
///
/// Matches on the path string alone, without checking that `stem` is an
/// actual directory on disk.
fn path_under(path: &str, stem: &str) -> bool {
    path == stem || (path.starts_with(stem) && path.as_bytes().get(stem.len()) == Some(&b'/'))
}

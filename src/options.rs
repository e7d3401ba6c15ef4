use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryOptions {
    pub root: PathBuf,
    pub respect_gitignore: bool,
    pub ignore_patterns: Vec<String>,
    pub file_types: Vec<String>,
    pub output: Option<PathBuf>,
}
impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            respect_gitignore: true,
            ignore_patterns: Vec::new(),
            file_types: Vec::new(),
            output: None,
        }
    }
}
#[derive(Debug, Default)]
pub struct SummaryBuilder {
    options: SummaryOptions,
}
impl SummaryBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: SummaryOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn file_types(mut self, types: Vec<String>) -> Self {
        self.options.file_types = types;
        self
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = Some(path.into());
        self
    }
    pub fn build(self) -> SummaryOptions {
        self.options
    }
}

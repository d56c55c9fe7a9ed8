use crate::error::FoldermdError;
use crate::ignore_file::{IGNORE_FILE_NAME, load_ignore_file};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[cfg(feature = "logging")]
use tracing;

/// Patterns ignored when the caller does not supply its own list.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[".git", ".DS_Store", "node_modules", "*.log"];

/// Files strictly larger than this are listed but their content is omitted.
pub const DEFAULT_FILE_SIZE_LIMIT: u64 = 1024 * 1024;

/// Name of the generated document when no output path is given.
pub const DEFAULT_OUTPUT: &str = "README.md";

/// How file content is sniffed before it is embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryDetection {
    /// A NUL byte in the first 512 bytes marks the file as binary.
    Simple,
    /// `content_inspector` over the same 512-byte window (BOM aware).
    Accurate,
    /// Every file is treated as text.
    None,
}

/// Configuration for one run. Never mutated once traversal starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoldermdOptions {
    pub root: PathBuf,
    pub include_files: bool,
    pub include_content: bool,
    pub output: PathBuf,
    pub ignore_patterns: Vec<String>,
    /// `None` means unlimited. Depth 0 is the root's direct children.
    pub max_depth: Option<usize>,
    pub show_hidden: bool,
    pub binary_detection: BinaryDetection,
    pub file_size_limit: u64,
}
impl Default for FoldermdOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            include_files: false,
            include_content: false,
            output: PathBuf::from(DEFAULT_OUTPUT),
            ignore_patterns: DEFAULT_IGNORE_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            max_depth: None,
            show_hidden: false,
            binary_detection: BinaryDetection::Simple,
            file_size_limit: DEFAULT_FILE_SIZE_LIMIT,
        }
    }
}
impl FoldermdOptions {
    /// Validates the root and appends patterns from `<root>/.foldermd.ignore`.
    ///
    /// Returns a new value; `self` is left as the caller built it. An ignore
    /// file that exists but cannot be read is logged and skipped.
    pub fn resolve(&self) -> Result<FoldermdOptions, FoldermdError> {
        if !self.root.is_dir() {
            return Err(FoldermdError::MissingDirectory(self.root.clone()));
        }
        let mut resolved = self.clone();
        let ignore_path = self.root.join(IGNORE_FILE_NAME);
        if ignore_path.is_file() {
            match load_ignore_file(&ignore_path) {
                Ok(extra) => {
                    #[cfg(feature = "logging")]
                    tracing::info!(
                        "Loaded {} ignore patterns from {}",
                        extra.len(),
                        ignore_path.display()
                    );
                    resolved.ignore_patterns.extend(extra);
                }
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("Skipping unreadable ignore file: {}", _e);
                }
            }
        }
        Ok(resolved)
    }

    /// Depth value as shown to users, `-1` for unlimited.
    pub fn display_depth(&self) -> i64 {
        self.max_depth.map_or(-1, |d| d as i64)
    }

    pub(crate) fn within_depth(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth <= max)
    }
}
#[derive(Debug, Default)]
pub struct FoldermdBuilder {
    options: FoldermdOptions,
}
impl FoldermdBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: FoldermdOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn include_files(mut self, yes: bool) -> Self {
        self.options.include_files = yes;
        self
    }
    /// Content mode. Implies [`include_files`](Self::include_files) at build time.
    pub fn include_content(mut self, yes: bool) -> Self {
        self.options.include_content = yes;
        self
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = path.into();
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    /// Parses a comma-separated list. An empty string clears all patterns.
    pub fn ignore_list(mut self, list: &str) -> Self {
        self.options.ignore_patterns = list
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn show_hidden(mut self, yes: bool) -> Self {
        self.options.show_hidden = yes;
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn file_size_limit(mut self, limit: u64) -> Self {
        self.options.file_size_limit = limit;
        self
    }
    pub fn build(mut self) -> FoldermdOptions {
        if self.options.include_content {
            self.options.include_files = true;
        }
        self.options
    }
}

//! Directory-first ASCII tree rendering.
//!
//! [`TreeLines`] yields one line per visible entry, listing each directory
//! only when the walk reaches it, so a consumer can stream the lines into
//! any sink.

use crate::error::FoldermdError;
use crate::matcher::IgnoreMatcher;
use crate::options::FoldermdOptions;
use crate::types::{DirEntry, escape_control};
use std::fs;
use std::iter::Peekable;
use std::path::{Path, PathBuf};
use std::vec;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const SPACE_INDENT: &str = "    ";

/// Lists `dir` without any filtering. Order is whatever the OS returns.
pub(crate) fn list_dir(dir: &Path) -> Result<Vec<DirEntry>, FoldermdError> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| FoldermdError::io(dir, e))? {
        let entry = entry.map_err(|e| FoldermdError::io(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| FoldermdError::io(&path, e))?;
        entries.push(DirEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir: file_type.is_dir(),
            path,
        });
    }
    Ok(entries)
}

/// Ignore and hidden-file rules shared by the tree and content passes.
pub(crate) fn passes_name_rules(name: &str, options: &FoldermdOptions, matcher: &IgnoreMatcher) -> bool {
    if matcher.is_ignored(name) {
        return false;
    }
    options.show_hidden || !name.starts_with('.')
}

/// Applies the visibility rules and the directory-first, byte-wise name order.
pub fn filter_and_sort(
    entries: Vec<DirEntry>,
    options: &FoldermdOptions,
    matcher: &IgnoreMatcher,
) -> Vec<DirEntry> {
    let mut kept: Vec<DirEntry> = entries
        .into_iter()
        .filter(|e| passes_name_rules(&e.name, options, matcher))
        .filter(|e| e.is_dir || options.include_files)
        .collect();
    kept.sort_by(|a, b| {
        b.is_dir
            .cmp(&a.is_dir)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.path.cmp(&b.path))
    });
    kept
}

fn decorate(entry: &DirEntry, content_mode: bool) -> String {
    let name = escape_control(&entry.name);
    match (entry.is_dir, content_mode) {
        (true, true) => format!("📁 {}/", name),
        (true, false) => format!("{}/", name),
        (false, true) => format!("📄 {}", name),
        (false, false) => name.into_owned(),
    }
}

struct Frame {
    entries: Peekable<vec::IntoIter<DirEntry>>,
    prefix: String,
    depth: usize,
}

/// Lazy tree renderer. Yields `Err` once if a directory cannot be listed,
/// then stops.
pub struct TreeLines<'a> {
    options: &'a FoldermdOptions,
    matcher: &'a IgnoreMatcher,
    stack: Vec<Frame>,
    pending: Option<(PathBuf, String, usize)>,
    failed: bool,
}
impl<'a> TreeLines<'a> {
    pub fn new(root: impl Into<PathBuf>, options: &'a FoldermdOptions, matcher: &'a IgnoreMatcher) -> Self {
        Self {
            options,
            matcher,
            stack: Vec::new(),
            pending: Some((root.into(), String::new(), 0)),
            failed: false,
        }
    }

    fn descend(&mut self, dir: PathBuf, prefix: String, depth: usize) -> Result<(), FoldermdError> {
        if !self.options.within_depth(depth) {
            return Ok(());
        }
        let entries = filter_and_sort(list_dir(&dir)?, self.options, self.matcher);
        self.stack.push(Frame {
            entries: entries.into_iter().peekable(),
            prefix,
            depth,
        });
        Ok(())
    }
}
impl Iterator for TreeLines<'_> {
    type Item = Result<String, FoldermdError>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        if let Some((dir, prefix, depth)) = self.pending.take() {
            if let Err(e) = self.descend(dir, prefix, depth) {
                self.failed = true;
                return Some(Err(e));
            }
        }
        loop {
            let frame = self.stack.last_mut()?;
            let Some(entry) = frame.entries.next() else {
                self.stack.pop();
                continue;
            };
            let is_last = frame.entries.peek().is_none();
            let (branch, indent) = if is_last {
                (LAST_BRANCH, SPACE_INDENT)
            } else {
                (BRANCH, PIPE_INDENT)
            };
            let line = format!(
                "{}{}{}",
                frame.prefix,
                branch,
                decorate(&entry, self.options.include_content)
            );
            if entry.is_dir {
                self.pending = Some((entry.path, format!("{}{}", frame.prefix, indent), frame.depth + 1));
            }
            return Some(Ok(line));
        }
    }
}

/// Collects [`TreeLines`] for `root`, stopping at the first listing error.
pub fn render_tree(
    root: impl Into<PathBuf>,
    options: &FoldermdOptions,
    matcher: &IgnoreMatcher,
) -> Result<Vec<String>, FoldermdError> {
    TreeLines::new(root, options, matcher).collect()
}

use crate::classify::format_size;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

/// One directory listing entry, read fresh from the filesystem.
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Unfiltered counts for the whole subtree, root excluded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStats {
    pub files: usize,
    pub directories: usize,
}

/// What the content pass emits for a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSection {
    /// Larger than the configured limit; content omitted.
    TooLarge { path: PathBuf, size: u64 },
    /// Failed the text sniff; content omitted.
    Binary { path: PathBuf, size: u64 },
    /// Reading failed after the file was listed.
    Unreadable { path: PathBuf, error: String },
    Text {
        path: PathBuf,
        size: u64,
        language: &'static str,
        content: String,
    },
}
impl FileSection {
    /// Path relative to the traversal root.
    pub fn path(&self) -> &Path {
        match self {
            FileSection::TooLarge { path, .. }
            | FileSection::Binary { path, .. }
            | FileSection::Unreadable { path, .. }
            | FileSection::Text { path, .. } => path,
        }
    }
}

/// Replaces control characters with their `\n`-style escapes so a name
/// always stays on one line of the document.
pub(crate) fn escape_control(name: &str) -> Cow<'_, str> {
    if !name.chars().any(char::is_control) {
        return Cow::Borrowed(name);
    }
    let mut escaped = String::with_capacity(name.len() + 8);
    for c in name.chars() {
        if c.is_control() {
            escaped.extend(c.escape_debug());
        } else {
            escaped.push(c);
        }
    }
    Cow::Owned(escaped)
}

/// Shortest backtick fence (at least three) that no run inside `content` can close.
pub(crate) fn fence_for(content: &str) -> String {
    let mut longest = 0usize;
    let mut run = 0usize;
    for c in content.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    "`".repeat((longest + 1).max(3))
}

impl fmt::Display for FileSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path().display().to_string();
        write!(f, "### 📄 {}\n\n", escape_control(&path))?;
        match self {
            FileSection::TooLarge { size, .. } => {
                write!(f, "*File too large to display ({})*\n\n", format_size(*size))
            }
            FileSection::Binary { size, .. } => {
                write!(f, "*Binary file ({})*\n\n", format_size(*size))
            }
            FileSection::Unreadable { error, .. } => {
                write!(f, "*Error reading file: {}*\n\n", error)
            }
            FileSection::Text {
                size,
                language,
                content,
                ..
            } => {
                let fence = fence_for(content);
                write!(
                    f,
                    "*Size: {} | Language: {}*\n\n{}{}\n",
                    format_size(*size),
                    language,
                    fence,
                    language
                )?;
                f.write_str(content)?;
                if !content.ends_with('\n') {
                    f.write_str("\n")?;
                }
                write!(f, "{}\n\n", fence)
            }
        }
    }
}

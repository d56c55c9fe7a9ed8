//! The `.foldermd.ignore` file: one pattern per line, `#` comments.

use crate::error::FoldermdError;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// File name looked up in the target directory.
pub const IGNORE_FILE_NAME: &str = ".foldermd.ignore";

/// Written by `foldermd init`.
pub const IGNORE_FILE_TEMPLATE: &str = "\
# foldermd ignore patterns
# Lines starting with # are comments
# Use glob patterns to match files and directories

# Version control
.git
.svn
.hg

# Dependencies
node_modules
vendor
__pycache__
.venv
venv

# Build outputs
build
dist
out
target
bin
obj

# IDE and editor files
.vscode
.idea
*.swp
*.swo
*~

# OS generated files
.DS_Store
Thumbs.db
Desktop.ini

# Logs
*.log
logs

# Temporary files
tmp
temp
*.tmp
*.temp

# Archives
*.zip
*.tar.gz
*.rar
*.7z
";

/// Extracts patterns from ignore-file text. Blank and `#` lines are dropped.
pub fn parse_ignore_patterns(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub fn load_ignore_file(path: impl AsRef<Path>) -> Result<Vec<String>, FoldermdError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| FoldermdError::io(path, e))?;
    Ok(parse_ignore_patterns(&String::from_utf8_lossy(&bytes)))
}

/// Creates `<dir>/.foldermd.ignore` from [`IGNORE_FILE_TEMPLATE`].
///
/// # Errors
///
/// [`FoldermdError::IgnoreFileExists`] if the file is already there; the
/// existing file is not opened for writing.
pub fn init_ignore_file(dir: impl AsRef<Path>) -> Result<PathBuf, FoldermdError> {
    let path = dir.as_ref().join(IGNORE_FILE_NAME);
    let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(FoldermdError::IgnoreFileExists(path));
        }
        Err(e) => return Err(FoldermdError::io(path, e)),
    };
    file.write_all(IGNORE_FILE_TEMPLATE.as_bytes())
        .map_err(|e| FoldermdError::io(&path, e))?;
    Ok(path)
}

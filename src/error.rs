use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum FoldermdError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("directory '{0}' does not exist")]
    MissingDirectory(PathBuf),
    #[error("failed to create output file '{path}': {source}")]
    OutputCreate {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("file {0} already exists")]
    IgnoreFileExists(PathBuf),
}
impl FoldermdError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FoldermdError::Io {
            path: path.into(),
            source,
        }
    }
}

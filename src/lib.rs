//! # foldermd
//!
//! `foldermd` renders a directory as a Markdown document: a title, project
//! statistics, an ASCII tree of the structure and, optionally, the content
//! of every text file in language-tagged code blocks.
//!
//! The tree and content passes are lazy iterators ([`TreeLines`],
//! [`ContentSections`]) over an immutable [`FoldermdOptions`]; the
//! [`ReportWriter`] consumes them into any [`std::io::Write`] sink.
//!
//! # Features
//!
//! - `logging` (default): debug and progress logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use foldermd::{FoldermdBuilder, generate};
//!
//! let options = FoldermdBuilder::new(".")
//!     .include_content(true)
//!     .max_depth(2)
//!     .output("PROJECT.md")
//!     .build();
//!
//! let summary = generate(&options).expect("Failed to generate README");
//! println!("{} files, {} directories", summary.stats.files, summary.stats.directories);
//! ```

mod classify;
mod engine;
mod error;
mod ignore_file;
mod matcher;
mod options;
mod output;
mod tree;
mod types;

pub use classify::{SNIFF_LEN, extension_of, format_size, is_text, is_text_with, language_tag};
pub use engine::{ContentSections, project_stats, render_contents};
pub use error::FoldermdError;
pub use ignore_file::{
    IGNORE_FILE_NAME, IGNORE_FILE_TEMPLATE, init_ignore_file, load_ignore_file, parse_ignore_patterns,
};
pub use matcher::{IgnoreMatcher, should_ignore};
pub use options::{
    BinaryDetection, DEFAULT_FILE_SIZE_LIMIT, DEFAULT_IGNORE_PATTERNS, DEFAULT_OUTPUT, FoldermdBuilder,
    FoldermdOptions,
};
pub use output::{ReportSummary, ReportWriter, generate, project_name};
pub use tree::{TreeLines, filter_and_sort, render_tree};
pub use types::{DirEntry, FileSection, ProjectStats};

use crate::classify::{SNIFF_LEN, extension_of, language_tag, looks_binary};
use crate::error::FoldermdError;
use crate::matcher::IgnoreMatcher;
use crate::options::FoldermdOptions;
use crate::tree::passes_name_rules;
use crate::types::{FileSection, ProjectStats};
use ignore::WalkBuilder;
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    /// Lexical pre-order walk with the ignore and hidden rules applied to
    /// every entry below the root, pruning whole subtrees.
    fn filtered(options: &FoldermdOptions, matcher: &IgnoreMatcher) -> Self {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .follow_links(false)
            // walker depth 1 is the root's children, which are depth 0 here
            .max_depth(options.max_depth.map(|d| d + 1))
            .sort_by_file_name(|a, b| a.cmp(b));
        let rules = options.clone();
        let matcher = matcher.clone();
        builder.filter_entry(move |entry| {
            entry.depth() == 0
                || passes_name_rules(&entry.file_name().to_string_lossy(), &rules, &matcher)
        });
        Self {
            inner: builder.build(),
        }
    }
    /// Everything under `root`, hidden and ignored entries included.
    fn unfiltered(root: &Path) -> Self {
        let mut builder = WalkBuilder::new(root);
        builder.standard_filters(false).follow_links(false);
        Self {
            inner: builder.build(),
        }
    }
}
fn read_file_content(
    path: &Path,
    relative: PathBuf,
    size: u64,
    options: &FoldermdOptions,
) -> FileSection {
    if size > options.file_size_limit {
        #[cfg(feature = "logging")]
        tracing::debug!(
            "File too large ({} > {}), skipping content: {}",
            size,
            options.file_size_limit,
            path.display()
        );
        return FileSection::TooLarge {
            path: relative,
            size,
        };
    }
    let unreadable = |relative: PathBuf, e: std::io::Error| FileSection::Unreadable {
        path: relative,
        error: e.to_string(),
    };
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => return unreadable(relative, e),
    };
    let mut reader = BufReader::new(file);
    let mut bytes = Vec::with_capacity(SNIFF_LEN);
    if let Err(e) = reader
        .by_ref()
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut bytes)
    {
        return unreadable(relative, e);
    }
    if looks_binary(&bytes, options.binary_detection) {
        #[cfg(feature = "logging")]
        tracing::debug!("Binary file detected: {}", path.display());
        return FileSection::Binary {
            path: relative,
            size,
        };
    }
    if let Err(e) = reader.read_to_end(&mut bytes) {
        return unreadable(relative, e);
    }
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    FileSection::Text {
        path: relative,
        size,
        language: language_tag(&extension_of(&name)),
        content: String::from_utf8_lossy(&bytes).into_owned(),
    }
}
/// Lazy content pass: one [`FileSection`] per visible file, in lexical
/// walk order. A walk error is yielded once and ends the iteration;
/// per-file problems become placeholder sections instead.
///
/// Only regular files are read, symlinks judged by their target. The
/// configured output file is skipped when it already exists under the root,
/// since its content is the document being written.
pub struct ContentSections<'a> {
    walk: ignore::Walk,
    options: &'a FoldermdOptions,
    output: Option<PathBuf>,
    failed: bool,
}
impl<'a> ContentSections<'a> {
    pub fn new(options: &'a FoldermdOptions, matcher: &IgnoreMatcher) -> Self {
        Self {
            walk: Walker::filtered(options, matcher).inner,
            options,
            output: fs::canonicalize(&options.output).ok(),
            failed: false,
        }
    }

    fn is_output(&self, path: &Path) -> bool {
        match &self.output {
            Some(output) if path.file_name() == output.file_name() => {
                fs::canonicalize(path).is_ok_and(|p| &p == output)
            }
            _ => false,
        }
    }
}
impl Iterator for ContentSections<'_> {
    type Item = Result<FileSection, FoldermdError>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let entry = match self.walk.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(FoldermdError::Walk(e.to_string())));
                }
            };
            if entry.file_type().is_none_or(|t| t.is_dir()) {
                continue;
            }
            let path = entry.path();
            let relative = path
                .strip_prefix(&self.options.root)
                .unwrap_or(path)
                .to_path_buf();
            // follows symlinks, so size and type describe what would be read
            let metadata = match fs::metadata(path) {
                Ok(metadata) => metadata,
                Err(e) => {
                    return Some(Ok(FileSection::Unreadable {
                        path: relative,
                        error: e.to_string(),
                    }));
                }
            };
            if !metadata.is_file() {
                #[cfg(feature = "logging")]
                tracing::debug!("Skipping non-regular file: {}", path.display());
                continue;
            }
            if self.is_output(path) {
                continue;
            }
            return Some(Ok(read_file_content(
                path,
                relative,
                metadata.len(),
                self.options,
            )));
        }
    }
}
/// Collects [`ContentSections`], stopping at the first walk error.
pub fn render_contents(
    options: &FoldermdOptions,
    matcher: &IgnoreMatcher,
) -> Result<Vec<FileSection>, FoldermdError> {
    ContentSections::new(options, matcher).collect()
}
/// Counts every file and directory below `root`, ignoring all filters.
///
/// Unreadable entries are skipped; the root itself is not counted.
pub fn project_stats(root: impl AsRef<Path>) -> ProjectStats {
    let mut stats = ProjectStats::default();
    for result in Walker::unfiltered(root.as_ref()).inner {
        let entry = match result {
            Ok(entry) => entry,
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Skipping entry during stats walk: {}", _e);
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }
        if entry.file_type().is_some_and(|t| t.is_dir()) {
            stats.directories += 1;
        } else {
            stats.files += 1;
        }
    }
    stats
}

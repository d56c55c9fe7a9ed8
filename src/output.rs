//! Markdown report assembly.
//!
//! [`ReportWriter`] pulls lines from [`TreeLines`] and sections from
//! [`ContentSections`] and appends them, in a fixed order, to any
//! [`Write`] sink. [`generate`] wires it to the configured output file.

use crate::engine::{ContentSections, project_stats};
use crate::error::FoldermdError;
use crate::matcher::IgnoreMatcher;
use crate::options::FoldermdOptions;
use crate::tree::TreeLines;
use crate::types::{ProjectStats, escape_control};
use chrono::{DateTime, Local};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub output: PathBuf,
    pub stats: ProjectStats,
    pub tree_lines: usize,
    pub file_sections: usize,
}

/// Title used for the document: the root's base name, resolved through
/// the filesystem for `.` and `..`.
pub fn project_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .or_else(|| {
            fs::canonicalize(root)
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        })
        .unwrap_or_else(|| root.display().to_string())
}

pub struct ReportWriter<W: Write> {
    out: W,
    generated_at: DateTime<Local>,
}
impl<W: Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            generated_at: Local::now(),
        }
    }

    /// Fixes the generation timestamp instead of using the current time.
    pub fn with_timestamp(mut self, at: DateTime<Local>) -> Self {
        self.generated_at = at;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes the whole document for an already resolved configuration.
    ///
    /// Order: title, timestamp, overview, structure (legend when files are
    /// included, then the fenced tree), file contents in content mode, footer.
    ///
    /// # Errors
    ///
    /// Directory listing failures and sink write failures abort the report;
    /// whatever was written before stays in the sink.
    pub fn write_report(&mut self, options: &FoldermdOptions) -> Result<ReportSummary, FoldermdError> {
        let io = |e| FoldermdError::io(&options.output, e);
        let matcher = IgnoreMatcher::new(&options.ignore_patterns);

        write!(self.out, "# {}\n\n", escape_control(&project_name(&options.root))).map_err(io)?;
        write!(
            self.out,
            "> Generated with foldermd on {}\n\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S")
        )
        .map_err(io)?;

        let stats = project_stats(&options.root);
        write!(self.out, "## 📊 Project Overview\n\n").map_err(io)?;
        writeln!(self.out, "- **Total Files:** {}", stats.files).map_err(io)?;
        writeln!(self.out, "- **Total Directories:** {}", stats.directories).map_err(io)?;
        let root = options.root.display().to_string();
        write!(self.out, "- **Project Root:** `{}`\n\n", escape_control(&root)).map_err(io)?;

        write!(self.out, "## 📁 Project Structure\n\n").map_err(io)?;
        if options.include_files {
            write!(self.out, "```\nLegend: 📁 Directory | 📄 File\n```\n\n").map_err(io)?;
        }

        #[cfg(feature = "logging")]
        tracing::info!("Building project tree");
        writeln!(self.out, "```").map_err(io)?;
        let mut tree_lines = 0usize;
        for line in TreeLines::new(&options.root, options, &matcher) {
            writeln!(self.out, "{}", line?).map_err(io)?;
            tree_lines += 1;
        }
        write!(self.out, "```\n\n").map_err(io)?;

        let mut file_sections = 0usize;
        if options.include_content {
            #[cfg(feature = "logging")]
            tracing::info!("Including file contents");
            write!(self.out, "## 📄 File Contents\n\n").map_err(io)?;
            for section in ContentSections::new(options, &matcher) {
                write!(self.out, "{}", section?).map_err(io)?;
                file_sections += 1;
            }
        }

        self.write_footer(options)?;
        Ok(ReportSummary {
            output: options.output.clone(),
            stats,
            tree_lines,
            file_sections,
        })
    }

    fn write_footer(&mut self, options: &FoldermdOptions) -> Result<(), FoldermdError> {
        let io = |e| FoldermdError::io(&options.output, e);
        write!(self.out, "---\n\n## 🛠️ Generated with foldermd\n\n").map_err(io)?;
        writeln!(self.out, "**Configuration used:**").map_err(io)?;
        writeln!(self.out, "- Include files: `{}`", options.include_files).map_err(io)?;
        writeln!(self.out, "- Include content: `{}`", options.include_content).map_err(io)?;
        writeln!(self.out, "- Max depth: `{}`", options.display_depth()).map_err(io)?;
        writeln!(self.out, "- Show hidden: `{}`", options.show_hidden).map_err(io)?;
        writeln!(
            self.out,
            "- Ignore patterns: `{}`",
            options.ignore_patterns.join(", ")
        )
        .map_err(io)?;
        write!(
            self.out,
            "\n*This README was automatically generated. Consider customizing it for your project!*\n"
        )
        .map_err(io)?;
        self.out.flush().map_err(io)
    }
}

/// Resolves `options`, creates the output file and writes the report.
///
/// # Errors
///
/// Fails before creating anything if the root is not a directory, with
/// [`FoldermdError::OutputCreate`] if the output cannot be created, and
/// with any error from [`ReportWriter::write_report`].
pub fn generate(options: &FoldermdOptions) -> Result<ReportSummary, FoldermdError> {
    let resolved = options.resolve()?;
    #[cfg(feature = "logging")]
    tracing::debug!("Resolved configuration: {:?}", resolved);
    let file = File::create(&resolved.output).map_err(|source| FoldermdError::OutputCreate {
        path: resolved.output.clone(),
        source,
    })?;
    let mut writer = ReportWriter::new(BufWriter::new(file));
    writer.write_report(&resolved)
}

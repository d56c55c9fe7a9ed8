//! Command-line interface for foldermd.
//!
//! Generates a README-style Markdown document from a folder's structure,
//! optionally embedding file contents.

use clap::{ArgAction, Parser, Subcommand};
use foldermd::{
    BinaryDetection, DEFAULT_FILE_SIZE_LIMIT, DEFAULT_IGNORE_PATTERNS, DEFAULT_OUTPUT,
    FoldermdBuilder, FoldermdError, FoldermdOptions, IGNORE_FILE_NAME, generate, init_ignore_file,
};
use std::path::{Path, PathBuf};
use std::process::exit;

const EXAMPLES: &str = "\
Examples:
  # Generate README for current directory
  foldermd

  # Generate with files included
  foldermd --files

  # Generate with file contents and custom output name
  foldermd --content --output PROJECT.md

  # Generate for specific directory with depth limit
  foldermd /path/to/project --files --depth 3

  # Custom ignore patterns
  foldermd --files --ignore \".git,*.log,build,dist\"";

/// foldermd — generate a README from a folder structure
#[derive(Parser)]
#[command(name = "foldermd", version, about, long_about = None, after_help = EXAMPLES)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Directory to document (default current dir)
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Include files in the tree structure
    #[arg(short, long)]
    files: bool,

    /// Include file contents with syntax highlighting (implies --files)
    #[arg(short, long)]
    content: bool,

    /// Output README file name
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Comma-separated patterns to ignore
    #[arg(short, long, default_value_t = DEFAULT_IGNORE_PATTERNS.join(","))]
    ignore: String,

    /// Maximum directory depth to traverse (-1 for unlimited)
    #[arg(short, long, default_value_t = -1, allow_negative_numbers = true)]
    depth: i64,

    /// Include hidden files and directories
    #[arg(long)]
    hidden: bool,

    /// Binary detection strategy
    #[arg(long, default_value = "simple", value_parser = parse_binary_detection)]
    binary_detection: BinaryDetection,

    /// Files larger than this many bytes have their content omitted
    #[arg(long, default_value_t = DEFAULT_FILE_SIZE_LIMIT)]
    file_size_limit: u64,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Subcommand)]
enum Command {
    /// Print the version number
    Version,
    /// Create a .foldermd.ignore file with common ignore patterns
    Init {
        /// Directory to create the ignore file in
        #[arg(default_value = ".")]
        directory: PathBuf,
    },
}

/// Parse string into BinaryDetection enum.
fn parse_binary_detection(s: &str) -> Result<BinaryDetection, String> {
    match s {
        "simple" => Ok(BinaryDetection::Simple),
        "accurate" => Ok(BinaryDetection::Accurate),
        "none" => Ok(BinaryDetection::None),
        _ => Err(format!("invalid binary detection method: {}", s)),
    }
}

impl Cli {
    fn to_options(&self) -> FoldermdOptions {
        let builder = FoldermdBuilder::new(&self.directory)
            .include_files(self.files)
            .include_content(self.content)
            .output(&self.output)
            .ignore_list(&self.ignore)
            .show_hidden(self.hidden)
            .binary_detection(self.binary_detection)
            .file_size_limit(self.file_size_limit);
        let builder = match usize::try_from(self.depth) {
            Ok(depth) => builder.max_depth(depth),
            Err(_) => builder.no_limit_depth(),
        };
        builder.build()
    }
}

#[cfg(feature = "logging")]
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

#[cfg(not(feature = "logging"))]
fn init_logging(_verbose: u8) {}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command.clone() {
        Some(Command::Version) => {
            println!("foldermd v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(Command::Init { directory }) => run_init(&directory),
        None => run_generate(&cli.to_options()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

fn run_generate(options: &FoldermdOptions) -> Result<(), FoldermdError> {
    println!("🚀 Generating README for: {}", options.root.display());
    let summary = generate(options)?;
    println!(
        "✅ README generated successfully: {} ({} files, {} directories)",
        summary.output.display(),
        summary.stats.files,
        summary.stats.directories
    );
    Ok(())
}

fn run_init(directory: &Path) -> Result<(), FoldermdError> {
    let path = init_ignore_file(directory)?;
    println!("✅ Created {} with common ignore patterns", path.display());
    println!("💡 Edit {} to customize ignore patterns for your project", IGNORE_FILE_NAME);
    Ok(())
}

//! Text/binary sniffing, language tags, and human-readable sizes.

use crate::options::BinaryDetection;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Number of leading bytes inspected by [`is_text`].
pub const SNIFF_LEN: usize = 512;

/// Returns `true` when the first [`SNIFF_LEN`] bytes contain no NUL byte.
///
/// Fails closed: a file that cannot be opened or read is not text, and
/// neither is anything that is not a regular file (pipes, devices).
pub fn is_text(path: impl AsRef<Path>) -> bool {
    is_text_with(path, BinaryDetection::Simple)
}

pub fn is_text_with(path: impl AsRef<Path>, detection: BinaryDetection) -> bool {
    let path = path.as_ref();
    if !fs::metadata(path).is_ok_and(|m| m.is_file()) {
        return false;
    }
    let Ok(file) = File::open(path) else {
        return false;
    };
    let mut head = Vec::with_capacity(SNIFF_LEN);
    if file.take(SNIFF_LEN as u64).read_to_end(&mut head).is_err() {
        return false;
    }
    !looks_binary(&head, detection)
}

pub(crate) fn looks_binary(head: &[u8], detection: BinaryDetection) -> bool {
    match detection {
        BinaryDetection::Simple => head.contains(&0),
        BinaryDetection::Accurate => content_inspector::inspect(head).is_binary(),
        BinaryDetection::None => false,
    }
}

/// Extension of a file name as used for language lookup, lower-cased.
///
/// Everything after the last `.`, so dotfiles count as pure extensions
/// (`.gitignore` gives `gitignore`). Empty when there is no dot.
pub fn extension_of(name: &str) -> String {
    match name.rfind('.') {
        Some(idx) => name[idx + 1..].to_ascii_lowercase(),
        None => String::new(),
    }
}

/// Highlight tag for a lower-cased extension, `"text"` when unknown.
pub fn language_tag(ext: &str) -> &'static str {
    match ext.trim_start_matches('.') {
        "go" => "go",
        "py" => "python",
        "js" => "javascript",
        "ts" => "typescript",
        "jsx" => "jsx",
        "tsx" => "tsx",
        "java" => "java",
        "c" | "h" => "c",
        "cpp" | "cc" | "cxx" | "hpp" | "hxx" => "cpp",
        "rs" => "rust",
        "php" => "php",
        "rb" => "ruby",
        "sh" | "bash" | "env" => "bash",
        "zsh" => "zsh",
        "fish" => "fish",
        "ps1" => "powershell",
        "html" | "htm" => "html",
        "css" => "css",
        "scss" => "scss",
        "sass" => "sass",
        "less" => "less",
        "xml" => "xml",
        "json" => "json",
        "yaml" | "yml" => "yaml",
        "toml" => "toml",
        "ini" | "cfg" | "conf" => "ini",
        "md" => "markdown",
        "txt" => "text",
        "sql" => "sql",
        "r" => "r",
        "m" => "matlab",
        "swift" => "swift",
        "kt" | "kts" => "kotlin",
        "scala" => "scala",
        "clj" | "cljs" => "clojure",
        "hs" => "haskell",
        "elm" => "elm",
        "ex" | "exs" => "elixir",
        "erl" => "erlang",
        "dart" => "dart",
        "lua" => "lua",
        "pl" => "perl",
        "vim" => "vim",
        "dockerfile" => "dockerfile",
        "gitignore" => "gitignore",
        "makefile" => "makefile",
        "cmake" => "cmake",
        _ => "text",
    }
}

/// Formats a byte count with 1024-based units: `0 B`, `1.5 KB`, `2.0 MB`.
pub fn format_size(bytes: u64) -> String {
    const UNIT: u64 = 1024;
    if bytes < UNIT {
        return format!("{} B", bytes);
    }
    let mut div = UNIT;
    let mut exp = 0usize;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }
    let suffix = ['K', 'M', 'G', 'T', 'P', 'E'][exp];
    format!("{:.1} {}B", bytes as f64 / div as f64, suffix)
}

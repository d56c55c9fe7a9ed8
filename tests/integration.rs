use chrono::{Local, TimeZone};
use foldermd::{FoldermdBuilder, FoldermdError, FoldermdOptions, IGNORE_FILE_NAME, ReportWriter, generate};
use std::fs;
use std::path::Path;
use tempfile::tempdir;
fn sample_project(parent: &Path) -> std::path::PathBuf {
    let root = parent.join("proj");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("a.go"), "package a\n").unwrap();
    fs::create_dir(root.join(".git")).unwrap();
    fs::write(root.join(".git/HEAD"), "ref: refs/heads/main\n").unwrap();
    fs::create_dir(root.join("build")).unwrap();
    root
}
fn render(options: &FoldermdOptions) -> String {
    let at = Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let mut writer = ReportWriter::new(Vec::new()).with_timestamp(at);
    writer.write_report(options).unwrap();
    String::from_utf8(writer.into_inner()).unwrap()
}
fn tree_block(doc: &str) -> Vec<&str> {
    let start = doc.find("## 📁 Project Structure").unwrap();
    let mut lines = doc[start..].lines();
    loop {
        while lines.next().unwrap() != "```" {}
        let block: Vec<&str> = lines.by_ref().take_while(|l| *l != "```").collect();
        if !block.first().is_some_and(|l| l.starts_with("Legend:")) {
            return block;
        }
    }
}
fn fences_balanced(doc: &str) -> bool {
    let mut open: Option<usize> = None;
    for line in doc.lines() {
        let ticks = line.chars().take_while(|c| *c == '`').count();
        if ticks < 3 {
            continue;
        }
        match open {
            None => open = Some(ticks),
            Some(len) if ticks >= len && line[ticks..].trim().is_empty() => open = None,
            Some(_) => {}
        }
    }
    open.is_none()
}
#[test]
fn integration_default_flags_show_only_directories() {
    let dir = tempdir().unwrap();
    let root = sample_project(dir.path());
    let options = FoldermdBuilder::new(&root).build();
    let doc = render(&options);
    assert_eq!(tree_block(&doc), vec!["└── build/"]);
    assert!(!doc.contains("Legend:"));
    assert!(!doc.contains("## 📄 File Contents"));
    assert!(fences_balanced(&doc));
}
#[test]
fn integration_content_mode_embeds_files() {
    let dir = tempdir().unwrap();
    let root = sample_project(dir.path());
    let options = FoldermdBuilder::new(&root).include_content(true).build();
    let doc = render(&options);
    assert_eq!(tree_block(&doc), vec!["├── 📁 build/", "└── 📄 a.go"]);
    assert!(doc.contains("```\nLegend: 📁 Directory | 📄 File\n```\n\n"));
    assert!(doc.contains(
        "### 📄 a.go\n\n*Size: 10 B | Language: go*\n\n```go\npackage a\n```\n\n"
    ));
    assert!(!doc.contains("HEAD"));
    assert!(fences_balanced(&doc));
}
#[test]
fn integration_document_section_order() {
    let dir = tempdir().unwrap();
    let root = sample_project(dir.path());
    let options = FoldermdBuilder::new(&root).include_content(true).max_depth(3).build();
    let doc = render(&options);
    assert!(doc.starts_with(
        "# proj\n\n> Generated with foldermd on 2024-01-02 03:04:05\n\n## 📊 Project Overview\n\n"
    ));
    // unfiltered: .git and its HEAD are counted
    assert!(doc.contains("- **Total Files:** 2\n- **Total Directories:** 2\n"));
    let markers = [
        "## 📊 Project Overview",
        "## 📁 Project Structure",
        "Legend:",
        "## 📄 File Contents",
        "---\n\n## 🛠️ Generated with foldermd",
        "- Max depth: `3`",
    ];
    let positions: Vec<usize> = markers.iter().map(|m| doc.find(m).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(doc.ends_with("Consider customizing it for your project!*\n"));
}
#[test]
fn integration_unmatched_pattern_is_idempotent() {
    let dir = tempdir().unwrap();
    let root = sample_project(dir.path());
    fs::write(root.join("notes.md"), "# notes\n```sh\necho hi\n```\n").unwrap();
    let base = FoldermdBuilder::new(&root).include_content(true).build();
    let mut patterns = base.ignore_patterns.clone();
    patterns.push("nothing-matches-*".to_string());
    let extended = FoldermdBuilder::new(&root)
        .include_content(true)
        .ignore_patterns(patterns)
        .build();
    let strip = |doc: String| -> String {
        doc.lines()
            .filter(|l| !l.starts_with("- Ignore patterns:"))
            .collect::<Vec<_>>()
            .join("\n")
    };
    let first = render(&base);
    assert!(fences_balanced(&first));
    assert_eq!(strip(first), strip(render(&extended)));
}
#[test]
fn integration_generate_writes_output_and_merges_ignore_file() {
    let dir = tempdir().unwrap();
    let root = sample_project(dir.path());
    fs::create_dir(root.join("secret")).unwrap();
    fs::write(root.join(IGNORE_FILE_NAME), "# local\nsecret\n").unwrap();
    let output = dir.path().join("OUT.md");
    let options = FoldermdBuilder::new(&root)
        .include_files(true)
        .output(&output)
        .build();
    let summary = generate(&options).unwrap();
    assert_eq!(summary.output, output);
    assert_eq!(summary.tree_lines, 2);
    assert_eq!(summary.file_sections, 0);
    let doc = fs::read_to_string(&output).unwrap();
    assert_eq!(tree_block(&doc), vec!["├── build/", "└── a.go"]);
    assert!(doc.contains("- Ignore patterns: `.git, .DS_Store, node_modules, *.log, secret`"));
    assert!(doc.contains("- Max depth: `-1`"));
}
#[test]
fn integration_missing_directory_creates_nothing() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("README.md");
    let options = FoldermdBuilder::new(dir.path().join("absent"))
        .output(&output)
        .build();
    let err = generate(&options).unwrap_err();
    assert!(matches!(err, FoldermdError::MissingDirectory(_)));
    assert!(!output.exists());
}
#[test]
fn integration_uncreatable_output_fails() {
    let dir = tempdir().unwrap();
    let root = sample_project(dir.path());
    let options = FoldermdBuilder::new(&root)
        .output(dir.path().join("no/such/dir/README.md"))
        .build();
    let err = generate(&options).unwrap_err();
    assert!(matches!(err, FoldermdError::OutputCreate { .. }));
}
#[cfg(unix)]
#[test]
fn integration_names_with_newlines_keep_fences_balanced() {
    let dir = tempdir().unwrap();
    let root = sample_project(dir.path());
    fs::create_dir(root.join("x\n```\n# injected")).unwrap();
    fs::write(root.join("y\n```.txt"), "y\n").unwrap();
    let options = FoldermdBuilder::new(&root).include_content(true).build();
    let doc = render(&options);
    assert!(fences_balanced(&doc));
    assert!(!doc.contains("\n# injected"));
    assert!(tree_block(&doc).contains(&"├── 📁 x\\n```\\n# injected/"));
    assert!(doc.contains("### 📄 y\\n```.txt\n\n"));
}
#[test]
fn integration_output_inside_root_is_not_embedded() {
    let dir = tempdir().unwrap();
    let root = sample_project(dir.path());
    let output = root.join("README.md");
    let options = FoldermdBuilder::new(&root)
        .include_content(true)
        .output(&output)
        .build();
    let summary = generate(&options).unwrap();
    assert_eq!(summary.file_sections, 1);
    let doc = fs::read_to_string(&output).unwrap();
    assert_eq!(
        tree_block(&doc),
        vec!["├── 📁 build/", "├── 📄 README.md", "└── 📄 a.go"]
    );
    assert!(doc.contains("### 📄 a.go\n\n"));
    assert!(!doc.contains("### 📄 README.md"));
    assert!(fences_balanced(&doc));
}

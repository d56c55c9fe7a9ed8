use foldermd::IGNORE_FILE_NAME;
use std::fs;
use std::process::Command;
use tempfile::tempdir;
fn foldermd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_foldermd"))
}
#[test]
fn cli_version_prints_semver() {
    let out = foldermd().arg("version").output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.trim(), format!("foldermd v{}", env!("CARGO_PKG_VERSION")));
}
#[test]
fn cli_init_refuses_existing_ignore_file() {
    let dir = tempdir().unwrap();
    let first = foldermd().arg("init").arg(dir.path()).output().unwrap();
    assert!(first.status.success());
    let path = dir.path().join(IGNORE_FILE_NAME);
    fs::write(&path, "keep-me\n").unwrap();
    let second = foldermd().arg("init").arg(dir.path()).output().unwrap();
    assert_eq!(second.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&second.stderr).contains("already exists"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "keep-me\n");
}
#[test]
fn cli_init_defaults_to_current_directory() {
    let dir = tempdir().unwrap();
    let out = foldermd().arg("init").current_dir(dir.path()).output().unwrap();
    assert!(out.status.success());
    assert!(dir.path().join(IGNORE_FILE_NAME).is_file());
}
#[test]
fn cli_missing_directory_exits_with_one() {
    let dir = tempdir().unwrap();
    let out = foldermd()
        .arg(dir.path().join("does-not-exist"))
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("does not exist"));
    assert!(!dir.path().join("README.md").exists());
}
#[test]
fn cli_generates_document_with_flags() {
    let dir = tempdir().unwrap();
    let project = dir.path().join("demo");
    fs::create_dir_all(project.join("src/nested")).unwrap();
    fs::write(project.join("src/main.rs"), "fn main() {}\n").unwrap();
    fs::write(project.join("src/nested/deep.rs"), "// deep\n").unwrap();
    let out = foldermd()
        .arg(&project)
        .args(["--content", "--depth", "1", "--output", "DOCS.md", "--ignore", ""])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let doc = fs::read_to_string(dir.path().join("DOCS.md")).unwrap();
    assert!(doc.starts_with("# demo\n"));
    assert!(doc.contains("├── 📁 nested/"));
    assert!(!doc.contains("deep.rs"));
    assert!(doc.contains("```rust\nfn main() {}\n```"));
    assert!(doc.contains("- Include files: `true`"));
    assert!(doc.contains("- Max depth: `1`"));
    assert!(doc.contains("- Ignore patterns: ``"));
}
#[test]
fn cli_negative_depth_means_unlimited() {
    let dir = tempdir().unwrap();
    let project = dir.path().join("demo");
    fs::create_dir_all(project.join("a/b/c")).unwrap();
    let out = foldermd()
        .arg(&project)
        .args(["-d", "-1", "-o", "OUT.md"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let doc = fs::read_to_string(dir.path().join("OUT.md")).unwrap();
    assert!(doc.contains("        └── c/"));
    assert!(doc.contains("- Max depth: `-1`"));
}

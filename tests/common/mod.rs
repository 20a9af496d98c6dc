#![allow(dead_code)]

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

pub fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

pub fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git").args(args).current_dir(dir).status().unwrap();
    assert!(status.success(), "git {args:?} failed");
}

pub fn rev_parse(dir: &Path, rev: &str) -> String {
    let out = Command::new("git")
        .args(["rev-parse", rev])
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(out.status.success());
    String::from_utf8(out.stdout).unwrap().trim().to_string()
}

pub fn init_git_repo(dir: &Path) {
    // init and basic identity
    git(dir, &["init"]);
    git(dir, &["config", "core.autocrlf", "false"]);
    git(dir, &["config", "core.safecrlf", "false"]);
    git(dir, &["config", "user.email", "test@example.com"]);
    git(dir, &["config", "user.name", "Test User"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
}

pub fn write_file(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut f = File::create(&path).unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.sync_all().unwrap();
}

pub fn append_file(dir: &Path, name: &str, content: &str) {
    let mut f = OpenOptions::new().append(true).open(dir.join(name)).unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.sync_all().unwrap();
}

pub fn commit_all(dir: &Path, message: &str) -> String {
    git(dir, &["add", "."]);
    git(dir, &["commit", "-m", message]);
    rev_parse(dir, "HEAD")
}

/// A repository with four catalogs added in `first`, German and Greek
/// updated in `second`, and French added in `third`.
pub struct Fixture {
    pub dir: TempDir,
    pub first: String,
    pub second: String,
    pub third: String,
}

impl Fixture {
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

pub fn translation_fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    init_git_repo(root);

    write_file(root, "po/.gitkeep", "");
    commit_all(root, "Initial commit");
    git(root, &["checkout", "-b", "test-branch"]);

    write_file(root, "po/en_GB.po", "msgid \"test\"\nmsgstr \"test\"");
    write_file(root, "po/el.po", "msgid \"test\"\nmsgstr \"δοκιμή\"");
    write_file(root, "po/de.po", "msgid \"test\"\nmsgstr \"Test\"");
    write_file(root, "po/si.po", "msgid \"test\"\nmsgstr \"පරීක්ෂාව\"");
    let first = commit_all(root, "Add initial translations");

    append_file(root, "po/el.po", "\nmsgid \"new\"\nmsgstr \"νέο\"");
    append_file(root, "po/de.po", "\nmsgid \"new\"\nmsgstr \"neu\"");
    for i in 0..18 {
        append_file(root, "po/de.po", &format!("\nmsgid \"new_{i}\"\nmsgstr \"neu_{i}\""));
    }
    let second = commit_all(root, "Update translations");

    git(root, &["tag", "v5.0.0", &first]);
    git(root, &["tag", "v5.0.1", &second]);

    write_file(root, "po/fr.po", "msgid \"test\"\nmsgstr \"test\"");
    let third = commit_all(root, "Add French translation");

    Fixture { dir, first, second, third }
}

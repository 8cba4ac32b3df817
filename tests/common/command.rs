use crate::common::file::{FileSpec, write_file};
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub const FAKE_AUTHOR: &str = "fake_user";
pub const FAKE_DATE: &str = "2023-01-01 12:00:00";

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

/// Repository with one commit tracking `1.txt`, `a/2.txt` and `a/b/3.txt`
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_vcs_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let file1 = FileSpec::new(repository_dir.path().join("1.txt"), "one".to_string());
    write_file(file1);

    let file2 = FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    );
    write_file(file2);

    let file3 = FileSpec::new(
        repository_dir.path().join("a").join("b").join("3.txt"),
        "three".to_string(),
    );
    write_file(file3);

    run_vcs_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();

    vcs_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success();

    repository_dir
}

pub fn run_vcs_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("vcs").expect("Failed to find vcs binary");
    cmd.envs(vec![("NO_COLOR", "1")]);
    cmd.env_remove("VCS_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn vcs_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_vcs_command(dir, &["commit", "-m", message]);
    cmd.envs(vec![
        ("VCS_AUTHOR_NAME", FAKE_AUTHOR),
        ("VCS_AUTHOR_DATE", FAKE_DATE), // %Y-%m-%d %H:%M:%S
    ]);
    cmd
}

/// Hash printed by `commit` as `[branch hash] message`
pub fn committed_short_oid(output: &[u8]) -> String {
    let stdout = String::from_utf8_lossy(output);
    stdout
        .split_whitespace()
        .nth(1)
        .map(|oid| oid.trim_end_matches(']').to_string())
        .expect("commit output carries the short oid")
}

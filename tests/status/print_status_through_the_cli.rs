use crate::common::command::{init_repository_dir, run_vcs_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn print_long_status(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let root = init_repository_dir.path();
    run_vcs_command(root, &["branch", "create", "feature"])
        .assert()
        .success();
    write_file(FileSpec::new(root.join("new.txt"), "new".to_string()));
    run_vcs_command(root, &["add", "new.txt"]).assert().success();
    run_vcs_command(root, &["rm", "1.txt"]).assert().success();
    write_file(FileSpec::new(root.join("a").join("2.txt"), "changed".to_string()));
    std::fs::remove_file(root.join("a").join("b").join("3.txt"))?;
    write_file(FileSpec::new(root.join("loose.txt"), "loose".to_string()));

    let output = run_vcs_command(root, &["status"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let expected = "=== Branches ===\n\
                    *master\n\
                    feature\n\
                    === Staged Files ===\n\
                    new.txt\n\
                    === Removed Files ===\n\
                    1.txt\n\
                    === Modified Files ===\n\
                    a/2.txt (modified)\n\
                    a/b/3.txt (deleted)\n\
                    === Untracked Files ===\n\
                    loose.txt\n";
    assert_eq!(String::from_utf8(output)?, expected);

    Ok(())
}

#[rstest]
fn print_short_status(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let root = init_repository_dir.path();
    write_file(FileSpec::new(root.join("new.txt"), "new".to_string()));
    run_vcs_command(root, &["add", "new.txt"]).assert().success();
    write_file(FileSpec::new(root.join("1.txt"), "uno".to_string()));
    write_file(FileSpec::new(root.join("loose.txt"), "loose".to_string()));

    let output = run_vcs_command(root, &["status", "--short"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(
        String::from_utf8(output)?,
        "A  new.txt\n M 1.txt\n?? loose.txt\n"
    );

    Ok(())
}

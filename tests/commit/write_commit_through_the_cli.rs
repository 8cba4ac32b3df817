use crate::common::command::{repository_dir, run_vcs_command, vcs_commit};
use crate::common::file::write_generated_files;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn write_commit_through_the_cli(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_vcs_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_generated_files(repository_dir.path(), 3);

    run_vcs_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();

    vcs_commit(repository_dir.path(), "Initial commit\n\nWith a body")
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^\[master [0-9a-f]{7}\] Initial commit\n$",
        )?);

    vcs_commit(repository_dir.path(), "Nothing staged")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No changes added to commit"));

    Ok(())
}

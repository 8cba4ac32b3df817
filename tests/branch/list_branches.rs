use crate::common::command::{init_repository_dir, run_vcs_command};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn list_branches(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    for name in ["zeta", "alpha"] {
        run_vcs_command(init_repository_dir.path(), &["branch", "create", name])
            .assert()
            .success();
    }

    let output = run_vcs_command(init_repository_dir.path(), &["branch", "list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(String::from_utf8(output)?, "  alpha\n* master\n  zeta\n");

    Ok(())
}

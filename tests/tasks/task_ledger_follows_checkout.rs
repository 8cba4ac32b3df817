use crate::common::command::{init_repository_dir, run_vcs_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::repository::{commit_files, repository, write};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use predicates::prelude::predicate;
use rstest::rstest;
use std::collections::BTreeSet;
use vcs::Repository;

fn tasks(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[rstest]
fn task_ledger_follows_checkout(
    repository: (TempDir, Repository),
) -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, mut repository) = repository;
    commit_files(&mut repository, &[("a.txt", "a")], "Base");
    repository.branch("feature")?;

    write(&repository, "a.txt", "master work");
    repository.add("a.txt")?;
    repository.commit("Master task", "User", &[], &["on-master"])?;

    repository.checkout_branch("feature")?;
    assert!(repository.tasks().active()?.is_empty());

    write(&repository, "a.txt", "feature work");
    repository.add("a.txt")?;
    repository.commit("Feature task", "User", &[], &["on-feature"])?;
    assert_eq!(repository.tasks().active()?, tasks(&["on-feature"]));

    repository.checkout_branch("master")?;
    assert_eq!(repository.tasks().active()?, tasks(&["on-master"]));

    Ok(())
}

#[rstest]
fn reset_restores_the_task_snapshot(
    repository: (TempDir, Repository),
) -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, mut repository) = repository;
    let before = commit_files(&mut repository, &[("a.txt", "a")], "Base");
    write(&repository, "a.txt", "b");
    repository.add("a.txt")?;
    repository.commit("Open", "User", &[], &["temporary"])?;

    repository.reset_to(&before.oid().to_string())?;

    assert!(repository.tasks().active()?.is_empty());

    Ok(())
}

#[rstest]
fn open_and_close_tasks_through_the_cli(init_repository_dir: TempDir) {
    let root = init_repository_dir.path();
    write_file(FileSpec::new(root.join("1.txt"), "uno".to_string()));
    run_vcs_command(root, &["add", "1.txt"]).assert().success();

    run_vcs_command(
        root,
        &["commit", "-m", "Plan", "--author", "planner", "--open", "alpha", "--open", "beta"],
    )
    .assert()
    .success();
    assert!(root.join(".vcs/Tasks/alpha").is_file());

    write_file(FileSpec::new(root.join("1.txt"), "eins".to_string()));
    run_vcs_command(root, &["add", "1.txt"]).assert().success();
    run_vcs_command(root, &["commit", "-m", "Progress", "--close", "alpha"])
        .assert()
        .success();
    assert!(!root.join(".vcs/Tasks/alpha").exists());

    run_vcs_command(root, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Author: planner\nOpened Tasks:\nalpha\nbeta\nPlan\n",
        ))
        .stdout(predicate::str::contains("Closed Tasks:\nalpha\nProgress\n"));
}

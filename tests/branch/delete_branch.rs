use crate::common::repository::{commit_files, repository};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use vcs::{ErrorKind, Repository, VcsError};

#[rstest]
fn delete_branch_keeps_its_commits(
    repository: (TempDir, Repository),
) -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, mut repository) = repository;
    repository.branch("doomed")?;
    repository.checkout_branch("doomed")?;
    let orphan = commit_files(&mut repository, &[("x.txt", "x")], "On doomed");
    repository.checkout_branch("master")?;

    repository.remove_branch("doomed")?;

    let names = repository
        .branches()?
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["master"]);
    assert_eq!(repository.find_commit(orphan.oid())?, orphan);
    assert_eq!(repository.global_log()?.len(), 1);

    Ok(())
}

#[rstest]
fn delete_current_branch_fails(repository: (TempDir, Repository)) {
    let (_dir, mut repository) = repository;

    let error = repository.remove_branch("master").unwrap_err();

    assert!(matches!(error, VcsError::CannotRemoveCurrent(_)));
    assert_eq!(error.kind(), ErrorKind::InvalidState);
}

#[rstest]
fn delete_unknown_branch_fails(repository: (TempDir, Repository)) {
    let (_dir, mut repository) = repository;

    let error = repository.remove_branch("nowhere").unwrap_err();

    assert!(matches!(error, VcsError::NoSuchBranch(_)));
    assert_eq!(error.kind(), ErrorKind::NotFound);
    assert_eq!(error.to_string(), "Branch \"nowhere\" does not exist");
}

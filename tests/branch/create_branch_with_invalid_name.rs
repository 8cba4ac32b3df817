use crate::common::repository::repository;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use vcs::{ErrorKind, Repository, VcsError};

#[rstest]
#[case(".hidden")]
#[case("double..dot")]
#[case("branch.lock")]
#[case("with space")]
#[case("nested/name")]
#[case("star*")]
#[case("")]
fn create_branch_with_invalid_name(repository: (TempDir, Repository), #[case] name: &str) {
    let (_dir, mut repository) = repository;

    let error = repository.branch(name).unwrap_err();

    assert!(matches!(error, VcsError::InvalidName { .. }));
    assert_eq!(error.kind(), ErrorKind::InvalidState);
    assert_eq!(repository.branches().unwrap().len(), 1);
}

#[rstest]
#[case("feature")]
#[case("release-1.2")]
#[case("fix_42")]
#[case("UPPER")]
fn create_branch_with_valid_name(repository: (TempDir, Repository), #[case] name: &str) {
    let (_dir, mut repository) = repository;

    repository.branch(name).unwrap();

    assert!(
        repository
            .branches()
            .unwrap()
            .iter()
            .any(|branch| branch.to_string() == name)
    );
}

use crate::common::repository::{commit_files, read, repository, write};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use vcs::{ErrorKind, Repository, VcsError};

#[rstest]
fn checkout_file_restores_head_content(
    repository: (TempDir, Repository),
) -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, mut repository) = repository;
    commit_files(&mut repository, &[("poem.txt", "roses are red")], "Poem");
    write(&repository, "poem.txt", "violets are blue");
    write(&repository, "other.txt", "untouched");

    repository.checkout_file("poem.txt")?;

    assert_eq!(read(&repository, "poem.txt").as_deref(), Some("roses are red"));
    assert_eq!(read(&repository, "other.txt").as_deref(), Some("untouched"));

    Ok(())
}

#[rstest]
fn checkout_file_at_abbreviated_commit(
    repository: (TempDir, Repository),
) -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, mut repository) = repository;
    let first = commit_files(&mut repository, &[("poem.txt", "first verse")], "One");
    commit_files(&mut repository, &[("poem.txt", "second verse")], "Two");

    let abbreviated = first.oid().to_short_oid();
    repository.checkout_file_at(&abbreviated, "poem.txt")?;

    assert_eq!(read(&repository, "poem.txt").as_deref(), Some("first verse"));
    // the branch does not move
    assert_ne!(repository.head_commit().oid(), first.oid());

    Ok(())
}

#[rstest]
fn checkout_file_missing_from_commit_fails(repository: (TempDir, Repository)) {
    let (_dir, mut repository) = repository;
    commit_files(&mut repository, &[("present.txt", "here")], "One");

    let error = repository.checkout_file("absent.txt").unwrap_err();

    assert!(matches!(error, VcsError::FileNotInCommit(ref path) if path == "absent.txt"));
    assert_eq!(error.kind(), ErrorKind::NotFound);
}

#[rstest]
#[case("0000000000000000000000000000000000000000")]
#[case("abc")]
#[case("not-hex")]
fn checkout_file_at_unknown_commit_fails(
    repository: (TempDir, Repository),
    #[case] revision: &str,
) {
    let (_dir, mut repository) = repository;
    commit_files(&mut repository, &[("present.txt", "here")], "One");

    let error = repository
        .checkout_file_at(revision, "present.txt")
        .unwrap_err();

    assert!(matches!(error, VcsError::CommitNotFound(_)));
}

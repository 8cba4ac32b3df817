use crate::common::repository::{commit_files, repository, write};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::BTreeSet;
use vcs::Repository;
use vcs::artifacts::status::file_change::FileChange;

#[rstest]
fn untracked_files_are_listed_in_name_order(
    repository: (TempDir, Repository),
) -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, repository) = repository;
    write(&repository, "zebra.txt", "z");
    write(&repository, "nested/apple.txt", "a");
    write(&repository, "mango.txt", "m");

    let status = repository.status()?;

    assert_eq!(
        status.untracked().into_iter().collect::<Vec<_>>(),
        vec!["mango.txt", "nested/apple.txt", "zebra.txt"]
    );

    Ok(())
}

#[rstest]
fn removed_file_is_reported_as_removed(
    repository: (TempDir, Repository),
) -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, mut repository) = repository;
    commit_files(&mut repository, &[("old.txt", "old")], "Base");

    repository.remove("old.txt")?;
    let status = repository.status()?;

    assert_eq!(status.removed(), BTreeSet::from(["old.txt"]));
    assert_eq!(
        status.staged_changes(),
        vec![("old.txt", FileChange::Removed)]
    );

    Ok(())
}

// A file staged for removal that reappears on disk is reported as untracked,
// not as a pending removal; staging it again resolves the entry.
#[rstest]
fn file_staged_for_removal_that_reappears_is_untracked(
    repository: (TempDir, Repository),
) -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, mut repository) = repository;
    commit_files(&mut repository, &[("phoenix.txt", "ashes")], "Base");
    repository.remove("phoenix.txt")?;
    write(&repository, "phoenix.txt", "reborn");

    let status = repository.status()?;
    assert_eq!(status.change_of("phoenix.txt"), Some(FileChange::Untracked));

    repository.add("phoenix.txt")?;
    let status = repository.status()?;
    assert_eq!(status.change_of("phoenix.txt"), Some(FileChange::Staged));

    Ok(())
}

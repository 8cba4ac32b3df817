use crate::common::repository::{commit_files, exists, repository, write};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use vcs::artifacts::index::index_entry::StagedChange;
use vcs::{ErrorKind, Repository, VcsError};

#[rstest]
fn removing_a_never_added_file_fails(repository: (TempDir, Repository)) {
    let (_dir, mut repository) = repository;
    write(&repository, "loose.txt", "nobody knows me");

    let error = repository.remove("loose.txt").unwrap_err();

    assert!(matches!(error, VcsError::NothingToRemove));
    assert_eq!(error.kind(), ErrorKind::InvalidState);
    assert_eq!(error.to_string(), "No reason to remove file");
    assert!(exists(&repository, "loose.txt"));
}

#[rstest]
fn removing_a_staged_file_unstages_it_and_keeps_it_on_disk(
    repository: (TempDir, Repository),
) -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, mut repository) = repository;
    write(&repository, "draft.txt", "work in progress");
    repository.add("draft.txt")?;

    repository.remove("draft.txt")?;

    assert!(repository.index().is_empty());
    assert!(exists(&repository, "draft.txt"));

    Ok(())
}

#[rstest]
fn removing_a_tracked_file_stages_removal_and_deletes_it(
    repository: (TempDir, Repository),
) -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, mut repository) = repository;
    commit_files(
        &mut repository,
        &[("keep.txt", "keep"), ("docs/drop.txt", "drop")],
        "Two files",
    );

    repository.remove("docs/drop.txt")?;

    assert_eq!(
        repository
            .index()
            .entry_by_path("docs/drop.txt")
            .map(|entry| entry.change.clone()),
        Some(StagedChange::PendingRemoval)
    );
    assert!(!exists(&repository, "docs/drop.txt"));
    assert!(!exists(&repository, "docs"));

    let commit = repository.commit("Drop a file", "", &[], &[])?;
    let tree = repository.tree_of(&commit)?;
    assert_eq!(tree.paths().collect::<Vec<_>>(), vec!["keep.txt"]);

    Ok(())
}

#[rstest]
fn failed_deletion_leaves_the_index_untouched(repository: (TempDir, Repository)) {
    let (_dir, mut repository) = repository;
    commit_files(&mut repository, &[("tracked.txt", "tracked")], "Track");
    std::fs::remove_file(repository.path().join("tracked.txt")).unwrap();
    std::fs::create_dir(repository.path().join("tracked.txt")).unwrap();
    write(&repository, "tracked.txt/inner.txt", "in the way");

    assert!(repository.remove("tracked.txt").is_err());

    assert!(repository.index().entry_by_path("tracked.txt").is_none());
    assert!(exists(&repository, "tracked.txt/inner.txt"));
}

use crate::common::file::{FileSpec, write_file, write_generated_files};
use crate::common::repository::repository;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use vcs::Repository;

#[rstest]
fn commit_staged_files_and_chain_second_commit(
    repository: (TempDir, Repository),
) -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, mut repository) = repository;
    let files = write_generated_files(repository.path(), 5);
    for file in &files {
        repository.add(&file.path)?;
    }

    let first = repository.commit("Test Commit", "User", &[], &[])?;

    assert!(repository.index().is_empty());
    let index_on_disk = std::fs::read_to_string(repository.metadata_path().join("Index"))?;
    assert!(index_on_disk.trim().is_empty());

    let pointer = std::fs::read_to_string(repository.metadata_path().join("Branches/master"))?;
    assert_eq!(pointer.lines().count(), 1);
    assert_eq!(pointer, first.oid().to_string());
    assert_eq!(repository.tree_of(&first)?.len(), 5);
    assert_eq!(first.author(), "User");
    assert_eq!(first.branch(), "master");

    let changed = &files[2];
    write_file(FileSpec::new(
        changed.path.clone(),
        format!("{} and then some", changed.content),
    ));
    repository.add(&changed.path)?;

    let second = repository.commit("Second Commit", "User", &[], &[])?;

    let serialized = repository.database().load(second.oid())?;
    let serialized = std::str::from_utf8(&serialized)?;
    let parent_field = serialized.lines().nth(1).unwrap_or_default();
    assert_eq!(parent_field, first.oid().to_string());
    assert_ne!(second.tree_oid(), first.tree_oid());
    assert_eq!(repository.head_commit().oid(), second.oid());

    // unchanged files carry over from the parent snapshot
    let first_tree = repository.tree_of(&first)?;
    let second_tree = repository.tree_of(&second)?;
    assert_eq!(second_tree.len(), 5);
    let untouched = repository.workspace().relative_path(&files[0].path)?;
    assert_eq!(second_tree.get(&untouched), first_tree.get(&untouched));

    Ok(())
}

#[rstest]
fn commit_records_configured_author_and_timestamp(
    repository: (TempDir, Repository),
) -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, mut repository) = repository;
    write_file(FileSpec::new(repository.path().join("a.txt"), "a".to_string()));
    repository.add("a.txt")?;

    let commit = repository.commit("Defaults", "", &[], &[])?;

    assert_eq!(commit.author(), "fake_user");
    assert_eq!(commit.readable_timestamp(), "01/01/2023 12:00:00");

    Ok(())
}

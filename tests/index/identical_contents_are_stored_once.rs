use crate::common::repository::{repository, write};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use vcs::Repository;
use walkdir::WalkDir;

fn count_objects(repository: &Repository) -> usize {
    WalkDir::new(repository.database().objects_path())
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .count()
}

#[rstest]
fn identical_contents_are_stored_once(
    repository: (TempDir, Repository),
) -> Result<(), Box<dyn std::error::Error>> {
    let (_dir, mut repository) = repository;
    let before = count_objects(&repository);

    write(&repository, "left.txt", "same bytes");
    write(&repository, "nested/right.txt", "same bytes");
    repository.add("left.txt")?;
    repository.add("nested/right.txt")?;

    assert_eq!(count_objects(&repository), before + 1);

    let index = repository.index();
    let left = index.entry_by_path("left.txt").and_then(|e| e.change.oid());
    let right = index.entry_by_path("nested/right.txt").and_then(|e| e.change.oid());
    assert_eq!(left, right);

    Ok(())
}

use crate::common::command::repository_dir;
use crate::common::file::create_directory;
use crate::common::repository::fixed_config;
use assert_fs::TempDir;
use rstest::rstest;
use vcs::{ErrorKind, Repository};

#[rstest]
fn open_from_nested_directory(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let initialized = Repository::init_with_config(repository_dir.path(), fixed_config())?;
    let nested = repository_dir.path().join("src").join("deep");
    create_directory(&nested);

    let opened = Repository::open_with_config(&nested, fixed_config())?;

    assert_eq!(opened.path(), initialized.path());
    assert_eq!(opened.current_branch(), initialized.current_branch());

    Ok(())
}

#[rstest]
fn open_outside_any_repository_fails(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let error = Repository::open_with_config(repository_dir.path(), fixed_config())
        .err()
        .expect("no repository was initialized");

    assert_eq!(error.kind(), ErrorKind::NotFound);

    Ok(())
}

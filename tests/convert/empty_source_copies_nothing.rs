use crate::common::command::{cvs_repository_dir, run_rcs4cvs};
use crate::common::list_files;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn empty_source_copies_nothing(
    cvs_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = TempDir::new()?;

    run_rcs4cvs(source.path(), cvs_repository_dir.path(), &[])
        .assert()
        .success()
        .stderr(predicate::str::contains("migrated 0 files from"));

    assert!(list_files(cvs_repository_dir.path()).is_empty());
    assert_eq!(std::fs::read_dir(cvs_repository_dir.path())?.count(), 1);

    Ok(())
}

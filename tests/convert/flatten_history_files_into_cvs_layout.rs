use crate::common::command::{cvs_repository_dir, hello_history, rcs_project_dir, run_rcs4cvs};
use crate::common::list_files;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::PathBuf;

#[rstest]
fn flatten_history_files_into_cvs_layout(
    rcs_project_dir: TempDir,
    cvs_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_rcs4cvs(rcs_project_dir.path(), cvs_repository_dir.path(), &[])
        .assert()
        .success()
        .stderr(predicate::str::contains("migrated 2 files from"));

    assert_eq!(
        list_files(cvs_repository_dir.path()),
        vec![
            PathBuf::from("hello/hello.txt,v"),
            PathBuf::from("hello/sub/world.c,v"),
        ]
    );
    assert_eq!(
        std::fs::read_to_string(cvs_repository_dir.path().join("hello/hello.txt,v"))?,
        hello_history()
    );
    assert!(cvs_repository_dir.path().join("CVSROOT").is_dir());

    Ok(())
}

#[rstest]
fn history_files_directly_below_the_source_land_in_the_repository_root(
    cvs_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = TempDir::new()?;
    crate::common::file::write_file(crate::common::file::FileSpec::new(
        source.path().join("RCS").join("hello.txt,v"),
        hello_history(),
    ));

    run_rcs4cvs(source.path(), cvs_repository_dir.path(), &[])
        .assert()
        .success()
        .stderr(predicate::str::contains("migrated 1 files from"));

    assert_eq!(
        list_files(cvs_repository_dir.path()),
        vec![PathBuf::from("hello.txt,v")]
    );

    Ok(())
}

use crate::common::command::{cvs_repository_dir, run_rcs4cvs};
use crate::common::file::{FileSpec, write_file};
use crate::common::list_files;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::PathBuf;

#[rstest]
fn ignore_files_outside_rcs_directories(
    cvs_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = TempDir::new()?;
    let files = [
        ("proj/sub/RCS/b.txt,v", "b history"),
        ("proj/notes.txt", "notes"),
        ("proj/stale.txt,v", "outside of RCS"),
        ("proj/RCS/README", "no history suffix"),
        ("proj/rcs/c.txt,v", "lowercase rcs"),
        ("proj/RCS/nested/d.txt,v", "below RCS"),
        ("proj/.svn/RCS/e.txt,v", "svn metadata"),
    ];
    for (path, content) in files {
        write_file(FileSpec::new(source.path().join(path), content.to_string()));
    }

    run_rcs4cvs(source.path(), cvs_repository_dir.path(), &[])
        .assert()
        .success()
        .stderr(predicate::str::contains("migrated 1 files from"));

    assert_eq!(
        list_files(cvs_repository_dir.path()),
        vec![PathBuf::from("proj/sub/b.txt,v")]
    );
    assert_eq!(
        std::fs::read_to_string(cvs_repository_dir.path().join("proj/sub/b.txt,v"))?,
        "b history"
    );

    Ok(())
}

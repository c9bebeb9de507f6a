use crate::common::command::{cvs_repository_dir, rcs_project_dir, run_rcs4cvs};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn existing_repository_is_not_reinitialized(
    rcs_project_dir: TempDir,
    cvs_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    // the program would fail if it were run
    run_rcs4cvs(
        rcs_project_dir.path(),
        cvs_repository_dir.path(),
        &["--cvs", "rcs4cvs-no-such-cvs"],
    )
    .assert()
    .success()
    .stderr(predicate::str::contains("initialized CVS repository").not())
    .stderr(predicate::str::contains("migrated 2 files from"));

    Ok(())
}

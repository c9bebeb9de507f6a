use crate::common::command::{cvs_repository_dir, rcs_project_dir, run_rcs4cvs};
use assert_fs::TempDir;
use filetime::FileTime;
use rstest::rstest;

#[rstest]
fn source_timestamps_are_not_copied(
    rcs_project_dir: TempDir,
    cvs_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let history_file = rcs_project_dir.path().join("hello/RCS/hello.txt,v");
    let checked_in = FileTime::from_unix_time(1_278_169_789, 0);
    filetime::set_file_mtime(&history_file, checked_in)?;

    run_rcs4cvs(rcs_project_dir.path(), cvs_repository_dir.path(), &[])
        .assert()
        .success();

    let copied_metadata = std::fs::metadata(cvs_repository_dir.path().join("hello/hello.txt,v"))?;
    assert_ne!(
        FileTime::from_last_modification_time(&copied_metadata),
        checked_in
    );

    Ok(())
}

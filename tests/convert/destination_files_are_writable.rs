#![cfg(unix)]

use crate::common::command::{cvs_repository_dir, rcs_project_dir, run_rcs4cvs};
use assert_fs::TempDir;
use rstest::rstest;
use std::os::unix::fs::PermissionsExt;

#[rstest]
fn destination_files_are_writable(
    rcs_project_dir: TempDir,
    cvs_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    // ci leaves history files read-only
    for history_file in ["hello/RCS/hello.txt,v", "hello/sub/RCS/world.c,v"] {
        std::fs::set_permissions(
            rcs_project_dir.path().join(history_file),
            std::fs::Permissions::from_mode(0o444),
        )?;
    }

    run_rcs4cvs(rcs_project_dir.path(), cvs_repository_dir.path(), &[])
        .assert()
        .success();

    for copied_file in ["hello/hello.txt,v", "hello/sub/world.c,v"] {
        let permissions =
            std::fs::metadata(cvs_repository_dir.path().join(copied_file))?.permissions();
        assert!(!permissions.readonly(), "{copied_file} must stay writable");
    }

    // and a second run can overwrite them
    run_rcs4cvs(rcs_project_dir.path(), cvs_repository_dir.path(), &[])
        .assert()
        .success();

    Ok(())
}

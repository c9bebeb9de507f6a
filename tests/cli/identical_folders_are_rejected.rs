use crate::common::command::run_rcs4cvs;
use crate::common::list_files;
use assert_fs::TempDir;
use predicates::prelude::predicate;

#[test]
fn identical_folders_are_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;

    run_rcs4cvs(dir.path(), dir.path(), &[])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("must differ"));

    assert!(list_files(dir.path()).is_empty());
    assert!(!dir.path().join("CVSROOT").exists());

    Ok(())
}

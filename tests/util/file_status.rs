// Integration tests for src/util/file_status.rs.

use std::fs;

use cchf::util::{copy_mtime, is_directory, is_reg_file};
use filetime::FileTime;
use tempfile::TempDir;

#[test]
fn type_checks() {
    let dir = TempDir::new().unwrap();
    let f = dir.path().join("f");
    fs::write(&f, b"x").unwrap();
    assert!(is_reg_file(&f));
    assert!(!is_directory(&f));
    assert!(is_directory(dir.path()));
    assert!(!is_reg_file(dir.path()));
    assert!(!is_reg_file(&dir.path().join("missing")));
}

#[test]
fn mtime_is_copied() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src");
    let dst = dir.path().join("dst");
    fs::write(&src, b"a").unwrap();
    fs::write(&dst, b"b").unwrap();
    let stamp = FileTime::from_unix_time(1_234_567_890, 0);
    filetime::set_file_mtime(&src, stamp).unwrap();

    copy_mtime(&src, &dst).unwrap();
    let got = FileTime::from_last_modification_time(&fs::metadata(&dst).unwrap());
    assert_eq!(got, stamp);
}

#[test]
fn non_regular_destination_is_ignored() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src");
    fs::write(&src, b"a").unwrap();
    assert!(copy_mtime(&src, dir.path()).is_ok());
}

// Integration tests for the `cchf::io` public surface: file-to-file
// compression, decompression, test mode and multi-file processing.

use std::fs;
use std::path::Path;

use cchf::io::{
    compress_filename, compress_multiple_filenames, decompress_filename,
    decompress_multiple_filenames, DisplayLevel, Prefs, NUL_MARK,
};
use filetime::FileTime;
use tempfile::TempDir;

fn quiet() -> Prefs {
    Prefs {
        display: DisplayLevel::SILENT,
        ..Prefs::default()
    }
}

fn s(p: &Path) -> &str {
    p.to_str().unwrap()
}

#[test]
fn file_roundtrip() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("text.txt");
    let packed = dir.path().join("text.txt.cchf");
    let restored = dir.path().join("restored.txt");
    let data = "It was the best of times, it was the worst of times.\n".repeat(200);
    fs::write(&src, &data).unwrap();

    let c = compress_filename(s(&src), s(&packed), &quiet()).unwrap();
    assert_eq!(c.read, data.len() as u64);
    assert!(c.written < c.read);
    assert!(c.percent() < 100.0);

    let d = decompress_filename(s(&packed), s(&restored), &quiet()).unwrap();
    assert_eq!(d.read, c.written);
    assert_eq!(d.written, c.read);
    assert_eq!(fs::read_to_string(&restored).unwrap(), data);
}

#[test]
fn output_gets_source_mtime() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("old.txt");
    let packed = dir.path().join("old.txt.cchf");
    fs::write(&src, b"some old content").unwrap();
    let stamp = FileTime::from_unix_time(1_000_000_000, 0);
    filetime::set_file_mtime(&src, stamp).unwrap();

    compress_filename(s(&src), s(&packed), &quiet()).unwrap();
    let meta = fs::metadata(&packed).unwrap();
    assert_eq!(FileTime::from_last_modification_time(&meta), stamp);
}

#[test]
fn existing_output_needs_force() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("a.txt");
    let packed = dir.path().join("a.txt.cchf");
    fs::write(&src, b"abcabcabc").unwrap();
    fs::write(&packed, b"keep me").unwrap();

    assert!(compress_filename(s(&src), s(&packed), &quiet()).is_err());
    assert_eq!(fs::read(&packed).unwrap(), b"keep me");

    let mut prefs = quiet();
    prefs.set_overwrite(true);
    compress_filename(s(&src), s(&packed), &prefs).unwrap();
    assert_eq!(&fs::read(&packed).unwrap()[..4], b"CCHF");
}

#[test]
fn test_mode_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let packed = dir.path().join("x.cchf");
    fs::write(&packed, cchf::compress(b"verify me").unwrap()).unwrap();

    let stats = decompress_filename(s(&packed), NUL_MARK, &quiet()).unwrap();
    assert_eq!(stats.written, 9);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn many_files_in_parallel() {
    let dir = TempDir::new().unwrap();
    let names: Vec<String> = (0..12)
        .map(|i| {
            let p = dir.path().join(format!("f{i}.txt"));
            fs::write(&p, format!("file number {i} ").repeat(i + 1)).unwrap();
            p.to_str().unwrap().to_owned()
        })
        .collect();
    let srcs: Vec<&str> = names.iter().map(String::as_str).collect();

    let mut prefs = quiet();
    prefs.set_nb_workers(4);
    assert_eq!(compress_multiple_filenames(&srcs, ".cchf", &prefs), 0);

    for n in &names {
        fs::remove_file(n).unwrap();
    }
    let packed: Vec<String> = names.iter().map(|n| format!("{n}.cchf")).collect();
    let packed_refs: Vec<&str> = packed.iter().map(String::as_str).collect();
    assert_eq!(decompress_multiple_filenames(&packed_refs, ".cchf", &prefs), 0);

    for (i, n) in names.iter().enumerate() {
        assert_eq!(fs::read_to_string(n).unwrap(), format!("file number {i} ").repeat(i + 1));
    }
}

#[test]
fn failures_are_counted_not_fatal() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.cchf");
    let bad = dir.path().join("bad.cchf");
    let odd = dir.path().join("odd.bin");
    fs::write(&good, cchf::compress(b"fine").unwrap()).unwrap();
    fs::write(&bad, b"CCHF\x05").unwrap();
    fs::write(&odd, cchf::compress(b"fine").unwrap()).unwrap();

    let failed = decompress_multiple_filenames(&[s(&good), s(&bad), s(&odd)], ".cchf", &quiet());
    assert_eq!(failed, 2);
    assert_eq!(fs::read(dir.path().join("good")).unwrap(), b"fine");
    assert!(!dir.path().join("bad").exists());
}

//! E2E Test Suite 02: Binary-level CLI behaviour.
//!
//! Coverage:
//! - Multiple inputs (-m) and recursive expansion (-r)
//! - Source removal (--rm) and overwrite protection (-f)
//! - Debug dump on stderr (--debug)
//! - Worker count from -T and CCHF_NBWORKERS
//! - Modification time propagation and exit codes

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::time::{Duration, SystemTime};

use filetime::FileTime;
use tempfile::TempDir;

fn cchf(dir: &Path, args: &[&str]) -> Output {
    cchf_env(dir, args, None)
}

fn cchf_env(dir: &Path, args: &[&str], nb_workers: Option<&str>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cchf"));
    cmd.args(args).current_dir(dir).stdin(Stdio::null());
    match nb_workers {
        Some(v) => cmd.env("CCHF_NBWORKERS", v),
        None => cmd.env_remove("CCHF_NBWORKERS"),
    };
    cmd.output().expect("spawn cchf")
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

/// A few files with different symbol distributions.
fn populate(dir: &Path) -> Vec<(PathBuf, Vec<u8>)> {
    let files = vec![
        (dir.join("one.txt"), b"the quick brown fox jumps over the lazy dog".to_vec()),
        (dir.join("two.txt"), b"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaab".to_vec()),
        (dir.join("three.bin"), (0..=255u8).cycle().take(4096).collect()),
    ];
    for (p, d) in &files {
        fs::write(p, d).unwrap();
    }
    files
}

// ═════════════════════════════════════════════════════════════════════════════
// Multiple inputs
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn multiple_compress_and_decompress() {
    let dir = TempDir::new().unwrap();
    let files = populate(dir.path());

    let out = cchf(dir.path(), &["-m", "-q", "one.txt", "two.txt", "three.bin"]);
    assert!(out.status.success(), "{}", stderr(&out));
    for (p, _) in &files {
        let packed = PathBuf::from(format!("{}.cchf", p.display()));
        assert!(packed.exists(), "{} missing", packed.display());
        fs::remove_file(p).unwrap();
    }

    let out = cchf(
        dir.path(),
        &["-d", "-m", "-q", "one.txt.cchf", "two.txt.cchf", "three.bin.cchf"],
    );
    assert!(out.status.success(), "{}", stderr(&out));
    for (p, d) in &files {
        assert_eq!(&fs::read(p).unwrap(), d);
    }
}

#[test]
fn one_bad_input_fails_the_run_but_not_the_others() {
    let dir = TempDir::new().unwrap();
    populate(dir.path());
    let out = cchf(dir.path(), &["-m", "one.txt", "absent.txt", "two.txt"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("absent.txt"));
    assert!(dir.path().join("one.txt.cchf").exists());
    assert!(dir.path().join("two.txt.cchf").exists());
}

#[test]
fn explicit_thread_count_and_env_fallback() {
    let dir = TempDir::new().unwrap();
    populate(dir.path());
    let names = ["-m", "-q", "-f", "one.txt", "two.txt", "three.bin"];

    let mut args = vec!["-T", "2"];
    args.extend_from_slice(&names);
    assert!(cchf(dir.path(), &args).status.success());

    assert!(cchf_env(dir.path(), &names, Some("3")).status.success());

    // A bad environment value is reported and ignored.
    let out = cchf_env(dir.path(), &["-m", "-f", "one.txt"], Some("lots"));
    assert!(out.status.success());
    assert!(stderr(&out).contains("CCHF_NBWORKERS=lots"), "{}", stderr(&out));

    let out = cchf(dir.path(), &["-T", "many", "-m", "one.txt"]);
    assert_eq!(out.status.code(), Some(1));
}

// ═════════════════════════════════════════════════════════════════════════════
// Recursive mode
// ═════════════════════════════════════════════════════════════════════════════

#[cfg(feature = "recursive")]
#[test]
fn recursive_roundtrip_with_rm() {
    let dir = TempDir::new().unwrap();
    let tree = dir.path().join("tree");
    fs::create_dir_all(tree.join("sub/deeper")).unwrap();
    fs::write(tree.join("top.txt"), b"top level file").unwrap();
    fs::write(tree.join("sub/mid.txt"), b"middle file, middle file").unwrap();
    fs::write(tree.join("sub/deeper/low.txt"), b"l").unwrap();

    let out = cchf(dir.path(), &["-r", "-q", "--rm", "tree"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert!(!tree.join("top.txt").exists());
    assert!(tree.join("sub/deeper/low.txt.cchf").exists());

    // Containers already present are skipped when compressing again.
    let out = cchf(dir.path(), &["-r", "-c", "-q", "tree"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert!(!tree.join("top.txt.cchf.cchf").exists());

    let out = cchf(dir.path(), &["-d", "-r", "-q", "--rm", "tree"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(fs::read(tree.join("sub/mid.txt")).unwrap(), b"middle file, middle file");
    assert_eq!(fs::read(tree.join("sub/deeper/low.txt")).unwrap(), b"l");
    assert!(!tree.join("top.txt.cchf").exists());
}

// ═════════════════════════════════════════════════════════════════════════════
// Overwrite, removal, metadata
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn existing_output_needs_force() {
    let dir = TempDir::new().unwrap();
    populate(dir.path());
    fs::write(dir.path().join("one.txt.cchf"), b"stale").unwrap();

    let out = cchf(dir.path(), &["one.txt"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("already exists"), "{}", stderr(&out));
    assert_eq!(fs::read(dir.path().join("one.txt.cchf")).unwrap(), b"stale");

    let out = cchf(dir.path(), &["-f", "one.txt"]);
    assert!(out.status.success());
    assert_eq!(&fs::read(dir.path().join("one.txt.cchf")).unwrap()[..4], b"CCHF");
}

#[test]
fn keep_overrides_rm() {
    let dir = TempDir::new().unwrap();
    populate(dir.path());
    let out = cchf(dir.path(), &["--rm", "-k", "one.txt"]);
    assert!(out.status.success());
    assert!(dir.path().join("one.txt").exists());

    let out = cchf(dir.path(), &["-k", "--rm", "two.txt"]);
    assert!(out.status.success());
    assert!(!dir.path().join("two.txt").exists());
}

#[test]
fn output_inherits_modification_time() {
    let dir = TempDir::new().unwrap();
    populate(dir.path());
    let then = SystemTime::now() - Duration::from_secs(3 * 24 * 3600);
    let stamp = FileTime::from_system_time(then);
    filetime::set_file_mtime(dir.path().join("one.txt"), stamp).unwrap();

    assert!(cchf(dir.path(), &["-q", "one.txt"]).status.success());
    let meta = fs::metadata(dir.path().join("one.txt.cchf")).unwrap();
    assert_eq!(FileTime::from_last_modification_time(&meta).unix_seconds(), stamp.unix_seconds());
}

// ═════════════════════════════════════════════════════════════════════════════
// Debug dump
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn debug_dump_goes_to_stderr() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("s.txt"), b"aaabbcaaabbcaaabbc").unwrap();

    let out = cchf(dir.path(), &["--debug", "s.txt"]);
    assert!(out.status.success());
    let err = stderr(&out);
    for heading in [
        "[DEBUG] Frequency table",
        "[DEBUG] Huffman binary tree",
        "[DEBUG] Prefix table",
        "[DEBUG] Compression size",
    ] {
        assert!(err.contains(heading), "missing {heading} in\n{err}");
    }
    assert!(err.contains("Encoded and decoded tables match!"));
    assert!(err.contains("original size: 18"));

    let out = cchf(dir.path(), &["--debug", "-d", "s.txt.cchf", "back.txt"]);
    assert!(out.status.success());
    let err = stderr(&out);
    assert!(err.contains("[DEBUG] Header lengths"), "{err}");
    assert!(err.contains("Decompressed length: 18"), "{err}");
    assert!(err.contains("[DEBUG] Decoded Huffman binary tree"));
    assert!(out.stdout.is_empty());
}

#[test]
fn debug_dumps_of_parallel_files_do_not_interleave() {
    let dir = TempDir::new().unwrap();
    populate(dir.path());

    let out = cchf(
        dir.path(),
        &["--debug", "-m", "-T", "3", "one.txt", "two.txt", "three.bin"],
    );
    assert!(out.status.success(), "{}", stderr(&out));
    let err = stderr(&out);
    let headings: Vec<&str> = err.lines().filter(|l| l.starts_with("[DEBUG]")).collect();
    let per_file = [
        "[DEBUG] Frequency table",
        "[DEBUG] Huffman binary tree",
        "[DEBUG] Prefix table",
        "[DEBUG] Compression size",
    ];
    assert_eq!(headings.len(), 3 * per_file.len(), "{err}");
    for dump in headings.chunks(per_file.len()) {
        assert_eq!(dump, per_file, "{err}");
    }
}

#[test]
fn verbose_prints_banner() {
    let dir = TempDir::new().unwrap();
    populate(dir.path());
    let out = cchf(dir.path(), &["-v", "one.txt"]);
    assert!(out.status.success());
    assert!(stderr(&out).contains("cchf"));
    assert!(stderr(&out).contains("Compressed filename will be"));
}

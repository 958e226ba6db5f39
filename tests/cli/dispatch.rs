// Integration tests for src/main.rs: post-parse dispatch.
//
// `run()` is private to the binary, so everything here drives the compiled
// `cchf` executable through `std::process::Command`:
//   - auto mode from the `.cchf` extension
//   - default output names (append / strip `.cchf`)
//   - stdin → stdout piping
//   - test mode (-t) and list mode (-l)
//   - exit status 1 and stderr message on failure

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn cchf_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_cchf"))
}

fn setup_input(content: &[u8]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("TempDir::new");
    let input = dir.path().join("input.txt");
    fs::write(&input, content).expect("write input");
    (dir, input)
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(cchf_bin())
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .output()
        .expect("spawn cchf")
}

fn run_with_stdin(args: &[&str], input: &[u8]) -> Output {
    let mut child = Command::new(cchf_bin())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn cchf");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input)
        .expect("write stdin");
    child.wait_with_output().expect("wait cchf")
}

// ─────────────────────────────────────────────────────────────────────────────
// Auto mode and default names
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn auto_compress_then_auto_decompress() {
    let (dir, _) = setup_input(b"hello huffman");

    let out = run_in(dir.path(), &["input.txt"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let packed = dir.path().join("input.txt.cchf");
    assert_eq!(&fs::read(&packed).unwrap()[..4], b"CCHF");

    fs::remove_file(dir.path().join("input.txt")).unwrap();
    let out = run_in(dir.path(), &["input.txt.cchf"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read(dir.path().join("input.txt")).unwrap(), b"hello huffman");
}

#[test]
fn summary_line_on_stderr() {
    let (dir, _) = setup_input(&b"aaabbc".repeat(100));
    let out = run_in(dir.path(), &["input.txt"]);
    assert!(out.status.success());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("Compressed 600 bytes into"), "{err}");
    assert!(err.contains("==>"));
}

#[test]
fn quiet_suppresses_summary() {
    let (dir, _) = setup_input(b"quiet please");
    let out = run_in(dir.path(), &["-q", "input.txt"]);
    assert!(out.status.success());
    assert!(out.stderr.is_empty());
}

#[test]
fn explicit_output_name() {
    let (dir, _) = setup_input(b"explicit");
    let out = run_in(dir.path(), &["-c", "input.txt", "custom.bin"]);
    assert!(out.status.success());
    let out = run_in(dir.path(), &["-d", "custom.bin", "back.txt"]);
    assert!(out.status.success());
    assert_eq!(fs::read(dir.path().join("back.txt")).unwrap(), b"explicit");
}

#[test]
fn decompress_without_extension_needs_output_name() {
    let (dir, _) = setup_input(b"whatever");
    let out = run_in(dir.path(), &["-d", "input.txt"]);
    assert_eq!(out.status.code(), Some(1));
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.starts_with("cchf: "), "{err}");
    assert!(err.contains("unknown suffix"), "{err}");
}

// ─────────────────────────────────────────────────────────────────────────────
// Standard streams
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn stdin_to_stdout_roundtrip() {
    let data: Vec<u8> = (0..=255u8).cycle().take(5000).collect();

    let packed = run_with_stdin(&["-c"], &data);
    assert!(packed.status.success());
    assert_eq!(&packed.stdout[..4], b"CCHF");

    let restored = run_with_stdin(&["-d"], &packed.stdout);
    assert!(restored.status.success());
    assert_eq!(restored.stdout, data);
}

#[test]
fn dash_means_standard_streams() {
    let packed = run_with_stdin(&["-c", "-", "-"], b"dash dash");
    assert!(packed.status.success());
    let restored = run_with_stdin(&["-d", "-", "-"], &packed.stdout);
    assert_eq!(restored.stdout, b"dash dash");
}

#[test]
fn empty_stdin_fails() {
    let out = run_with_stdin(&["-c"], b"");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("empty"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Test and list modes
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_mode_verifies_without_output() {
    let (dir, _) = setup_input(b"integrity");
    assert!(run_in(dir.path(), &["input.txt"]).status.success());
    fs::remove_file(dir.path().join("input.txt")).unwrap();

    let out = run_in(dir.path(), &["-t", "input.txt.cchf"]);
    assert!(out.status.success());
    assert!(!dir.path().join("input.txt").exists());

    fs::write(dir.path().join("broken.cchf"), b"CCHF\0\0").unwrap();
    let out = run_in(dir.path(), &["-t", "input.txt.cchf", "broken.cchf"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn list_mode_prints_table() {
    let (dir, _) = setup_input(&b"abcd".repeat(64));
    assert!(run_in(dir.path(), &["input.txt"]).status.success());

    let out = run_in(dir.path(), &["-l", "input.txt.cchf"]);
    assert!(out.status.success());
    let text = String::from_utf8_lossy(&out.stdout);
    let mut lines = text.lines();
    assert!(lines.next().unwrap().contains("Filename"));
    let row = lines.next().unwrap();
    assert!(row.ends_with("input.txt.cchf"), "{row}");
    assert!(row.contains("256.00"));
}

#[test]
fn list_rejects_plain_file() {
    let (dir, _) = setup_input(b"plain");
    let out = run_in(dir.path(), &["-l", "input.txt"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("not recognized"));
}

#[test]
fn usage_error_exits_1() {
    let (dir, _) = setup_input(b"x");
    let out = run_in(dir.path(), &["-c", "-d", "input.txt"]);
    assert_eq!(out.status.code(), Some(1));
    let out = run_in(dir.path(), &["a", "b", "c"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn help_exits_0() {
    let (dir, _) = setup_input(b"x");
    let out = run_in(dir.path(), &["--help"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("--decompress"));
}

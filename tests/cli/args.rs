// Integration tests for src/cli/args.rs: argument resolution.

use cchf::cli::{parse_args_from, OpMode};
use cchf::io::DisplayLevel;
use clap::error::ErrorKind;

#[test]
fn long_flags() {
    let a = parse_args_from(
        ["cchf", "--decompress", "--force", "--rm", "--verbose", "in.cchf"],
        None,
    )
    .unwrap();
    assert_eq!(a.op_mode, OpMode::Decompress);
    assert!(a.prefs.overwrite);
    assert!(a.prefs.remove_src_file);
    assert_eq!(a.prefs.display, DisplayLevel(3));
}

#[test]
fn uncompress_alias() {
    let a = parse_args_from(["cchf", "--uncompress", "x.cchf"], None).unwrap();
    assert_eq!(a.op_mode, OpMode::Decompress);
}

#[test]
fn list_wins_over_decompress() {
    let a = parse_args_from(["cchf", "-d", "-l", "x.cchf"], None).unwrap();
    assert_eq!(a.op_mode, OpMode::List);
    assert!(a.multiple_inputs);
}

#[test]
fn help_and_version_are_not_usage_errors() {
    let e = parse_args_from(["cchf", "--help"], None).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::DisplayHelp);
    assert!(!e.use_stderr());
    let e = parse_args_from(["cchf", "--version"], None).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::DisplayVersion);
}

#[test]
fn unknown_flag_is_usage_error() {
    let e = parse_args_from(["cchf", "--bogus"], None).unwrap_err();
    assert_eq!(e.kind(), ErrorKind::UnknownArgument);
    assert!(e.use_stderr());
}

//! Binary entry point for the `cchf` command-line tool.
//!
//! Handles post-parse validation, recursive directory expansion, automatic
//! output filename resolution, and operation dispatch (compress, decompress,
//! test, list).
//!
//! # Control flow
//!
//! 1. [`parse_args`] processes all flags and builds a [`ParsedArgs`] value.
//! 2. [`run`] dispatches to the I/O layer and returns an exit code.

use std::io::IsTerminal;
#[cfg(feature = "recursive")]
use std::path::Path;

use anyhow::bail;

use cchf::cli::arg_utils::compressed_name;
use cchf::cli::constants::{welcome_message, COMPRESSOR_NAME};
use cchf::cli::{determine_op_mode, parse_args, OpMode, ParsedArgs};
use cchf::config::{CCHF_EXTENSION, MULTITHREAD};
use cchf::displaylevel;
use cchf::io::file_io::{is_stdin, is_stdout};
use cchf::io::{
    compress_filename, compress_multiple_filenames, decompress_filename,
    decompress_multiple_filenames, decompressed_dst, display_compressed_files_info, DisplayLevel,
    NUL_MARK, STDIN_MARK, STDOUT_MARK,
};

/// Execute the operation selected by argument parsing.
///
/// Returns the process exit code: 0 when every input succeeded, 1 otherwise.
fn run(args: ParsedArgs) -> i32 {
    let display = args.prefs.display;
    match dispatch(args) {
        Ok(0) => 0,
        Ok(_) => 1,
        Err(e) => {
            displaylevel!(display, 1, "{}: {:#}\n", COMPRESSOR_NAME, e);
            1
        }
    }
}

/// Returns the number of inputs that failed. Errors that stop the whole
/// invocation come back as `Err`.
fn dispatch(args: ParsedArgs) -> anyhow::Result<usize> {
    let ParsedArgs {
        mut prefs,
        mut op_mode,
        multiple_inputs,
        recursive,
        input_filename,
        output_filename,
        in_file_names,
    } = args;

    displaylevel!(prefs.display, 3, "{}", welcome_message());
    if !MULTITHREAD && prefs.nb_workers > 1 {
        displaylevel!(
            prefs.display,
            2,
            "warning: this executable doesn't support multithreading \n"
        );
    }

    // ── Multiple inputs ──────────────────────────────────────────────────────
    if multiple_inputs {
        let mut names = in_file_names;
        if op_mode == OpMode::Auto {
            op_mode = names
                .first()
                .map_or(OpMode::Compress, |first| determine_op_mode(first));
        }
        if recursive {
            names = expand_directories(&names, op_mode, prefs.display)?;
        }
        if names.iter().any(|n| is_stdin(n)) && std::io::stdin().is_terminal() {
            bail!("refusing to read from a console");
        }
        let srcs: Vec<&str> = names.iter().map(String::as_str).collect();

        return match op_mode {
            OpMode::List => display_compressed_files_info(&srcs, &prefs).map(|()| 0),
            OpMode::Test => Ok(decompress_multiple_filenames(&srcs, NUL_MARK, &prefs)),
            OpMode::Decompress => Ok(decompress_multiple_filenames(&srcs, CCHF_EXTENSION, &prefs)),
            OpMode::Compress | OpMode::Auto => {
                Ok(compress_multiple_filenames(&srcs, CCHF_EXTENSION, &prefs))
            }
        };
    }

    // ── Single input ─────────────────────────────────────────────────────────
    let input = input_filename.unwrap_or_else(|| STDIN_MARK.to_owned());
    if is_stdin(&input) && std::io::stdin().is_terminal() {
        bail!("refusing to read from a console");
    }
    if op_mode == OpMode::Auto {
        op_mode = if is_stdin(&input) {
            OpMode::Compress
        } else {
            determine_op_mode(&input)
        };
    }

    let output = match output_filename {
        Some(name) => name,
        None if is_stdin(&input) => STDOUT_MARK.to_owned(),
        None if op_mode == OpMode::Compress => {
            let out = compressed_name(&input);
            displaylevel!(prefs.display, 3, "Compressed filename will be : {} \n", out);
            out
        }
        None => decompressed_dst(&input, CCHF_EXTENSION)?,
    };

    if is_stdout(&output) {
        if op_mode == OpMode::Compress && std::io::stdout().is_terminal() && !prefs.overwrite {
            bail!("refusing to write compressed data to a console without -f");
        }
        // Keep pipelines quiet unless more was asked for.
        if prefs.display == DisplayLevel::default() {
            prefs.display = DisplayLevel(1);
        }
    }

    match op_mode {
        OpMode::Decompress => decompress_filename(&input, &output, &prefs).map(|_| 0),
        _ => compress_filename(&input, &output, &prefs).map(|_| 0),
    }
}

/// Replace directories among `names` with the regular files beneath them.
#[cfg(feature = "recursive")]
fn expand_directories(
    names: &[String],
    op_mode: OpMode,
    display: DisplayLevel,
) -> anyhow::Result<Vec<String>> {
    let paths: Vec<&Path> = names.iter().map(Path::new).collect();
    // Existing containers are not compressed a second time.
    let skip = matches!(op_mode, OpMode::Compress).then_some(CCHF_EXTENSION);
    let list = cchf::util::create_file_list(&paths, skip)?;
    for (u, p) in list.iter().enumerate() {
        displaylevel!(display, 4, "{} {}\n", u, p.display());
    }
    Ok(list
        .into_iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect())
}

#[cfg(not(feature = "recursive"))]
fn expand_directories(
    names: &[String],
    _op_mode: OpMode,
    display: DisplayLevel,
) -> anyhow::Result<Vec<String>> {
    displaylevel!(
        display,
        2,
        "warning: this executable doesn't support recursive directory traversal \n"
    );
    Ok(names.to_vec())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };
    std::process::exit(run(args));
}

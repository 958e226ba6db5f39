//! File-level decompression and integrity testing.

use std::io;

use anyhow::{bail, Context};

use crate::displaylevel;
use crate::frame::decompress_with;
use crate::io::file_io::{is_dev_null, is_stdin, is_stdout, read_src, write_dst, NUL_MARK};
use crate::io::prefs::Prefs;
use crate::io::{for_each_file, preserve_mtime, remove_source, report, traced, FileStats};

/// Decompress the container in `src` into `dst`.
///
/// With `dst` set to [`NUL_MARK`] the container is fully decoded and
/// verified but nothing is written (`-t`).
pub fn decompress_filename(src: &str, dst: &str, prefs: &Prefs) -> anyhow::Result<FileStats> {
    let input = read_src(src)?;

    let decoded = traced(prefs.display, io::stderr(), |trace| decompress_with(&input, trace))
        .with_context(|| format!("{src}: decoding error"))?;

    write_dst(dst, &decoded, prefs)?;

    let testing = is_dev_null(dst);
    if !testing && !is_stdin(src) && !is_stdout(dst) {
        preserve_mtime(src, dst, prefs.display);
    }
    if prefs.remove_src_file && !testing && !is_stdin(src) {
        remove_source(src)?;
    }

    let stats = FileStats {
        read: input.len() as u64,
        written: decoded.len() as u64,
    };
    if testing {
        displaylevel!(prefs.display, 2, "{:<20} : OK ({} bytes)\n", src, stats.written);
    } else {
        displaylevel!(
            prefs.display,
            2,
            "{:<20} : decoded {} bytes\n",
            src,
            stats.written
        );
    }
    Ok(stats)
}

/// Output name for `src` when decompressing with `suffix`: the suffix is
/// stripped, or [`NUL_MARK`] passes through unchanged for `-t`.
pub fn decompressed_dst(src: &str, suffix: &str) -> anyhow::Result<String> {
    if suffix == NUL_MARK {
        return Ok(suffix.to_owned());
    }
    match src.strip_suffix(suffix) {
        Some(stem) if !stem.is_empty() => Ok(stem.to_owned()),
        _ => bail!("{src}: unknown suffix ({suffix} expected), cannot derive output name"),
    }
}

/// Decompress every name in `srcs`.
///
/// `suffix` is stripped from each name to form the output, or is
/// [`NUL_MARK`] to verify without writing. Returns the number of files that
/// failed.
pub fn decompress_multiple_filenames(srcs: &[&str], suffix: &str, prefs: &Prefs) -> usize {
    let job = |src: &str| -> anyhow::Result<FileStats> {
        let dst = decompressed_dst(src, suffix)?;
        decompress_filename(src, &dst, prefs)
    };
    for_each_file(srcs, prefs, |src| report(job(src), prefs).is_none())
}

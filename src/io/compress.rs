//! File-level compression: one input path to one `.cchf` container.
//!
//! [`compress_filename`] handles a single source/destination pair.
//! [`compress_multiple_filenames`] fans a list of sources out over a rayon
//! pool; each file is an independent job with its own buffers.

use std::io;

use anyhow::Context;

use crate::displaylevel;
use crate::frame::compress_with;
use crate::io::file_io::{is_stdin, is_stdout, read_src, write_dst};
use crate::io::prefs::Prefs;
use crate::io::{for_each_file, preserve_mtime, remove_source, report, traced, FileStats};

/// Compress `src` into `dst`.
///
/// Either name may be a standard-stream sentinel. On success the source
/// mtime is copied to a regular-file destination and, with
/// `prefs.remove_src_file`, the source is deleted.
pub fn compress_filename(src: &str, dst: &str, prefs: &Prefs) -> anyhow::Result<FileStats> {
    let input = read_src(src)?;

    let compressed = traced(prefs.display, io::stderr(), |trace| compress_with(&input, trace))
        .with_context(|| format!("{src}: compression failed"))?;

    write_dst(dst, &compressed, prefs)?;

    if !is_stdin(src) && !is_stdout(dst) {
        preserve_mtime(src, dst, prefs.display);
    }
    if prefs.remove_src_file && !is_stdin(src) {
        remove_source(src)?;
    }

    let stats = FileStats {
        read: input.len() as u64,
        written: compressed.len() as u64,
    };
    displaylevel!(
        prefs.display,
        2,
        "{:<20} : Compressed {} bytes into {} bytes ==> {:.2}%\n",
        src,
        stats.read,
        stats.written,
        stats.percent()
    );
    Ok(stats)
}

/// Compress every name in `srcs` to `<src><suffix>`.
///
/// Failures are reported at display level 1 and do not stop the other
/// files. Returns the number of files that failed.
pub fn compress_multiple_filenames(srcs: &[&str], suffix: &str, prefs: &Prefs) -> usize {
    for_each_file(srcs, prefs, |src| {
        report(compress_filename(src, &format!("{src}{suffix}"), prefs), prefs).is_none()
    })
}

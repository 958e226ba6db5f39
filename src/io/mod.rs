//! File I/O layer used by the CLI.
//!
//! The codec in [`crate::frame`] works on whole buffers; this module maps
//! paths and standard streams onto it, applies the [`Prefs`] policies
//! (overwrite, source removal, worker count) and reports results on stderr.

pub mod compress;
pub mod decompress;
pub mod file_info;
pub mod file_io;
pub mod prefs;
pub mod trace_dump;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use rayon::prelude::*;

use crate::cli::constants::COMPRESSOR_NAME;
use crate::config::DISPLAY_LEVEL_DEBUG;
use crate::displaylevel;
use crate::trace::{NoTrace, Trace};
use crate::util::copy_mtime;

// ── Re-exports ────────────────────────────────────────────────────────────────
pub use compress::{compress_filename, compress_multiple_filenames};
pub use decompress::{decompress_filename, decompress_multiple_filenames, decompressed_dst};
pub use file_info::{display_compressed_files_info, CompressedFileInfo};
pub use file_io::{DASH_MARK, NUL_MARK, STDIN_MARK, STDOUT_MARK};
pub use prefs::{DisplayLevel, Prefs};
pub use trace_dump::TraceDump;

/// Byte counts for one processed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStats {
    pub read: u64,
    pub written: u64,
}

impl FileStats {
    /// Written size as a percentage of read size; 0.0 when nothing was read.
    pub fn percent(&self) -> f64 {
        if self.read == 0 {
            0.0
        } else {
            self.written as f64 / self.read as f64 * 100.0
        }
    }
}

// ── Shared helpers ────────────────────────────────────────────────────────────

/// Run `failed` over every source on a pool of `prefs.effective_workers()`
/// threads and return how many calls reported failure.
///
/// Falls back to the calling thread when one worker is requested or the
/// pool cannot be built.
pub(crate) fn for_each_file<F>(srcs: &[&str], prefs: &Prefs, failed: F) -> usize
where
    F: Fn(&str) -> bool + Sync,
{
    let workers = prefs.effective_workers().min(srcs.len()).max(1);
    if workers > 1 {
        if let Ok(pool) = rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
            return pool.install(|| srcs.par_iter().filter(|&&src| failed(src)).count());
        }
    }
    srcs.iter().filter(|&&src| failed(src)).count()
}

/// Print a failed file operation at display level 1 and drop the error.
pub(crate) fn report<T>(res: anyhow::Result<T>, prefs: &Prefs) -> Option<T> {
    match res {
        Ok(v) => Some(v),
        Err(e) => {
            displaylevel!(prefs.display, 1, "{}: {:#}\n", COMPRESSOR_NAME, e);
            None
        }
    }
}

/// Run `codec` with a [`TraceDump`] when `display` is at debug level, else
/// with [`NoTrace`].
///
/// The dump is collected in memory and handed to `sink` in a single write
/// once `codec` returns, so dumps of files processed on different workers
/// stay in one piece.
pub(crate) fn traced<T, W, F>(display: DisplayLevel, mut sink: W, codec: F) -> T
where
    W: Write,
    F: FnOnce(&mut dyn Trace) -> T,
{
    if !display.enabled(DISPLAY_LEVEL_DEBUG) {
        return codec(&mut NoTrace);
    }
    let mut dump = TraceDump::new(Vec::new());
    let out = codec(&mut dump);
    let _ = sink.write_all(&dump.into_inner());
    out
}

/// Copy the source mtime onto a finished output.
///
/// The output is already complete, so a failure here is a warning and the
/// file still counts as processed. Returns `false` when the copy failed.
pub(crate) fn preserve_mtime(src: &str, dst: &str, display: DisplayLevel) -> bool {
    warn_on_mtime_error(copy_mtime(Path::new(src), Path::new(dst)), dst, display)
}

fn warn_on_mtime_error(res: io::Result<()>, dst: &str, display: DisplayLevel) -> bool {
    match res {
        Ok(()) => true,
        Err(e) => {
            displaylevel!(
                display,
                2,
                "{}: warning: {}: cannot copy modification time: {}\n",
                COMPRESSOR_NAME,
                dst,
                e
            );
            false
        }
    }
}

pub(crate) fn remove_source(src: &str) -> anyhow::Result<()> {
    fs::remove_file(src).with_context(|| format!("{src}: cannot remove source file"))
}

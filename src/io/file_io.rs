//! Whole-file read and write primitives.
//!
//! - [`read_src`] loads an input path (or standard input) into memory.
//! - [`write_dst`] stores a finished buffer at an output path (or standard
//!   output, or nowhere), honouring the overwrite policy from [`Prefs`] and
//!   removing the file again if the write fails half-way.
//!
//! The codec works on complete buffers, so output is only opened once the
//! compressed or decompressed bytes exist.

use std::fs::{self, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{bail, Context};

use crate::io::prefs::Prefs;
use crate::util::is_directory;

// ---------------------------------------------------------------------------
// Sentinel strings
// ---------------------------------------------------------------------------

/// Sentinel: read from standard input.
pub const STDIN_MARK: &str = "stdin";

/// Sentinel: write to standard output.
pub const STDOUT_MARK: &str = "stdout";

/// Short form accepted for both standard streams.
pub const DASH_MARK: &str = "-";

/// Sentinel: discard output (test mode).
#[cfg(windows)]
pub const NUL_MARK: &str = "nul";
#[cfg(not(windows))]
pub const NUL_MARK: &str = "/dev/null";

#[inline]
pub fn is_stdin(name: &str) -> bool {
    name == STDIN_MARK || name == DASH_MARK
}

#[inline]
pub fn is_stdout(name: &str) -> bool {
    name == STDOUT_MARK || name == DASH_MARK
}

#[inline]
pub fn is_dev_null(name: &str) -> bool {
    name == NUL_MARK
}

// ---------------------------------------------------------------------------
// Read / write
// ---------------------------------------------------------------------------

/// Read all of `name`, or all of standard input for the stdin sentinels.
pub fn read_src(name: &str) -> anyhow::Result<Vec<u8>> {
    if is_stdin(name) {
        let mut buf = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .context("reading standard input")?;
        return Ok(buf);
    }
    let path = Path::new(name);
    if is_directory(path) {
        bail!("{name} is a directory -- ignored");
    }
    fs::read(path).with_context(|| format!("{name}: cannot read"))
}

/// Write `data` to `name`.
///
/// Existing files are only replaced when `prefs.overwrite` is set. If writing
/// fails after the file was created, the partial file is removed before the
/// error is returned.
pub fn write_dst(name: &str, data: &[u8], prefs: &Prefs) -> anyhow::Result<()> {
    if is_dev_null(name) {
        return Ok(());
    }
    if is_stdout(name) {
        let mut out = io::stdout().lock();
        out.write_all(data)
            .and_then(|()| out.flush())
            .context("writing standard output")?;
        return Ok(());
    }

    let path = Path::new(name);
    let mut options = OpenOptions::new();
    options.write(true);
    if prefs.overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    let mut file = match options.open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            bail!("{name} already exists; not overwritten (use -f)")
        }
        Err(e) => return Err(e).with_context(|| format!("{name}: cannot create")),
    };

    if let Err(e) = file.write_all(data).and_then(|()| file.sync_all()) {
        drop(file);
        let _ = fs::remove_file(path);
        return Err(e).with_context(|| format!("{name}: write failed"));
    }
    Ok(())
}

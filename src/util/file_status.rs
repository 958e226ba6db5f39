//! File type checks and timestamp propagation.

use std::fs;
use std::io;
use std::path::Path;
use std::time::SystemTime;

use filetime::FileTime;

/// Give `dst` the modification time of `src`; its access time becomes now.
///
/// Only applied to regular files: for anything else (a pipe, `/dev/null`)
/// this is a no-op returning `Ok(())`.
pub fn copy_mtime(src: &Path, dst: &Path) -> io::Result<()> {
    if !is_reg_file(src) || !is_reg_file(dst) {
        return Ok(());
    }
    let mtime = FileTime::from_last_modification_time(&fs::metadata(src)?);
    let atime = FileTime::from_system_time(SystemTime::now());
    filetime::set_file_times(dst, atime, mtime)
}

/// Returns `true` if `path` refers to a regular file (following symlinks).
pub fn is_reg_file(path: &Path) -> bool {
    fs::metadata(path)
        .map(|m| m.file_type().is_file())
        .unwrap_or(false)
}

/// Returns `true` if `path` refers to a directory.
pub fn is_directory(path: &Path) -> bool {
    fs::metadata(path)
        .map(|m| m.file_type().is_dir())
        .unwrap_or(false)
}

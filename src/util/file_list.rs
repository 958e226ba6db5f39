//! Input list expansion for `-r`.
//!
//! Given a mixed list of file and directory paths, [`create_file_list`] returns
//! a flat list of regular files. Directories are walked recursively with
//! [`walkdir`], entries sorted by file name so the output order is stable.
//!
//! Symlinks are never followed during traversal (`follow_links(false)`), so a
//! cyclic link cannot loop the walk. A symlink named directly as an input is
//! forwarded as-is.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Expand `inputs` into regular files.
///
/// - Non-directory inputs are forwarded unchanged, with no existence check.
/// - Directories are walked recursively; only entries whose `file_type()` is a
///   regular file are kept.
/// - When `skip_suffix` is set, files found *inside directories* whose name
///   ends with it are left out (so `-r` compression does not re-compress
///   earlier `.cchf` outputs). Direct inputs are never filtered.
///
/// An unreadable directory entry aborts the walk with its `io::Error`.
pub fn create_file_list(inputs: &[&Path], skip_suffix: Option<&str>) -> io::Result<Vec<PathBuf>> {
    let mut result = Vec::new();
    for input in inputs {
        if !input.is_dir() {
            result.push(input.to_path_buf());
            continue;
        }
        for entry in WalkDir::new(input).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                e.io_error()
                    .map(|io| io::Error::new(io.kind(), io.to_string()))
                    .unwrap_or_else(|| io::Error::other(e.to_string()))
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let skipped = skip_suffix.is_some_and(|suffix| {
                entry.file_name().to_string_lossy().ends_with(suffix)
            });
            if !skipped {
                result.push(entry.into_path());
            }
        }
    }
    Ok(result)
}

//! `--list`: print container metadata without decoding payloads.

use anyhow::Context;

use crate::frame::{frame_info, FrameInfo};
use crate::io::file_io::read_src;
use crate::io::prefs::Prefs;

/// Metadata gathered for one listed file.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressedFileInfo {
    pub file_name: String,
    pub file_size: u64,
    pub frame: FrameInfo,
}

impl CompressedFileInfo {
    /// Read `path` and parse its container header and code table.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let bytes = read_src(path)?;
        let frame = frame_info(&bytes).with_context(|| format!("{path}: file format not recognized"))?;
        Ok(CompressedFileInfo {
            file_name: base_name(path).to_owned(),
            file_size: bytes.len() as u64,
            frame,
        })
    }

    /// One `--list` table row.
    pub fn row(&self) -> String {
        let original = u64::from(self.frame.header.original_len);
        let ratio = if original == 0 {
            format!("{:>8}", "-")
        } else {
            format!("{:>7.2}%", self.frame.ratio() * 100.0)
        };
        format!(
            "{:>11} {:>13} {} {:>7} {:>7}   {}",
            to_human(self.file_size as f64),
            to_human(original as f64),
            ratio,
            self.frame.table_entries,
            self.frame.max_code_len,
            self.file_name
        )
    }
}

/// Column titles matching [`CompressedFileInfo::row`].
pub fn header_row() -> String {
    format!(
        "{:>11} {:>13} {:>8} {:>7} {:>7}   {}",
        "Compressed", "Uncompressed", "Ratio", "Symbols", "MaxBits", "Filename"
    )
}

/// Print one row per file to stdout. At display level 3 and above each
/// file also gets its raw header fields.
///
/// Stops at the first file that is not a readable container.
pub fn display_compressed_files_info(paths: &[&str], prefs: &Prefs) -> anyhow::Result<()> {
    println!("{}", header_row());
    for (idx, &path) in paths.iter().enumerate() {
        let info = CompressedFileInfo::load(path)?;
        println!("{}", info.row());
        if prefs.display.enabled(3) {
            let h = &info.frame.header;
            println!(
                "    ({}/{}) original:{} table:{} payload:{}",
                idx + 1,
                paths.len(),
                h.original_len,
                h.table_len,
                h.payload_len
            );
        }
    }
    Ok(())
}

/// Byte count with the largest applicable binary prefix, two decimals.
fn to_human(mut size: f64) -> String {
    const UNITS: &[&str] = &["", "K", "M", "G", "T"];
    let mut i = 0usize;
    while size >= 1024.0 && i + 1 < UNITS.len() {
        size /= 1024.0;
        i += 1;
    }
    format!("{:.2}{}", size, UNITS[i])
}

fn base_name(path: &str) -> &str {
    path.rfind(['/', '\\'])
        .map(|pos| &path[pos + 1..])
        .unwrap_or(path)
}

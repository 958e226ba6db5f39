// prefs.rs: file-operation preferences and the display level.
//
// The display level is a plain value carried in `Prefs` and handed to each
// operation, never a process-wide global, so independent files can be
// processed on worker threads with their own settings.

use crate::config::{DISPLAY_LEVEL_DEFAULT, MULTITHREAD, NB_WORKERS_DEFAULT, NB_WORKERS_MAX};
use crate::util::count_cores;

// ---------------------------------------------------------------------------
// Display level
// ---------------------------------------------------------------------------

/// Verbosity of stderr notifications.
///
/// 0 = silent, 1 = errors only, 2 = per-file results, 3 = info,
/// 4+ = debug dumps of codec internals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DisplayLevel(pub u32);

impl DisplayLevel {
    pub const SILENT: DisplayLevel = DisplayLevel(0);

    /// `true` when messages of `level` should be shown.
    #[inline]
    pub fn enabled(self, level: u32) -> bool {
        self.0 >= level
    }

    /// Apply `-v` / `-q` counts to a base level, saturating at 0.
    pub fn adjusted(self, up: u32, down: u32) -> Self {
        DisplayLevel(self.0.saturating_add(up).saturating_sub(down))
    }
}

impl Default for DisplayLevel {
    fn default() -> Self {
        DisplayLevel(DISPLAY_LEVEL_DEFAULT)
    }
}

// ---------------------------------------------------------------------------
// Prefs
// ---------------------------------------------------------------------------

/// Settings shared by every file operation of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefs {
    pub display: DisplayLevel,
    /// Replace existing output files instead of failing.
    pub overwrite: bool,
    /// Delete the source file after a successful operation.
    pub remove_src_file: bool,
    /// Worker threads for multiple inputs; 0 = one per logical CPU.
    pub nb_workers: usize,
}

impl Default for Prefs {
    fn default() -> Self {
        Prefs {
            display: DisplayLevel::default(),
            overwrite: false,
            remove_src_file: false,
            nb_workers: NB_WORKERS_DEFAULT,
        }
    }
}

impl Prefs {
    pub fn set_overwrite(&mut self, yes: bool) -> bool {
        self.overwrite = yes;
        self.overwrite
    }

    pub fn set_remove_src_file(&mut self, yes: bool) -> bool {
        self.remove_src_file = yes;
        self.remove_src_file
    }

    /// Set the worker count, clamped to [`NB_WORKERS_MAX`]. Returns the value
    /// stored.
    pub fn set_nb_workers(&mut self, n: usize) -> usize {
        self.nb_workers = n.min(NB_WORKERS_MAX);
        self.nb_workers
    }

    /// Worker threads actually used for multiple inputs: 1 when the
    /// `multithread` feature is off, otherwise `nb_workers` with 0 resolved to
    /// the CPU count.
    pub fn effective_workers(&self) -> usize {
        if !MULTITHREAD {
            return 1;
        }
        match self.nb_workers {
            0 => count_cores().min(NB_WORKERS_MAX),
            n => n,
        }
    }
}

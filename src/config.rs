// config.rs: Compile-time configuration constants.

// File-name suffix of compressed outputs. Also used to pick the default
// operation: inputs ending in it are decompressed.
pub const CCHF_EXTENSION: &str = ".cchf";

// Whether several inputs are processed on a worker pool.
// Enabled by the `multithread` Cargo feature (on by default).
pub const MULTITHREAD: bool = cfg!(feature = "multithread");

// Default number of worker threads; 0 = one per logical CPU.
// Can be overridden by the CCHF_NBWORKERS environment variable,
// or by the -T# command-line flag.
pub const NB_WORKERS_DEFAULT: usize = 0;

// Maximum number of worker threads selectable at runtime.
pub const NB_WORKERS_MAX: usize = 200;

// Environment variable consulted for the worker count.
pub const ENV_NBWORKERS: &str = "CCHF_NBWORKERS";

// Display level at start-up.
// 0 = silent; 1 = errors; 2 = normal; 3 = info; 4 = debug dumps.
pub const DISPLAY_LEVEL_DEFAULT: u32 = 2;

// Display level selected by --debug.
pub const DISPLAY_LEVEL_DEBUG: u32 = 4;

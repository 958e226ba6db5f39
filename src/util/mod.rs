//! Filesystem and platform helpers used by the I/O layer.
//!
//! - [`cores`]      : logical CPU count (`num_cpus`)
//! - [`file_status`]: file type checks, mtime propagation (`filetime`)
//! - [`file_list`]  : recursive input expansion (`walkdir`)

pub mod cores;
pub mod file_list;
pub mod file_status;

pub use cores::count_cores;
pub use file_list::create_file_list;
pub use file_status::{copy_mtime, is_directory, is_reg_file};

//! Operation mode selection and startup defaults for the CLI.
//!
//! - [`OpMode`]: what the CLI should do with its inputs.
//! - [`determine_op_mode`]: infers compress/decompress from a filename.
//! - [`init_nb_workers_from`]: worker-count default from the environment.

use crate::cli::arg_utils::read_u32_from_str;
use crate::config::{CCHF_EXTENSION, ENV_NBWORKERS, NB_WORKERS_DEFAULT};
use crate::displaylevel;
use crate::io::DisplayLevel;

/// What the CLI should do with its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpMode {
    /// Decompress if the input ends in `.cchf`, compress otherwise.
    Auto,
    Compress,
    Decompress,
    /// Decode and verify without writing output.
    Test,
    /// Print container metadata.
    List,
}

/// Infer the operation mode from `filename`'s extension.
pub fn determine_op_mode(filename: &str) -> OpMode {
    if filename.ends_with(CCHF_EXTENSION) {
        OpMode::Decompress
    } else {
        OpMode::Compress
    }
}

/// Worker-thread default from an optional `CCHF_NBWORKERS` value.
///
/// A value that is not an unsigned integer is warned about at display level 2
/// and [`NB_WORKERS_DEFAULT`] is used.
pub fn init_nb_workers_from(env_val: Option<&str>, display: DisplayLevel) -> usize {
    if let Some(env) = env_val {
        if let Some((val, "")) = read_u32_from_str(env) {
            return val as usize;
        }
        displaylevel!(
            display,
            2,
            "Ignore environment variable setting {}={}: not a valid unsigned value \n",
            ENV_NBWORKERS,
            env
        );
    }
    NB_WORKERS_DEFAULT
}

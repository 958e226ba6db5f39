//! Command-line interface for the `cchf` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity strings and the `displaylevel!` macro. |
//! | [`arg_utils`] | Integer parsing for `-T` and `CCHF_NBWORKERS`, default output names. |
//! | [`op_mode`]   | `OpMode` and extension-based mode inference. |
//! | [`args`]      | clap-derived `Cli` and the resolved `ParsedArgs`. |
//!
//! Typical call sequence: `parse_args` → `ParsedArgs` → dispatch to [`crate::io`].

pub mod constants;
pub mod arg_utils;
pub mod op_mode;
pub mod args;

pub use args::{parse_args, parse_args_from, Cli, ParsedArgs};
pub use op_mode::{determine_op_mode, OpMode};

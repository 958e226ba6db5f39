// Integration tests for src/cli/op_mode.rs.

use cchf::cli::op_mode::init_nb_workers_from;
use cchf::cli::{determine_op_mode, OpMode};
use cchf::config::NB_WORKERS_DEFAULT;
use cchf::io::DisplayLevel;

#[test]
fn mode_follows_extension() {
    assert_eq!(determine_op_mode("photo.raw.cchf"), OpMode::Decompress);
    assert_eq!(determine_op_mode("photo.raw"), OpMode::Compress);
    assert_eq!(determine_op_mode("cchf"), OpMode::Compress);
    assert_eq!(determine_op_mode("dir/a.cchf"), OpMode::Decompress);
}

#[test]
fn worker_env_values() {
    let quiet = DisplayLevel::SILENT;
    assert_eq!(init_nb_workers_from(Some("0"), quiet), 0);
    assert_eq!(init_nb_workers_from(Some("12"), quiet), 12);
    assert_eq!(init_nb_workers_from(Some(""), quiet), NB_WORKERS_DEFAULT);
    assert_eq!(init_nb_workers_from(Some(" 3"), quiet), NB_WORKERS_DEFAULT);
}

//! Command-line argument parsing for `cchf`.
//!
//! [`Cli`] is the raw clap-derived option set. [`ParsedArgs::resolve`] turns
//! it into runtime settings: display level, [`Prefs`], operation mode and the
//! input/output names. [`parse_args`] reads `std::env::args()`;
//! [`parse_args_from`] takes an explicit list for tests.
//!
//! Usage mistakes come back as `clap::Error`, so help, version and bad-usage
//! output all share clap's formatting.

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};

use crate::cli::arg_utils::parse_worker_count;
use crate::cli::op_mode::{init_nb_workers_from, OpMode};
use crate::config::{DISPLAY_LEVEL_DEBUG, ENV_NBWORKERS};
use crate::io::{DisplayLevel, Prefs, STDIN_MARK};

/// Huffman compressor producing `.cchf` containers.
///
/// Without -c/-d the mode follows the input name: files ending in `.cchf` are
/// decompressed, everything else is compressed. `-` stands for standard input
/// or standard output.
#[derive(Debug, Clone, Parser)]
#[command(name = "cchf", version, about, long_about = None)]
pub struct Cli {
    /// Force compression
    #[arg(short = 'c', long, conflicts_with_all = ["decompress", "test", "list"])]
    pub compress: bool,

    /// Force decompression
    #[arg(short = 'd', long, visible_alias = "uncompress")]
    pub decompress: bool,

    /// Decode and verify inputs without writing anything
    #[arg(short = 't', long)]
    pub test: bool,

    /// List container information for each input
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Treat every FILE as an input
    #[arg(short = 'm', long)]
    pub multiple: bool,

    /// Walk directories (implies -m)
    #[arg(short = 'r', long)]
    pub recursive: bool,

    /// Overwrite existing output files
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Keep source files (default)
    #[arg(short = 'k', long, overrides_with = "rm")]
    pub keep: bool,

    /// Remove source files after success
    #[arg(long, overrides_with = "keep")]
    pub rm: bool,

    /// More messages (repeatable)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Fewer messages (repeatable)
    #[arg(short = 'q', long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Dump frequency table, trees, code table and sizes to stderr
    #[arg(long)]
    pub debug: bool,

    /// Worker threads for multiple inputs (0 = one per CPU)
    #[arg(short = 'T', long = "threads", value_name = "N", value_parser = parse_worker_count)]
    pub threads: Option<usize>,

    /// INPUT [OUTPUT], or every input with -m
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
}

/// Fully resolved invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    pub prefs: Prefs,
    pub op_mode: OpMode,
    /// All positional arguments are inputs; outputs are derived per file.
    pub multiple_inputs: bool,
    /// Expand directories among the inputs.
    pub recursive: bool,
    /// Single input (single-input mode only).
    pub input_filename: Option<String>,
    /// Explicit output (single-input mode only).
    pub output_filename: Option<String>,
    /// Inputs collected in multiple-input mode.
    pub in_file_names: Vec<String>,
}

impl ParsedArgs {
    /// Resolve `cli`, taking the worker default from `nb_workers_env` when
    /// `-T` is absent.
    pub fn resolve(cli: Cli, nb_workers_env: Option<&str>) -> Result<Self, clap::Error> {
        let mut display = DisplayLevel::default().adjusted(cli.verbose.into(), cli.quiet.into());
        if cli.debug {
            display = display.max(DisplayLevel(DISPLAY_LEVEL_DEBUG));
        }

        let mut prefs = Prefs {
            display,
            ..Prefs::default()
        };
        prefs.set_overwrite(cli.force);
        prefs.set_remove_src_file(cli.rm);
        let workers = match cli.threads {
            Some(n) => n,
            None => init_nb_workers_from(nb_workers_env, display),
        };
        prefs.set_nb_workers(workers);

        let op_mode = if cli.list {
            OpMode::List
        } else if cli.test {
            OpMode::Test
        } else if cli.decompress {
            OpMode::Decompress
        } else if cli.compress {
            OpMode::Compress
        } else {
            OpMode::Auto
        };

        // -l and -t never write per-input outputs, so every name is an input.
        let multiple_inputs =
            cli.multiple || cli.recursive || matches!(op_mode, OpMode::List | OpMode::Test);

        let mut files = cli.files;
        if multiple_inputs {
            if files.is_empty() {
                files.push(STDIN_MARK.to_owned());
            }
            return Ok(ParsedArgs {
                prefs,
                op_mode,
                multiple_inputs,
                recursive: cli.recursive,
                input_filename: None,
                output_filename: None,
                in_file_names: files,
            });
        }

        if files.len() > 2 {
            return Err(Cli::command().error(
                ErrorKind::TooManyValues,
                format!(
                    "too many file names ({}); use -m to process several inputs",
                    files.len()
                ),
            ));
        }
        let output_filename = if files.len() == 2 { files.pop() } else { None };
        let input_filename = files.pop();

        Ok(ParsedArgs {
            prefs,
            op_mode,
            multiple_inputs,
            recursive: false,
            input_filename,
            output_filename,
            in_file_names: Vec::new(),
        })
    }
}

/// Parse `std::env::args()`, with the worker default from `CCHF_NBWORKERS`.
pub fn parse_args() -> Result<ParsedArgs, clap::Error> {
    let cli = Cli::try_parse()?;
    let nb_workers_env = std::env::var(ENV_NBWORKERS).ok();
    ParsedArgs::resolve(cli, nb_workers_env.as_deref())
}

/// Parse an explicit argument list; `argv[0]` is the program name.
pub fn parse_args_from<I, T>(argv: I, nb_workers_env: Option<&str>) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = Cli::try_parse_from(argv)?;
    ParsedArgs::resolve(cli, nb_workers_env)
}

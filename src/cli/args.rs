//! Command-line argument parsing for the `zx0` binary.
//!
//! The entry points are [`parse_args`] (reads `std::env::args()`) and
//! [`parse_args_from`] (takes an explicit slice, suitable for unit
//! testing). Both return a [`ParsedArgs`] capturing every flag and
//! filename discovered during the parse.
//!
//! Short options may be aggregated (e.g. `-fq`). Bad or unrecognised
//! options return an `Err` with a message that begins with `"bad usage: "`.

use anyhow::anyhow;

use crate::cli::constants::{AUTHOR, COMPRESSOR_NAME};
use crate::cli::help::print_usage;
use crate::cli::op_mode::OpMode;
use crate::config::thread_count_default;

/// Complete set of options and filenames produced by the argument parsing
/// loop, consumed by the dispatch phase in `main`.
#[derive(Debug)]
pub struct ParsedArgs {
    /// Resolved operation mode (`Auto` unless `-d` was given).
    pub op_mode: OpMode,
    /// `-f`: overwrite an existing destination file without prompting.
    pub force_overwrite: bool,
    /// `-c`: classic (v1) format — forces `invertMode = false`.
    pub classic_format: bool,
    /// `-b`: backwards direction — input and output are byte-reversed by
    /// the driver around the codec call.
    pub backwards: bool,
    /// `-q`: quick mode — restrict the optimizer's offset range.
    pub quick: bool,
    /// `-pN`: optimizer worker thread count.
    pub threads: usize,
    /// Leading positional integer: bytes passed through uncompressed.
    pub skip: usize,
    /// Required input filename.
    pub input_filename: Option<String>,
    /// Optional output filename; auto-derived when absent.
    pub output_filename: Option<String>,
    /// A `--help`/`--version`/`-h`/`-V` flag was processed; the caller
    /// should exit 0 without touching the filesystem.
    pub exit_early: bool,
}

/// Parses `std::env::args()` (skipping argv[0]).
pub fn parse_args() -> anyhow::Result<ParsedArgs> {
    let exe_name = std::env::args().next().unwrap_or_default();
    let argv: Vec<String> = std::env::args().skip(1).collect();
    parse_args_from(&exe_name, &argv)
}

/// Parses an explicit argument list. `exe_name` is argv[0] (used only for
/// help text); `argv` is argv[1..].
pub fn parse_args_from(exe_name: &str, argv: &[String]) -> anyhow::Result<ParsedArgs> {
    let mut op_mode = OpMode::Auto;
    let mut force_overwrite = false;
    let mut classic_format = false;
    let mut backwards = false;
    let mut quick = false;
    let mut threads = thread_count_default();
    let mut skip: usize = 0;
    let mut skip_consumed = false;
    let mut input_filename: Option<String> = None;
    let mut output_filename: Option<String> = None;
    let mut exit_early = false;

    let mut arg_idx = 0usize;
    while arg_idx < argv.len() {
        let argument = &argv[arg_idx];

        if argument == "--help" || argument == "-h" {
            print_usage(exe_name);
            exit_early = true;
            break;
        }
        if argument == "--version" || argument == "-V" {
            print_welcome_message();
            exit_early = true;
            break;
        }

        if argument.starts_with('-') && argument.len() > 1 {
            let bytes = argument.as_bytes();
            let mut char_pos = 1usize;
            while char_pos < bytes.len() {
                match bytes[char_pos] {
                    b'f' => force_overwrite = true,
                    b'c' => classic_format = true,
                    b'b' => backwards = true,
                    b'q' => quick = true,
                    b'd' => op_mode = OpMode::Decompress,
                    b'p' => {
                        let rest = &argument[char_pos + 1..];
                        if rest.is_empty() {
                            return Err(anyhow!("bad usage: -p requires a numeric thread count"));
                        }
                        threads = rest
                            .parse::<usize>()
                            .map_err(|_| anyhow!("bad usage: -p requires a numeric thread count"))?;
                        char_pos = bytes.len() - 1;
                    }
                    other => {
                        return Err(anyhow!("bad usage: unrecognised option: -{}", other as char));
                    }
                }
                char_pos += 1;
            }
            arg_idx += 1;
            continue;
        }

        if !skip_consumed && input_filename.is_none() {
            if let Ok(value) = argument.parse::<usize>() {
                skip = value;
                skip_consumed = true;
                arg_idx += 1;
                continue;
            }
        }

        if input_filename.is_none() {
            input_filename = Some(argument.clone());
        } else if output_filename.is_none() {
            output_filename = Some(argument.clone());
        } else {
            return Err(anyhow!("bad usage: unexpected extra argument: {}", argument));
        }
        arg_idx += 1;
    }

    Ok(ParsedArgs {
        op_mode,
        force_overwrite,
        classic_format,
        backwards,
        quick,
        threads,
        skip,
        input_filename,
        output_filename,
        exit_early,
    })
}

fn print_welcome_message() {
    println!("{} v{}, by {}", COMPRESSOR_NAME, env!("CARGO_PKG_VERSION"), AUTHOR);
}

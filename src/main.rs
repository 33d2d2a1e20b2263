//! Binary entry point for the `zx0` command-line tool.
//!
//! Handles argument parsing, output-filename resolution and operation
//! dispatch (compress or decompress). All heap allocations are released by
//! Rust's RAII; there is no explicit cleanup path.

use zx0::cli::args::{parse_args, ParsedArgs};
use zx0::cli::constants::display_level;
use zx0::cli::op_mode::{determine_op_mode, OpMode};
use zx0::config::{OFFSET_LIMIT_FULL, OFFSET_LIMIT_QUICK};
use zx0::io::{compress_filename, decompress_filename, default_output_filename};

fn run(args: ParsedArgs) -> i32 {
    let Some(input_filename) = args.input_filename else {
        eprintln!("zx0: an input filename is required");
        return 1;
    };

    let op_mode = match args.op_mode {
        OpMode::Auto => determine_op_mode(&input_filename),
        explicit => explicit,
    };
    let decompressing = op_mode == OpMode::Decompress;

    let output_filename = match args.output_filename {
        Some(name) => name,
        None => match default_output_filename(&input_filename, decompressing) {
            Ok(name) => name,
            Err(e) => {
                eprintln!("zx0: {}", e);
                return 1;
            }
        },
    };

    let invert_mode = !args.classic_format;
    let offset_limit = if args.quick { OFFSET_LIMIT_QUICK } else { OFFSET_LIMIT_FULL };
    let verbose = display_level() >= 3;

    let result = if decompressing {
        decompress_filename(
            &input_filename,
            &output_filename,
            args.skip,
            args.backwards,
            invert_mode,
            args.force_overwrite,
        )
    } else {
        compress_filename(
            &input_filename,
            &output_filename,
            args.skip,
            offset_limit,
            args.threads,
            args.backwards,
            invert_mode,
            args.force_overwrite,
            verbose,
        )
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("zx0: {}", e);
            1
        }
    }
}

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("zx0: {}", e);
            std::process::exit(1);
        }
    };

    if args.exit_early {
        std::process::exit(0);
    }

    let exit_code = run(args);
    std::process::exit(exit_code);
}

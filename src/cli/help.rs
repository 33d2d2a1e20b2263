// cli/help.rs — usage text for the `zx0` binary.

use crate::cli::constants::{AUTHOR, COMPRESSOR_NAME};
use crate::config::ZX0_EXTENSION;

/// Print brief usage to stderr.
pub fn print_usage(program: &str) {
    eprintln!(
        "{} v{}, by {}",
        COMPRESSOR_NAME,
        env!("CARGO_PKG_VERSION"),
        AUTHOR
    );
    eprintln!();
    eprintln!("Usage : ");
    eprintln!("      {} [arg] [skip] input [output] ", program);
    eprintln!();
    eprintln!("input   : a filename ");
    eprintln!(
        "output  : defaults to input{} when compressing, or input with the \
         {} suffix stripped when decompressing",
        ZX0_EXTENSION, ZX0_EXTENSION
    );
    eprintln!(
        "skip    : optional leading integer, number of bytes copied through \
         uncompressed"
    );
    eprintln!("Arguments : ");
    eprintln!(" -d     : decompress (default for {} extension)", ZX0_EXTENSION);
    eprintln!(" -f     : overwrite output without prompting ");
    eprintln!(" -c     : classic (v1) file format ");
    eprintln!(" -b     : backwards compression ");
    eprintln!(" -q     : quick mode, restrict matches to short offsets ");
    eprintln!(" -pN    : use N optimizer threads ");
    eprintln!(" -h, --help    : display this help and exit ");
    eprintln!(" -V, --version : display version information and exit ");
}

// cli/constants.rs — identity strings and the display-level infrastructure
// the rest of the CLI prints through.

use std::sync::atomic::{AtomicU32, Ordering};

pub const COMPRESSOR_NAME: &str = "zx0";
pub const AUTHOR: &str = crate::AUTHOR;
pub const ZX0_EXTENSION: &str = crate::config::ZX0_EXTENSION;

/// Welcome banner format, substituted with name, version and author.
pub const WELCOME_MESSAGE_FMT: &str = "{} v{}, by {}\n";

// 0 = silent; 1 = errors only; 2 = normal (downgradable); 3 = verbose.
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Print to stdout unconditionally.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Print to stderr unconditionally.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Print to stderr only when the display level is at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}

/// Print a diagnostic and exit with `error` as the process exit code.
#[macro_export]
macro_rules! end_process {
    ($error:expr, $($arg:tt)*) => {{
        if $crate::cli::constants::display_level() >= 1 {
            eprint!("Error: ");
            eprint!($($arg)*);
            eprint!("\n");
        }
        std::process::exit($error as i32);
    }};
}

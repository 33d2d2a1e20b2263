//! Plain file I/O for the `zx0` CLI: read a whole source file into memory,
//! and write a destination file after enforcing the overwrite policy.
//!
//! Verbosity-gated diagnostics are emitted via stderr using the global
//! [`DISPLAY_LEVEL`] atomic from [`crate::cli::constants`].

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::cli::constants::display_level;

/// Reads the entire contents of `path` into memory.
///
/// Diagnostics are printed to stderr when [`display_level`] permits.
pub fn read_src_file(path: &str) -> io::Result<Vec<u8>> {
    fs::read(path).map_err(|e| {
        if display_level() >= 1 {
            eprintln!("{}: {}", path, e);
        }
        e
    })
}

/// Writes `data` to `path`, enforcing the overwrite policy.
///
/// - When `force` is `false` and the file already exists, the behaviour
///   depends on [`display_level`]: at level ≤ 1 the call returns an
///   [`io::ErrorKind::AlreadyExists`] error without prompting; at higher
///   levels an interactive yes/no prompt is shown on stderr.
pub fn write_dst_file(path: &str, data: &[u8], force: bool) -> io::Result<()> {
    if !force && Path::new(path).exists() {
        let level = display_level();
        if level <= 1 {
            eprintln!("{} already exists; not overwritten  ", path);
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{}: already exists; not overwritten", path),
            ));
        }
        eprint!("{} already exists; do you want to overwrite (y/N) ? ", path);
        let _ = io::stderr().flush();
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        let first = line.trim_start().chars().next().unwrap_or('\0');
        if first != 'y' && first != 'Y' {
            eprintln!("    not overwritten  ");
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{}: not overwritten", path),
            ));
        }
    }

    let mut f = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| {
            if display_level() >= 1 {
                eprintln!("{}: {}", path, e);
            }
            e
        })?;
    f.write_all(data)
}

/// Reverses the byte order of `data` in place. Used by backwards-mode
/// compression/decompression, which never touches the codec's forward
/// byte indexing and instead flips the buffer around it.
pub fn reverse_buffer(data: &mut [u8]) {
    data.reverse();
}

//! ZX0 — a Rust port of the ZX0 optimal compressor/decompressor.
//!
//! The library exposes the three core components of the format: an optimal
//! parser ([`optimizer`]), a bit-level emitter ([`emitter`]), and a
//! state-machine decoder ([`decoder`]). [`compress`] and [`decompress`] glue
//! these together with `skip`-prefix handling for whole-buffer use; the
//! `zx0` binary's [`cli`] and [`io`] modules build argument parsing and
//! filesystem access on top of them.

pub mod block;
pub mod cli;
pub mod config;
pub mod decoder;
pub mod emitter;
pub mod error;
pub mod io;
pub mod optimizer;

pub use block::Node;
pub use decoder::{decode, DecodeError};
pub use emitter::emit;
pub use error::Error;
pub use optimizer::optimize;

/// Crate version string, reported by the CLI's `-V` output.
pub const ZX0_VERSION_STRING: &str = "2.2.0";

/// Original author of the ZX0 format and reference implementation.
pub const AUTHOR: &str = "Einar Saukas";

/// Compresses `input`, passing the leading `skip` bytes through unchanged.
///
/// Returns the `skip` raw bytes followed by the compressed payload for
/// `input[skip..]`.
pub fn compress(
    input: &[u8],
    skip: usize,
    offset_limit: usize,
    threads: usize,
    backwards_mode: bool,
    invert_mode: bool,
    verbose: bool,
) -> Result<Vec<u8>, Error> {
    if skip > input.len() {
        return Err(Error::SkipTooLarge);
    }
    if skip == input.len() {
        return Err(Error::EmptyInput);
    }
    if offset_limit == 0 || threads == 0 {
        return Err(Error::InvalidParameter);
    }

    let terminal = optimizer::optimize(input, skip, offset_limit, threads, verbose);
    let (payload, _delta) = emitter::emit(&terminal, input, skip, backwards_mode, invert_mode);

    let mut out = Vec::with_capacity(skip + payload.len());
    out.extend_from_slice(&input[..skip]);
    out.extend_from_slice(&payload);
    Ok(out)
}

/// Decompresses `input`, whose leading `skip` bytes were passed through
/// unchanged by [`compress`] and are copied verbatim to the front of the
/// returned buffer.
pub fn decompress(
    input: &[u8],
    skip: usize,
    backwards_mode: bool,
    invert_mode: bool,
) -> Result<Vec<u8>, Error> {
    if skip > input.len() {
        return Err(Error::SkipTooLarge);
    }

    let decoded = decoder::decode(&input[skip..], backwards_mode, invert_mode)?;
    let mut out = Vec::with_capacity(skip + decoded.len());
    out.extend_from_slice(&input[..skip]);
    out.extend_from_slice(&decoded);
    Ok(out)
}

// error.rs — library-level error type.
//
// Core algorithmic errors are plain Copy enums, not trait-object errors:
// the optimizer and emitter have no fallible paths once their preconditions
// hold, and the decoder's only failure mode is a single malformed-input
// signal. `anyhow` is reserved for the CLI boundary (see `cli::args`), where
// errors come from the outside world (bad flags, missing files) and don't
// need to be matched on by calling code.

use std::fmt;

use crate::decoder::DecodeError;

/// Failure modes exposed by the library's public entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `skip` left nothing for the optimizer to parse.
    EmptyInput,
    /// `skip` is not smaller than the input length.
    SkipTooLarge,
    /// A caller-supplied parameter (offset limit, thread count) is out of
    /// the range the optimizer and emitter can operate on.
    InvalidParameter,
    /// The compressed stream ended early, referenced an offset before the
    /// start of the output, or was otherwise inconsistent with the format.
    MalformedCompressedInput,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::EmptyInput => "input has no bytes left to compress after skip",
            Error::SkipTooLarge => "skip is not smaller than the input length",
            Error::InvalidParameter => "offset limit or thread count is out of range",
            Error::MalformedCompressedInput => "compressed input is malformed",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for Error {}

impl From<DecodeError> for Error {
    fn from(_: DecodeError) -> Self {
        Error::MalformedCompressedInput
    }
}

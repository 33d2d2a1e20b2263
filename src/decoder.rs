//! Three-state decoder: COPY_LITERALS, COPY_FROM_LAST_OFFSET and
//! COPY_FROM_NEW_OFFSET, mirroring the emitter's bit layout exactly
//! (including its backtrack trick) so that any stream `emit` produces
//! round-trips through here.

use crate::block::INITIAL_OFFSET;
use crate::config::END_MARKER;

/// The only way decoding can fail: the stream ran out of bits, or a match
/// referenced an offset before the start of the output produced so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    MalformedInput,
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("malformed compressed input")
    }
}

impl std::error::Error for DecodeError {}

struct BitReader<'a> {
    input: &'a [u8],
    pos: usize,
    bit_mask: u8,
    cur_byte: u8,
    last_byte: u8,
    backtrack: bool,
}

impl<'a> BitReader<'a> {
    fn new(input: &'a [u8]) -> Self {
        BitReader {
            input,
            pos: 0,
            bit_mask: 0,
            cur_byte: 0,
            last_byte: 0,
            backtrack: false,
        }
    }

    fn read_byte(&mut self) -> Result<u8, DecodeError> {
        let b = *self.input.get(self.pos).ok_or(DecodeError::MalformedInput)?;
        self.pos += 1;
        self.last_byte = b;
        Ok(b)
    }

    fn set_backtrack(&mut self) {
        self.backtrack = true;
    }

    fn read_bit(&mut self) -> Result<u8, DecodeError> {
        if self.backtrack {
            self.backtrack = false;
            return Ok(self.last_byte & 1);
        }
        if self.bit_mask == 0 {
            self.cur_byte = self.read_byte()?;
            self.bit_mask = 0x80;
        }
        let bit = if self.cur_byte & self.bit_mask != 0 { 1 } else { 0 };
        self.bit_mask >>= 1;
        Ok(bit)
    }

    fn read_ieg(&mut self, msb_flag: bool, backwards_mode: bool, invert_mode: bool) -> Result<u64, DecodeError> {
        let mut value: u64 = 1;
        let continuation = if backwards_mode { 1 } else { 0 };
        loop {
            let bit = self.read_bit()?;
            if bit != continuation {
                break;
            }
            let data_bit = self.read_bit()?;
            value = (value << 1 | data_bit as u64) ^ (if msb_flag && invert_mode { 1 } else { 0 });
        }
        Ok(value)
    }
}

enum State {
    CopyLiterals,
    CopyFromLastOffset,
    CopyFromNewOffset,
}

fn copy_match(out: &mut Vec<u8>, offset: usize, len: u64) -> Result<(), DecodeError> {
    if offset == 0 || offset > out.len() {
        return Err(DecodeError::MalformedInput);
    }
    for _ in 0..len {
        let idx = out.len() - offset;
        out.push(out[idx]);
    }
    Ok(())
}

/// Decodes a ZX0 stream produced by [`crate::emitter::emit`]. `input` is
/// the compressed bytes for the non-skipped portion only; the caller is
/// responsible for re-attaching any skipped prefix.
pub fn decode(input: &[u8], backwards_mode: bool, invert_mode: bool) -> Result<Vec<u8>, DecodeError> {
    let mut r = BitReader::new(input);
    let mut out = Vec::new();
    let mut last_offset = INITIAL_OFFSET;

    // The first token is always a literal (no bytes exist yet to match
    // against), but the emitter still writes its leading indicator bit —
    // there is no preceding token to have produced it as a trailing
    // decision bit, so it must be consumed explicitly here.
    let _ = r.read_bit()?;

    let mut state = State::CopyLiterals;
    loop {
        match state {
            State::CopyLiterals => {
                let len = r.read_ieg(false, backwards_mode, invert_mode)?;
                for _ in 0..len {
                    out.push(r.read_byte()?);
                }
                state = if r.read_bit()? == 0 {
                    State::CopyFromLastOffset
                } else {
                    State::CopyFromNewOffset
                };
            }
            State::CopyFromLastOffset => {
                let len = r.read_ieg(false, backwards_mode, invert_mode)?;
                copy_match(&mut out, last_offset, len)?;
                state = if r.read_bit()? == 0 {
                    State::CopyLiterals
                } else {
                    State::CopyFromNewOffset
                };
            }
            State::CopyFromNewOffset => {
                let msb = r.read_ieg(true, backwards_mode, invert_mode)?;
                if msb == END_MARKER {
                    break;
                }
                let byte = r.read_byte()?;
                let lsb = (byte >> 1) as i64;
                let new_offset = if backwards_mode {
                    msb as i64 * 128 + lsb - 127
                } else {
                    msb as i64 * 128 - lsb
                };
                if new_offset < 1 {
                    return Err(DecodeError::MalformedInput);
                }
                last_offset = new_offset as usize;
                r.set_backtrack();
                let len = r.read_ieg(false, backwards_mode, invert_mode)? + 1;
                copy_match(&mut out, last_offset, len)?;
                state = if r.read_bit()? == 0 {
                    State::CopyLiterals
                } else {
                    State::CopyFromNewOffset
                };
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::emit;
    use crate::optimizer::optimize;

    #[test]
    fn truncated_stream_is_malformed_not_a_panic() {
        let err = decode(&[0x40], false, false).unwrap_err();
        assert_eq!(err, DecodeError::MalformedInput);
    }

    #[test]
    fn self_overlapping_run_of_zero_bytes_round_trips() {
        let input = vec![0u8; 1000];
        let terminal = optimize(&input, 0, 32640, 1, false);
        let (bytes, _delta) = emit(&terminal, &input, 0, false, false);
        let decoded = decode(&bytes, false, false).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn match_offset_past_start_of_output_is_rejected() {
        assert_eq!(
            copy_match(&mut Vec::new(), 1, 1).unwrap_err(),
            DecodeError::MalformedInput
        );
    }
}

//! End-to-end round-trip coverage across flag and thread combinations.

use zx0::{compress, decompress};

fn roundtrip(input: &[u8], skip: usize, offset_limit: usize, threads: usize, backwards: bool, invert: bool) -> Vec<u8> {
    let compressed = compress(input, skip, offset_limit, threads, backwards, invert, false).unwrap();
    decompress(&compressed, skip, backwards, invert).unwrap()
}

#[test]
fn single_byte() {
    let input = b"A";
    assert_eq!(roundtrip(input, 0, 32640, 1, false, true), input);
}

#[test]
fn short_repeating_pattern() {
    let input = b"ABABABAB";
    assert_eq!(roundtrip(input, 0, 32640, 1, false, true), input);
}

#[test]
fn all_zero_two_bytes() {
    let input = [0u8, 0u8];
    assert_eq!(roundtrip(&input, 0, 32640, 1, false, true), input);
}

#[test]
fn thousand_zero_bytes_self_overlapping_match() {
    let input = vec![0u8; 1000];
    assert_eq!(roundtrip(&input, 0, 32640, 1, false, true), input);
}

#[test]
fn pseudo_random_bytes() {
    // A fixed deterministic byte sequence, not actual randomness (Date/Math.random
    // style sources are unavailable here and would make the test non-reproducible).
    let input: Vec<u8> = (0..1024u32).map(|i| ((i * 2654435761) >> 16) as u8).collect();
    assert_eq!(roundtrip(&input, 0, 32640, 1, false, true), input);
}

#[test]
fn round_trips_across_every_flag_combination() {
    let input = b"the quick brown fox jumps over the lazy dog, repeated: the quick brown fox jumps";
    for &offset_limit in &[2176usize, 32640usize] {
        for &threads in &[1usize, 2usize, 4usize] {
            for &backwards in &[false, true] {
                for &invert in &[false, true] {
                    let out = roundtrip(input, 0, offset_limit, threads, backwards, invert);
                    assert_eq!(out, input, "offset_limit={offset_limit} threads={threads} backwards={backwards} invert={invert}");
                }
            }
        }
    }
}

#[test]
fn round_trips_with_skip_prefix() {
    let mut input = vec![0xDEu8, 0xAD, 0xBE, 0xEF];
    input.extend_from_slice(b"compress everything after the magic header please");
    assert_eq!(roundtrip(&input, 4, 32640, 1, false, true), input);
}

#[test]
fn empty_remainder_after_skip_is_rejected() {
    let input = vec![1u8, 2, 3];
    assert!(compress(&input, 3, 32640, 1, false, true, false).is_err());
}

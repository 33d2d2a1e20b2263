//! Exercises the `zx0` binary end-to-end: argv parsing, file resolution,
//! and exit codes.

use std::process::Command;

fn zx0_bin() -> &'static str {
    env!("CARGO_BIN_EXE_zx0")
}

#[test]
fn compress_then_decompress_through_the_binary() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("input.bin");
    std::fs::write(&src, b"the quick brown fox jumps over the lazy dog").unwrap();

    let status = Command::new(zx0_bin())
        .arg(src.to_str().unwrap())
        .status()
        .expect("failed to run zx0");
    assert!(status.success());

    let compressed = dir.path().join("input.bin.zx0");
    assert!(compressed.exists());

    let restored = dir.path().join("restored.bin");
    let status = Command::new(zx0_bin())
        .arg("-d")
        .arg(compressed.to_str().unwrap())
        .arg(restored.to_str().unwrap())
        .status()
        .expect("failed to run zx0 -d");
    assert!(status.success());

    assert_eq!(
        std::fs::read(&restored).unwrap(),
        b"the quick brown fox jumps over the lazy dog"
    );
}

#[test]
fn refuses_to_overwrite_without_force_flag() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("input.bin");
    let dst = dir.path().join("input.bin.zx0");
    std::fs::write(&src, b"some data to compress").unwrap();
    std::fs::write(&dst, b"pre-existing output").unwrap();

    let status = Command::new(zx0_bin())
        .arg(src.to_str().unwrap())
        .stdin(std::process::Stdio::null())
        .status()
        .expect("failed to run zx0");
    assert!(!status.success());
    assert_eq!(std::fs::read(&dst).unwrap(), b"pre-existing output");
}

#[test]
fn force_flag_overwrites_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("input.bin");
    let dst = dir.path().join("input.bin.zx0");
    std::fs::write(&src, b"some data to compress").unwrap();
    std::fs::write(&dst, b"pre-existing output").unwrap();

    let status = Command::new(zx0_bin())
        .arg("-f")
        .arg(src.to_str().unwrap())
        .status()
        .expect("failed to run zx0");
    assert!(status.success());
    assert_ne!(std::fs::read(&dst).unwrap(), b"pre-existing output");
}

#[test]
fn missing_input_filename_exits_nonzero() {
    let status = Command::new(zx0_bin()).status().expect("failed to run zx0");
    assert!(!status.success());
}

#[test]
fn help_flag_exits_zero() {
    let status = Command::new(zx0_bin())
        .arg("--help")
        .status()
        .expect("failed to run zx0");
    assert!(status.success());
}

#[test]
fn quick_and_classic_flags_round_trip_through_the_binary() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("input.bin");
    std::fs::write(&src, b"quick classic round trip payload, repeated quick classic").unwrap();

    let status = Command::new(zx0_bin())
        .arg("-q")
        .arg("-c")
        .arg(src.to_str().unwrap())
        .status()
        .expect("failed to run zx0");
    assert!(status.success());

    let compressed = dir.path().join("input.bin.zx0");
    let restored = dir.path().join("restored.bin");
    let status = Command::new(zx0_bin())
        .arg("-d")
        .arg("-c")
        .arg(compressed.to_str().unwrap())
        .arg(restored.to_str().unwrap())
        .status()
        .expect("failed to run zx0 -d");
    assert!(status.success());

    assert_eq!(
        std::fs::read(&restored).unwrap(),
        b"quick classic round trip payload, repeated quick classic"
    );
}

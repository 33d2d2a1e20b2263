//! File-level driver functions for the `zx0` CLI: read a source file,
//! run the library's [`crate::compress`]/[`crate::decompress`], and write
//! the destination file, enforcing the overwrite policy along the way.
//!
//! Backwards-mode (`-b`) byte reversal happens entirely in this module —
//! `optimizer`, `emitter` and `decoder` only ever see forward-ordered bytes
//! plus a `backwards_mode` flag that changes the Elias-gamma bit polarity.

pub mod file_io;

use anyhow::anyhow;

use crate::config::ZX0_EXTENSION;

/// Compresses `input_path` into `output_path`.
#[allow(clippy::too_many_arguments)]
pub fn compress_filename(
    input_path: &str,
    output_path: &str,
    skip: usize,
    offset_limit: usize,
    threads: usize,
    backwards_mode: bool,
    invert_mode: bool,
    force: bool,
    verbose: bool,
) -> anyhow::Result<()> {
    crate::displaylevel!(3, "reading {}\n", input_path);
    let mut input = file_io::read_src_file(input_path)?;
    if backwards_mode {
        file_io::reverse_buffer(&mut input[skip..]);
    }

    crate::displaylevel!(3, "compressing {}\n", input_path);
    let mut output = crate::compress(&input, skip, offset_limit, threads, backwards_mode, invert_mode, verbose)
        .map_err(|e| anyhow!("{}: {}", input_path, e))?;
    if backwards_mode {
        file_io::reverse_buffer(&mut output[skip..]);
    }

    crate::displaylevel!(3, "writing {}\n", output_path);
    file_io::write_dst_file(output_path, &output, force)?;

    let ratio = if input.is_empty() {
        0.0
    } else {
        100.0 * (1.0 - output.len() as f64 / input.len() as f64)
    };
    crate::displaylevel!(
        2,
        "{} : {} => {} bytes, {:.1}% compressed\n",
        input_path,
        input.len(),
        output.len(),
        ratio
    );
    Ok(())
}

/// Decompresses `input_path` into `output_path`.
pub fn decompress_filename(
    input_path: &str,
    output_path: &str,
    skip: usize,
    backwards_mode: bool,
    invert_mode: bool,
    force: bool,
) -> anyhow::Result<()> {
    crate::displaylevel!(3, "reading {}\n", input_path);
    let mut input = file_io::read_src_file(input_path)?;
    if backwards_mode {
        file_io::reverse_buffer(&mut input[skip..]);
    }

    crate::displaylevel!(3, "decompressing {}\n", input_path);
    let mut output = crate::decompress(&input, skip, backwards_mode, invert_mode)
        .map_err(|e| anyhow!("{}: {}", input_path, e))?;
    if backwards_mode {
        file_io::reverse_buffer(&mut output[skip..]);
    }

    crate::displaylevel!(3, "writing {}\n", output_path);
    file_io::write_dst_file(output_path, &output, force)?;
    Ok(())
}

/// Derives the default output filename for `input_path` under `op_mode`,
/// mirroring the classic "append/strip `.zx0`" convention.
pub fn default_output_filename(input_path: &str, decompress: bool) -> anyhow::Result<String> {
    if decompress {
        input_path
            .strip_suffix(ZX0_EXTENSION)
            .map(|s| s.to_owned())
            .ok_or_else(|| anyhow!("cannot determine an output filename for {}", input_path))
    } else {
        Ok(format!("{}{}", input_path, ZX0_EXTENSION))
    }
}

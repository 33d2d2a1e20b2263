// config.rs — compile-time configuration constants for the parser and CLI.

/// Offset ceiling used by the "quick" parsing mode (-q). Matches the
/// classic (v1) on-wire offset range.
pub const OFFSET_LIMIT_QUICK: usize = 2176;

/// Offset ceiling used by the default "full" parsing mode. This is the
/// largest offset the v2 wire format's MSB/LSB encoding can address.
pub const OFFSET_LIMIT_FULL: usize = 32640;

/// Sentinel Elias-gamma value marking the end of a compressed stream. No
/// real match ever needs an MSB this large, so it is unambiguous.
pub const END_MARKER: u64 = 256;

/// Default worker-thread count used by the optimizer when the CLI does not
/// pass an explicit `-p` value. Can be overridden by the ZX0_THREADS
/// environment variable.
pub const DEFAULT_THREADS: usize = 4;

/// Upper bound on worker threads selectable at runtime, mirroring the kind
/// of sanity ceiling compressors place on `-p`/`-T` flags.
pub const THREADS_MAX: usize = 200;

/// Extension the CLI appends to compressed output files and strips when
/// auto-deriving a decompression target name.
pub const ZX0_EXTENSION: &str = ".zx0";

/// Resolves the optimizer's default thread count: the ZX0_THREADS
/// environment variable if set to a valid positive integer, clamped to the
/// number of logical CPUs available, otherwise [`DEFAULT_THREADS`].
pub fn thread_count_default() -> usize {
    if let Ok(value) = std::env::var("ZX0_THREADS") {
        if let Ok(n) = value.parse::<usize>() {
            if n >= 1 {
                return n.min(num_cpus::get().max(1)).min(THREADS_MAX);
            }
        }
    }
    DEFAULT_THREADS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_count_default_falls_back_when_unset() {
        std::env::remove_var("ZX0_THREADS");
        assert_eq!(thread_count_default(), DEFAULT_THREADS);
    }

    #[test]
    fn thread_count_default_honors_env_override() {
        std::env::set_var("ZX0_THREADS", "2");
        assert_eq!(thread_count_default(), 2);
        std::env::remove_var("ZX0_THREADS");
    }
}

// cli module — argument parsing and dispatch for the `zx0` binary.

pub mod args;
pub mod constants;
pub mod help;
pub mod op_mode;

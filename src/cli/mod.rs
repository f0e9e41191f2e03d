//! CLI subcommand implementations for the routemap binary.

pub mod generate_cmd;
pub mod serve_cmd;

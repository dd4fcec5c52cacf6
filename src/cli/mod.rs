//! CLI subcommand implementations for the caseharvest binary.

pub mod doctor;
pub mod run_cmd;

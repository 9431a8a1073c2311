//! Subcommand handlers.

pub mod numbers;

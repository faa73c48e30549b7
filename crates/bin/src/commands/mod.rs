//! Subcommand implementations.

pub mod generate;
pub mod rank;
pub mod sort;

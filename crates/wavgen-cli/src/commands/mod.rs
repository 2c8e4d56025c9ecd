//! Command implementations for the wavgen CLI.

pub mod describe;
pub mod generate;
pub mod json_output;

//! wavgen CLI library.
//!
//! This crate provides the command-line front end: argument definitions,
//! unit parsing, logging setup and the generate/describe commands.

pub mod cli_args;
pub mod commands;
pub mod input;
pub mod logging;
pub mod units;

//! Tooling & Integration Layer
//!
//! Command-line entry points over the hashing library.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};

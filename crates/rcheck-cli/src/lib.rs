//! # rcheck-cli — Record Validation Command-Line Interface
//!
//! Thin clap front end over `rcheck-schema`.
//!
//! ## Subcommands
//!
//! - `demo` — validate the built-in contact record against the built-in
//!   contact schema and print `true` or `false`
//! - `check` — validate a record file against a schema file (JSON or YAML)
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from validation logic.
//! - Handlers return a process exit code; I/O and decoding problems are
//!   `anyhow` errors, rule violations are exit code 2.

pub mod check;
pub mod config;
pub mod demo;
pub mod document;

/// Exit code for a record that fails validation.
pub const EXIT_INVALID: u8 = 2;

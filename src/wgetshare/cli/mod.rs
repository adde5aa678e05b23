//! # CLI Layer
//!
//! This module is **one possible client** for wgetshare; the web server is
//! another. It is the only place in the crate that:
//! - Handles argument parsing
//! - Initializes logging
//! - Writes to stdout/stderr and picks exit codes
//!
//! ## Module Structure
//!
//! - `commands`: per-command handlers that call the API and print results
//! - `print`: terminal output (notices, snippets, share links)
//! - `setup`: argument parsing via clap and the version string

mod commands;
mod print;
pub mod setup;

pub use commands::run;

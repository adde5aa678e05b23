//! # wgetshare
//!
//! The binary wires the library's clients to a process:
//!
//! - `wgetshare serve` runs the HTTP server (editor, viewer and raw surfaces).
//! - `wgetshare publish | view | raw` drive the same API from a terminal.
//!
//! All behaviour lives in the library; `cli/` only parses arguments, loads
//! configuration and prints. Errors bubble up to `main`, which prints them and
//! exits non-zero.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

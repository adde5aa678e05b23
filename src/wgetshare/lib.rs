//! # Wgetshare Architecture
//!
//! Wgetshare is a **small code-sharing library**: paste a snippet, get a link
//! that renders it and a `wget` command that downloads it verbatim. The web
//! server and the `wgetshare` binary are clients of this library, not the
//! application itself.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Clients (web/, cli/ wired by main.rs)                      │
//! │  - HTTP routing + HTML pages, or argument parsing + stdout  │
//! │  - The ONLY places that know about sockets or terminals     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Facade owning the store and the default origin           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - publish, view, raw over one shared fetch step            │
//! │  - Link and download-command derivation                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore trait                                        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Surfaces
//!
//! | Surface | Path | Output |
//! |---------|------|--------|
//! | Editor | `/` + `POST /api/share` | Form, then view URL, raw URL and wget command |
//! | Viewer | `/share/{id}` | Decorated HTML page |
//! | Raw | `/raw/{id}` | The stored body as `text/plain`, byte for byte |
//!
//! A snippet is never modified after it is stored. Every id handed out is a
//! random v4 UUID.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: unit tests against `InMemoryStore`, including failure injection.
//! 2. **Store**: `FileStore` tests in a temp directory.
//! 3. **Web**: `Site::handle` is a pure function of request to response, so
//!    routes are tested without opening a socket.
//! 4. **CLI**: `tests/` drives the binary with `assert_cmd`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: publish / view / raw logic and link derivation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Snippet` and `Metadata`
//! - [`config`]: Configuration management
//! - [`web`]: HTTP routing, HTML pages and the server loop
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod web;

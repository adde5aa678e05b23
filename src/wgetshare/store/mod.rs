//! # Storage Layer
//!
//! The [`RecordStore`] trait is the only thing the surfaces know about
//! persistence: insert a snippet once, read it back by id. There is no update
//! and no delete; a snippet is write-once.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage rooted at a `code_shares/` directory.
//! - [`memory::InMemoryStore`]: For testing logic without filesystem I/O. It can
//!   be told to fail every call and counts writes, so tests can check that a
//!   rejected publish never touched the store.
//!
//! ## Storage Layout
//!
//! ```text
//! code_shares/
//! ├── share-{uuid}.txt       # snippet body, byte-for-byte
//! └── share-{uuid}.json      # {id, filename, created_at}
//! ```
//!
//! There is no shared index: each snippet owns its two files, so any number of
//! processes can publish into the same directory. The body file is the claim on
//! the id (created with `create_new`), and the metadata file appears only after
//! the body is complete. A snippet is visible once its `.json` exists.

use crate::error::Result;
use crate::model::Snippet;
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// Create-by-id / read-by-id persistence for snippets.
pub trait RecordStore {
    /// Insert a new snippet. Fails with `DuplicateId` if the id is taken.
    fn create(&mut self, snippet: &Snippet) -> Result<()>;

    /// Look up a snippet by exact id. `Ok(None)` means no such record.
    fn get_by_id(&self, id: &Uuid) -> Result<Option<Snippet>>;
}

use super::RecordStore;
use crate::error::{Result, ShareError};
use crate::model::{Metadata, Snippet};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn content_path(&self, id: &Uuid) -> PathBuf {
        self.root.join(format!("share-{}.txt", id))
    }

    fn metadata_path(&self, id: &Uuid) -> PathBuf {
        self.root.join(format!("share-{}.json", id))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShareError::Io)?;
        }
        Ok(())
    }

    /// Creates the body file, failing if it already exists.
    fn claim_content(&self, id: &Uuid, code: &str) -> Result<()> {
        let path = self.content_path(id);
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(ShareError::DuplicateId(*id))
            }
            Err(e) => return Err(ShareError::Io(e)),
        };

        if let Err(e) = file.write_all(code.as_bytes()).and_then(|_| file.sync_all()) {
            drop(file);
            let _ = fs::remove_file(&path);
            return Err(ShareError::Io(e));
        }
        Ok(())
    }

    fn write_metadata(&self, metadata: &Metadata) -> Result<()> {
        let content = serde_json::to_string_pretty(metadata).map_err(ShareError::Serialization)?;
        let tmp_path = self
            .root
            .join(format!(".share-{}-{}.tmp", metadata.id, Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(ShareError::Io)?;
        fs::rename(&tmp_path, self.metadata_path(&metadata.id)).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            ShareError::Io(e)
        })
    }
}

impl RecordStore for FileStore {
    fn create(&mut self, snippet: &Snippet) -> Result<()> {
        self.ensure_dir()?;

        let id = snippet.id();
        // 1. Body first; whoever creates it owns the id
        self.claim_content(&id, &snippet.code)?;

        // 2. Then the metadata, which makes the snippet visible
        if let Err(e) = self.write_metadata(&snippet.metadata) {
            let _ = fs::remove_file(self.content_path(&id));
            return Err(e);
        }
        Ok(())
    }

    fn get_by_id(&self, id: &Uuid) -> Result<Option<Snippet>> {
        let metadata = match fs::read_to_string(self.metadata_path(id)) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ShareError::Io(e)),
        };
        let metadata: Metadata =
            serde_json::from_str(&metadata).map_err(ShareError::Serialization)?;

        let code = match fs::read_to_string(self.content_path(id)) {
            Ok(code) => code,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ShareError::Persistence(format!(
                    "content file missing for {}",
                    id
                )))
            }
            Err(e) => return Err(ShareError::Io(e)),
        };

        Ok(Some(Snippet { metadata, code }))
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display label used when the author does not name the snippet.
pub const DEFAULT_FILENAME: &str = "shared-code";

/// The row kept in the `code_shares` table, minus the body.
///
/// Stored separately from the code so the index stays small and
/// listing ids never has to read snippet bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub id: Uuid,
    pub filename: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub metadata: Metadata,
    pub code: String,
}

impl Snippet {
    /// Builds a fresh snippet with a random v4 id.
    ///
    /// `filename` is trimmed; a blank name falls back to [`DEFAULT_FILENAME`].
    /// `code` is kept exactly as given.
    pub fn new(code: String, filename: Option<&str>) -> Self {
        Self {
            metadata: Metadata {
                id: Uuid::new_v4(),
                filename: normalize_filename(filename),
                created_at: Utc::now(),
            },
            code,
        }
    }

    pub fn id(&self) -> Uuid {
        self.metadata.id
    }

    pub fn filename(&self) -> &str {
        &self.metadata.filename
    }
}

pub fn normalize_filename(filename: Option<&str>) -> String {
    match filename.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => DEFAULT_FILENAME.to_string(),
    }
}

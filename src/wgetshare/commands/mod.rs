//! Business logic for the three surfaces.
//!
//! Everything here takes a [`RecordStore`](crate::store::RecordStore) and plain
//! Rust values and returns plain Rust values. Nothing in this layer knows about
//! HTTP, HTML or the terminal.

pub mod fetch;
pub mod links;
pub mod publish;
pub mod raw;
pub mod view;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A user-facing notice, the equivalent of a toast in the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub title: String,
    pub content: String,
}

impl CmdMessage {
    fn new(level: MessageLevel, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn info(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, title, content)
    }

    pub fn success(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, title, content)
    }

    pub fn warning(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, title, content)
    }

    pub fn error(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Error, title, content)
    }
}

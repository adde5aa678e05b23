use crate::commands::fetch::FetchOutcome;
use chrono::{DateTime, Utc};

/// Why a viewer page ended in its error card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewError {
    InvalidId,
    LoadFailed,
}

impl ViewError {
    pub fn message(&self) -> &'static str {
        match self {
            ViewError::InvalidId => "Invalid share ID",
            ViewError::LoadFailed => "Failed to load code",
        }
    }
}

pub const NOT_FOUND_MESSAGE: &str = "Code not found";

/// Viewer page state: starts at `Loading`, settles once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Loading,
    Found {
        code: String,
        filename: String,
        created_at: DateTime<Utc>,
    },
    NotFound,
    Error(ViewError),
}

impl ViewState {
    /// Commits the fetch result. Only `Loading` moves; settled states stay put.
    pub fn resolve(self, outcome: FetchOutcome) -> ViewState {
        if self.is_terminal() {
            return self;
        }
        match outcome {
            FetchOutcome::Found(snippet) => ViewState::Found {
                code: snippet.code,
                filename: snippet.metadata.filename,
                created_at: snippet.metadata.created_at,
            },
            FetchOutcome::Missing => ViewState::NotFound,
            FetchOutcome::InvalidId => ViewState::Error(ViewError::InvalidId),
            FetchOutcome::Failed(_) => ViewState::Error(ViewError::LoadFailed),
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, ViewState::Loading)
    }

    /// The message for the error card, if this state shows one.
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            ViewState::Loading | ViewState::Found { .. } => None,
            ViewState::NotFound => Some(NOT_FOUND_MESSAGE),
            ViewState::Error(reason) => Some(reason.message()),
        }
    }
}

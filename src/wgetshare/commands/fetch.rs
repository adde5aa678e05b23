//! The one lookup both read surfaces go through.
//!
//! The viewer and the raw page differ only in how they present the result,
//! so the id parsing and the store call live here and the presentation is
//! picked with [`RenderMode`].

use crate::commands::raw::RawOutcome;
use crate::commands::view::ViewState;
use crate::model::Snippet;
use crate::store::RecordStore;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Found(Snippet),
    /// The store answered, but has no such id.
    Missing,
    /// The path parameter was absent or not an id; the store was not asked.
    InvalidId,
    /// The store could not answer.
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Decorated,
    Raw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    View(ViewState),
    Raw(RawOutcome),
}

/// Accepts only the form links are minted in: lowercase, hyphenated.
/// Uppercase, simple, braced and `urn:uuid:` spellings are not ids here.
pub fn parse_id(raw_id: Option<&str>) -> Option<Uuid> {
    let raw_id = raw_id.map(str::trim).filter(|s| !s.is_empty())?;
    Uuid::try_parse(raw_id)
        .ok()
        .filter(|id| id.hyphenated().to_string() == raw_id)
}

pub fn run<S: RecordStore>(store: &S, raw_id: Option<&str>) -> FetchOutcome {
    let Some(id) = parse_id(raw_id) else {
        log::debug!("invalid share id {:?}", raw_id);
        return FetchOutcome::InvalidId;
    };

    match store.get_by_id(&id) {
        Ok(Some(snippet)) => FetchOutcome::Found(snippet),
        Ok(None) => FetchOutcome::Missing,
        Err(e) => {
            log::error!("store read failed for {}: {}", id, e);
            FetchOutcome::Failed(e.to_string())
        }
    }
}

/// Fetches once and applies the requested rendering contract.
pub fn fetch_and_render<S: RecordStore>(
    store: &S,
    raw_id: Option<&str>,
    mode: RenderMode,
) -> Rendered {
    let outcome = run(store, raw_id);
    match mode {
        RenderMode::Decorated => Rendered::View(ViewState::Loading.resolve(outcome)),
        RenderMode::Raw => Rendered::Raw(RawOutcome::from(outcome)),
    }
}

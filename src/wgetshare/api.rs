//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every client (the HTTP server and the CLI alike).
//!
//! `ShareApi<S: RecordStore>` owns the store it is handed at startup. There is
//! no process-wide store client: production wires a
//! [`FileStore`](crate::store::fs::FileStore), tests wire an
//! [`InMemoryStore`](crate::store::memory::InMemoryStore).
//!
//! The facade does not produce HTML or terminal output. It returns
//! [`PublishResult`] and [`Rendered`] and leaves presentation to the caller.

use crate::commands::fetch;
use crate::commands::links::normalize_origin;
use crate::commands::publish::{self, PublishResult};
use crate::error::Result;
use crate::store::RecordStore;

pub struct ShareApi<S: RecordStore> {
    store: S,
    origin: String,
}

impl<S: RecordStore> ShareApi<S> {
    pub fn new(store: S, origin: &str) -> Self {
        Self {
            store,
            origin: normalize_origin(origin),
        }
    }

    /// Origin used for links when the caller has no better one.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn publish(&mut self, code: String, filename: Option<&str>) -> Result<PublishResult> {
        let origin = self.origin.clone();
        self.publish_at(&origin, code, filename)
    }

    /// Publish with links rooted at `origin` instead of the configured one.
    pub fn publish_at(
        &mut self,
        origin: &str,
        code: String,
        filename: Option<&str>,
    ) -> Result<PublishResult> {
        publish::run(&mut self.store, origin, code, filename)
    }

    /// The single read path: one lookup, presented through either the
    /// viewer or the raw contract.
    pub fn render(&self, raw_id: Option<&str>, mode: RenderMode) -> Rendered {
        fetch::fetch_and_render(&self.store, raw_id, mode)
    }
}

pub use crate::commands::fetch::{RenderMode, Rendered};
pub use crate::commands::links::ShareBundle;
pub use crate::commands::publish::failure_notice;
pub use crate::commands::raw::RawOutcome;
pub use crate::commands::view::{ViewError, ViewState};
pub use crate::commands::{CmdMessage, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShareError;
    use crate::store::memory::InMemoryStore;
    use uuid::Uuid;

    fn api() -> ShareApi<InMemoryStore> {
        ShareApi::new(InMemoryStore::new(), "https://share.example/")
    }

    fn view(api: &ShareApi<InMemoryStore>, id: &str) -> ViewState {
        match api.render(Some(id), RenderMode::Decorated) {
            Rendered::View(state) => state,
            other => panic!("Expected a view, got {:?}", other),
        }
    }

    fn raw(api: &ShareApi<InMemoryStore>, id: &str) -> RawOutcome {
        match api.render(Some(id), RenderMode::Raw) {
            Rendered::Raw(outcome) => outcome,
            other => panic!("Expected raw output, got {:?}", other),
        }
    }

    #[test]
    fn test_origin_is_normalized() {
        assert_eq!(api().origin(), "https://share.example");
    }

    #[test]
    fn test_publish_uses_configured_origin() {
        let mut api = api();
        let result = api.publish("echo hi".into(), Some("hello")).unwrap();
        assert!(result
            .bundle
            .raw_url
            .starts_with("https://share.example/raw/"));
    }

    #[test]
    fn test_publish_at_overrides_origin() {
        let mut api = api();
        let result = api
            .publish_at("http://10.0.0.5:8080", "echo hi".into(), None)
            .unwrap();
        assert!(result.bundle.view_url.starts_with("http://10.0.0.5:8080/share/"));
    }

    #[test]
    fn test_round_trip_through_both_surfaces() {
        let mut api = api();
        let result = api.publish("echo hi".into(), Some("hello")).unwrap();
        let id = result.bundle.id.to_string();

        assert_eq!(raw(&api, &id).body(), "echo hi");
        match view(&api, &id) {
            ViewState::Found { code, filename, .. } => {
                assert_eq!(code, "echo hi");
                assert_eq!(filename, "hello");
            }
            other => panic!("Expected Found, got {:?}", other),
        }
    }

    #[test]
    fn test_round_trip_with_default_filename() {
        let mut api = api();
        let result = api.publish("x".into(), Some("")).unwrap();
        let id = result.bundle.id.to_string();
        match view(&api, &id) {
            ViewState::Found { filename, .. } => assert_eq!(filename, "shared-code"),
            other => panic!("Expected Found, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_does_not_reach_store() {
        let mut api = api();
        assert!(matches!(
            api.publish("   ".into(), None),
            Err(ShareError::Validation)
        ));
        assert_eq!(api.store().write_count(), 0);
    }

    #[test]
    fn test_absent_snippet() {
        let api = api();
        let id = Uuid::new_v4().to_string();
        assert_eq!(view(&api, &id), ViewState::NotFound);
        assert_eq!(raw(&api, &id).body(), "Code not found");
    }
}

use crate::commands::links::{is_shell_safe, ShareBundle};
use crate::commands::CmdMessage;
use crate::error::{Result, ShareError};
use crate::model::Snippet;
use crate::store::RecordStore;

#[derive(Debug, Clone)]
pub struct PublishResult {
    pub snippet: Snippet,
    pub bundle: ShareBundle,
    pub messages: Vec<CmdMessage>,
}

/// Validates, stores and derives the share links for one snippet.
///
/// Blank `code` is rejected before the store is touched. A store failure is
/// reported once as `Persistence`; there is no retry.
pub fn run<S: RecordStore>(
    store: &mut S,
    origin: &str,
    code: String,
    filename: Option<&str>,
) -> Result<PublishResult> {
    if code.trim().is_empty() {
        log::debug!("rejected publish with empty body");
        return Err(ShareError::Validation);
    }

    let snippet = Snippet::new(code, filename);
    store.create(&snippet).map_err(|e| {
        log::error!("store write failed for {}: {}", snippet.id(), e);
        e.into_persistence()
    })?;
    log::info!(
        "published {} as {:?} ({} bytes)",
        snippet.id(),
        snippet.filename(),
        snippet.code.len()
    );

    let bundle = ShareBundle::derive(origin, snippet.id(), snippet.filename());

    let mut messages = vec![CmdMessage::success(
        "Link generated!",
        "Your code is ready to share",
    )];
    if !is_shell_safe(snippet.filename()) {
        messages.push(CmdMessage::warning(
            "Check the filename",
            "The name contains shell-special characters; the wget command may not run as-is",
        ));
    }

    Ok(PublishResult {
        snippet,
        bundle,
        messages,
    })
}

/// The notice shown when a publish fails.
pub fn failure_notice(err: &ShareError) -> CmdMessage {
    match err {
        ShareError::Validation => CmdMessage::error("Error", "Please paste some code first"),
        _ => CmdMessage::error("Error", "Failed to generate link. Please try again."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use std::collections::HashSet;

    const ORIGIN: &str = "http://localhost:8080";

    #[test]
    fn test_publish_stores_and_derives_links() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, ORIGIN, "echo hi".into(), Some("hello")).unwrap();
        let id = result.snippet.id();

        assert_eq!(
            result.bundle.download_command,
            format!("wget \"{}/raw/{}\" -O \"hello.txt\"", ORIGIN, id)
        );
        assert_eq!(result.bundle.view_url, format!("{}/share/{}", ORIGIN, id));
        assert_eq!(store.write_count(), 1);

        let stored = store.get_by_id(&id).unwrap().unwrap();
        assert_eq!(stored.code, "echo hi");
        assert_eq!(stored.filename(), "hello");
    }

    #[test]
    fn test_default_filename() {
        let mut store = InMemoryStore::new();
        for name in [None, Some(""), Some("   ")] {
            let result = run(&mut store, ORIGIN, "x".into(), name).unwrap();
            assert!(result.bundle.download_command.ends_with("-O \"shared-code.txt\""));
            assert_eq!(result.bundle.filename, "shared-code");
        }
    }

    #[test]
    fn test_blank_code_never_writes() {
        let mut store = InMemoryStore::new();
        for code in ["", "   ", "\n\t \n"] {
            let err = run(&mut store, ORIGIN, code.into(), Some("x")).unwrap_err();
            assert!(matches!(err, ShareError::Validation));
        }
        assert_eq!(store.write_count(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_failure_is_persistence_error() {
        let mut store = StoreFixture::new().failing().store;
        let err = run(&mut store, ORIGIN, "x".into(), None).unwrap_err();
        assert!(matches!(err, ShareError::Persistence(_)));
        assert_eq!(
            failure_notice(&err).content,
            "Failed to generate link. Please try again."
        );
    }

    #[test]
    fn test_success_notice() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, ORIGIN, "x".into(), Some("ok")).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].title, "Link generated!");
    }

    #[test]
    fn test_unsafe_filename_is_kept_but_warned() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, ORIGIN, "x".into(), Some("a\"b")).unwrap();
        assert!(result.bundle.download_command.ends_with("-O \"a\"b.txt\""));
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning));
    }

    #[test]
    fn test_code_whitespace_is_preserved() {
        let mut store = InMemoryStore::new();
        let code = "\n  indented\r\n\ttabbed  \n\n";
        let result = run(&mut store, ORIGIN, code.into(), None).unwrap();
        let stored = store.get_by_id(&result.snippet.id()).unwrap().unwrap();
        assert_eq!(stored.code, code);
    }

    #[test]
    fn test_ten_thousand_publishes_yield_distinct_ids() {
        let mut store = InMemoryStore::new();
        let mut ids = HashSet::new();
        for _ in 0..10_000 {
            let result = run(&mut store, ORIGIN, "x".into(), None).unwrap();
            ids.insert(result.bundle.id);
        }
        assert_eq!(ids.len(), 10_000);
        assert_eq!(store.write_count(), 10_000);
    }
}

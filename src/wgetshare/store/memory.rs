use super::RecordStore;
use crate::error::{Result, ShareError};
use crate::model::Snippet;
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    snippets: HashMap<Uuid, Snippet>,
    simulate_failure: bool,
    writes: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with a persistence error.
    pub fn set_simulate_failure(&mut self, simulate: bool) {
        self.simulate_failure = simulate;
    }

    /// Number of successful `create` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    fn check_available(&self) -> Result<()> {
        if self.simulate_failure {
            return Err(ShareError::Persistence(
                "simulated store failure".to_string(),
            ));
        }
        Ok(())
    }
}

impl RecordStore for InMemoryStore {
    fn create(&mut self, snippet: &Snippet) -> Result<()> {
        self.check_available()?;
        let id = snippet.id();
        if self.snippets.contains_key(&id) {
            return Err(ShareError::DuplicateId(id));
        }
        self.snippets.insert(id, snippet.clone());
        self.writes += 1;
        Ok(())
    }

    fn get_by_id(&self, id: &Uuid) -> Result<Option<Snippet>> {
        self.check_available()?;
        Ok(self.snippets.get(id).cloned())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_snippets(mut self, count: usize) -> Self {
            for i in 0..count {
                let snippet = Snippet::new(
                    format!("echo snippet {}\n", i + 1),
                    Some(&format!("snippet-{}", i + 1)),
                );
                self.store.create(&snippet).unwrap();
            }
            self
        }

        /// Seeds one snippet and hands back its id alongside the fixture.
        pub fn with_snippet(mut self, code: &str, filename: Option<&str>) -> (Self, Uuid) {
            let snippet = Snippet::new(code.to_string(), filename);
            self.store.create(&snippet).unwrap();
            (self, snippet.id())
        }

        pub fn failing(mut self) -> Self {
            self.store.set_simulate_failure(true);
            self
        }
    }
}

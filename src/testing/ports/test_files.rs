//! Shared in-memory file backing store for port-scoped test doubles.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory file storage shared between a test and `MockProjectFs`.
///
/// Tests seed generator output via this handle before running commands
/// and inspect the patched content afterwards.
#[derive(Clone, Debug)]
pub struct TestFiles {
    pub(crate) files: Arc<Mutex<HashMap<String, String>>>,
}

impl Default for TestFiles {
    fn default() -> Self {
        Self { files: Arc::new(Mutex::new(HashMap::new())) }
    }
}

impl TestFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file into the in-memory store.
    pub fn add(&self, path: &str, content: &str) {
        self.files.lock().unwrap().insert(path.to_string(), content.to_string());
    }

    /// Current content of a file, if present.
    pub fn get(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}

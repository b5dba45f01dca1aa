//! The session-scoped import slot.
//!
//! User-imported case counts live in a key-value blob store owned by the
//! surrounding application (browser session storage in a web deployment, an
//! in-memory map in tests).  The slot holds at most one import under a fixed
//! key: a new import overwrites it, a reset clears it, and nothing ever
//! merges.

use std::collections::HashMap;

use ep_import::ImportedCaseCounts;

/// Storage key of the imported case-count blob.
pub const CUSTOM_CASE_COUNT_KEY: &str = "customCaseCount";

/// The key-value blob store contract this layer assumes but does not design.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn delete(&mut self, key: &str);
}

/// In-process [`SessionStore`] implementation; also the test double.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: HashMap<String, String>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Read the stored import, if any.  A blob that fails to parse reads as
/// absent rather than failing — the store's content is session-scoped cache,
/// not a source of truth.
pub fn load_user_case_counts(store: &impl SessionStore) -> Option<ImportedCaseCounts> {
    let text = store.get(CUSTOM_CASE_COUNT_KEY)?;
    serde_json::from_str(&text).ok()
}

/// Persist an import into the slot, overwriting any previous one.
pub fn save_user_case_counts(store: &mut impl SessionStore, imported: &ImportedCaseCounts) {
    let text = serde_json::to_string(imported)
        .expect("imported case counts are always representable as JSON");
    store.set(CUSTOM_CASE_COUNT_KEY, text);
}

/// Clear the slot.
pub fn reset_user_case_counts(store: &mut impl SessionStore) {
    store.delete(CUSTOM_CASE_COUNT_KEY);
}

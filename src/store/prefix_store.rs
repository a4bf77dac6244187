use crate::core::types::Backend;
use crate::store::ternary::TernaryStore;
use crate::store::trie::TrieStore;

/// Shared contract of the prefix indexes.
///
/// Every operation is total: absence is reported as `false` or an empty
/// vector, never as an error. Writers (`insert`, `insert_batch`, `clear`)
/// take the store's lock exclusively for their whole duration, readers share it.
///
/// Empty input: `insert("")` is a no-op, `contains("")` is false and
/// `autocomplete("")` returns the whole vocabulary.
///
/// Both backends return words in ascending `char` order. Callers should still
/// treat results as a set.
pub trait PrefixStore: Send + Sync {
    fn insert(&self, word: &str);

    /// Insert many words under a single write lock.
    fn insert_batch(&self, words: &[String]);

    fn contains(&self, word: &str) -> bool;

    /// Every inserted word starting with `prefix`, `prefix` itself included.
    fn autocomplete(&self, prefix: &str) -> Vec<String>;

    fn list_contents(&self) -> Vec<String>;

    fn clear(&self);

    fn backend(&self) -> Backend;
}

pub fn new_store(backend: Backend) -> Box<dyn PrefixStore> {
    match backend {
        Backend::Trie => Box::new(TrieStore::new()),
        Backend::Ternary => Box::new(TernaryStore::new()),
    }
}

use std::collections::BTreeMap;
use parking_lot::{RwLock, RwLockReadGuard};
use tracing::debug;
use crate::core::types::Backend;
use crate::store::prefix_store::PrefixStore;

/// One character position in the trie
#[derive(Debug, Default)]
pub struct TrieNode {
    /// Ordered so collection visits children by ascending char
    children: BTreeMap<char, TrieNode>,
    is_end: bool,
}

impl TrieNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_end(&self) -> bool {
        self.is_end
    }

    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(&ch, node)| (ch, node))
    }

    fn insert(&mut self, word: &str) {
        let mut current = self;
        for ch in word.chars() {
            current = current.children.entry(ch).or_default();
        }
        current.is_end = true;
    }

    /// Walk `prefix` without creating nodes
    fn descend(&self, prefix: &str) -> Option<&TrieNode> {
        let mut current = self;
        for ch in prefix.chars() {
            current = current.children.get(&ch)?;
        }
        Some(current)
    }

    /// Depth-first collection under `prefix`, which spells the path to `self`.
    ///
    /// Each stack entry carries the buffer length of its parent, so the
    /// buffer is cut back before the entry's char is appended.
    fn collect(&self, prefix: &str, results: &mut Vec<String>) {
        let mut buffer = prefix.to_string();
        let mut stack: Vec<(&TrieNode, usize, Option<char>)> = vec![(self, buffer.len(), None)];

        while let Some((node, len, ch)) = stack.pop() {
            buffer.truncate(len);
            if let Some(ch) = ch {
                buffer.push(ch);
            }
            if node.is_end {
                results.push(buffer.clone());
            }

            // Reversed so the smallest char is popped first
            let len = buffer.len();
            for (&ch, child) in node.children.iter().rev() {
                stack.push((child, len, Some(ch)));
            }
        }
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        // Unlink children onto a worklist so a long chain is freed without recursion
        let mut pending: Vec<TrieNode> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

/// Wide-branching prefix index: fast lookups, one child map per node.
pub struct TrieStore {
    root: RwLock<TrieNode>,
}

impl TrieStore {
    pub fn new() -> Self {
        TrieStore {
            root: RwLock::new(TrieNode::new()),
        }
    }

    /// Shared lock on the node graph, held until the guard drops.
    pub fn read_root(&self) -> RwLockReadGuard<'_, TrieNode> {
        self.root.read()
    }
}

impl Default for TrieStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixStore for TrieStore {
    fn insert(&self, word: &str) {
        if word.is_empty() {
            return;
        }
        self.root.write().insert(word);
    }

    fn insert_batch(&self, words: &[String]) {
        let mut root = self.root.write();
        for word in words.iter().filter(|w| !w.is_empty()) {
            root.insert(word);
        }
        debug!(count = words.len(), "trie batch insert");
    }

    fn contains(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let root = self.root.read();
        root.descend(word).is_some_and(TrieNode::is_end)
    }

    fn autocomplete(&self, prefix: &str) -> Vec<String> {
        let root = self.root.read();
        let mut results = Vec::new();

        if let Some(node) = root.descend(prefix) {
            node.collect(prefix, &mut results);
        }

        results
    }

    fn list_contents(&self) -> Vec<String> {
        let root = self.root.read();
        let mut results = Vec::new();
        // Root end flag is never set, empty inserts are ignored
        root.collect("", &mut results);
        results
    }

    fn clear(&self) {
        *self.root.write() = TrieNode::new();
        debug!("trie cleared");
    }

    fn backend(&self) -> Backend {
        Backend::Trie
    }
}

use std::cmp::Ordering;
use parking_lot::{RwLock, RwLockReadGuard};
use tracing::debug;
use crate::core::types::Backend;
use crate::store::prefix_store::PrefixStore;

type Link = Option<Box<TstNode>>;

/// One character at one position of some word.
///
/// `left`/`right` hold smaller/larger characters at the same position,
/// `mid` continues to the next position.
#[derive(Debug)]
pub struct TstNode {
    ch: char,
    is_end: bool,
    left: Link,
    mid: Link,
    right: Link,
}

impl TstNode {
    fn new(ch: char) -> Self {
        TstNode {
            ch,
            is_end: false,
            left: None,
            mid: None,
            right: None,
        }
    }

    pub fn ch(&self) -> char {
        self.ch
    }

    pub fn is_end(&self) -> bool {
        self.is_end
    }

    pub fn left(&self) -> Option<&TstNode> {
        self.left.as_deref()
    }

    pub fn mid(&self) -> Option<&TstNode> {
        self.mid.as_deref()
    }

    pub fn right(&self) -> Option<&TstNode> {
        self.right.as_deref()
    }
}

/// Walks down from `slot`, creating missing nodes, and marks the last one.
/// `chars` must be non-empty.
fn insert_chars(mut slot: &mut Link, chars: &[char]) {
    let mut index = 0;

    loop {
        let ch = chars[index];
        let node = slot.get_or_insert_with(|| Box::new(TstNode::new(ch)));

        match ch.cmp(&node.ch) {
            Ordering::Less => slot = &mut node.left,
            Ordering::Greater => slot = &mut node.right,
            Ordering::Equal if index + 1 < chars.len() => {
                index += 1;
                slot = &mut node.mid;
            }
            Ordering::Equal => {
                node.is_end = true;
                return;
            }
        }
    }
}

/// Node holding the last char of `chars`, if the whole path exists.
/// `chars` must be non-empty.
fn find_node<'a>(root: Option<&'a TstNode>, chars: &[char]) -> Option<&'a TstNode> {
    let mut node = root?;
    let mut index = 0;

    loop {
        match chars[index].cmp(&node.ch) {
            Ordering::Less => node = node.left.as_deref()?,
            Ordering::Greater => node = node.right.as_deref()?,
            Ordering::Equal if index + 1 < chars.len() => {
                index += 1;
                node = node.mid.as_deref()?;
            }
            Ordering::Equal => return Some(node),
        }
    }
}

impl Drop for TstNode {
    fn drop(&mut self) {
        // Unlink children onto a worklist so a long mid chain is freed without recursion
        let mut pending: Vec<Box<TstNode>> =
            [self.left.take(), self.mid.take(), self.right.take()].into_iter().flatten().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend([node.left.take(), node.mid.take(), node.right.take()].into_iter().flatten());
        }
    }
}

/// Pending work of the in-order walk. Both variants carry the buffer length
/// the node's own char is appended at.
enum Step<'a> {
    /// Walk the whole subtree rooted here
    Visit(&'a TstNode, usize),
    /// Left side is done: append the char, emit, then walk `mid`
    Emit(&'a TstNode, usize),
}

// In-order walk: left, self, mid, right. Yields ascending words.
fn collect(node: Option<&TstNode>, prefix: &str, results: &mut Vec<String>) {
    let mut buffer = prefix.to_string();
    let mut stack: Vec<Step<'_>> = node.map(|n| Step::Visit(n, buffer.len())).into_iter().collect();

    while let Some(step) = stack.pop() {
        match step {
            Step::Visit(node, len) => {
                if let Some(right) = node.right.as_deref() {
                    stack.push(Step::Visit(right, len));
                }
                stack.push(Step::Emit(node, len));
                if let Some(left) = node.left.as_deref() {
                    stack.push(Step::Visit(left, len));
                }
            }
            Step::Emit(node, len) => {
                buffer.truncate(len);
                buffer.push(node.ch);
                if node.is_end {
                    results.push(buffer.clone());
                }
                if let Some(mid) = node.mid.as_deref() {
                    stack.push(Step::Visit(mid, buffer.len()));
                }
            }
        }
    }
}

/// Narrow-branching prefix index: three child slots per node, lower memory than the trie.
pub struct TernaryStore {
    root: RwLock<Link>,
}

impl TernaryStore {
    pub fn new() -> Self {
        TernaryStore {
            root: RwLock::new(None),
        }
    }

    /// Shared lock on the node graph; `None` means nothing was inserted.
    pub fn read_root(&self) -> RwLockReadGuard<'_, Option<Box<TstNode>>> {
        self.root.read()
    }
}

impl Default for TernaryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixStore for TernaryStore {
    fn insert(&self, word: &str) {
        let chars: Vec<char> = word.chars().collect();
        if chars.is_empty() {
            return;
        }
        insert_chars(&mut self.root.write(), &chars);
    }

    fn insert_batch(&self, words: &[String]) {
        let mut root = self.root.write();
        for word in words {
            let chars: Vec<char> = word.chars().collect();
            if !chars.is_empty() {
                insert_chars(&mut root, &chars);
            }
        }
        debug!(count = words.len(), "ternary batch insert");
    }

    fn contains(&self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        if chars.is_empty() {
            return false;
        }
        let root = self.root.read();
        find_node(root.as_deref(), &chars).is_some_and(TstNode::is_end)
    }

    fn autocomplete(&self, prefix: &str) -> Vec<String> {
        let root = self.root.read();
        let mut results = Vec::new();
        let chars: Vec<char> = prefix.chars().collect();

        if chars.is_empty() {
            collect(root.as_deref(), "", &mut results);
            return results;
        }

        if let Some(node) = find_node(root.as_deref(), &chars) {
            if node.is_end {
                results.push(prefix.to_string());
            }
            // Everything strictly extending the prefix hangs off mid
            collect(node.mid.as_deref(), prefix, &mut results);
        }

        results
    }

    fn list_contents(&self) -> Vec<String> {
        let root = self.root.read();
        let mut results = Vec::new();
        collect(root.as_deref(), "", &mut results);
        results
    }

    fn clear(&self) {
        *self.root.write() = None;
        debug!("ternary tree cleared");
    }

    fn backend(&self) -> Backend {
        Backend::Ternary
    }
}

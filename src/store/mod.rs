pub mod prefix_store;
pub mod trie;
pub mod ternary;

pub use prefix_store::{new_store, PrefixStore};
pub use ternary::{TernaryStore, TstNode};
pub use trie::{TrieNode, TrieStore};

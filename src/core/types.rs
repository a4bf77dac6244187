use serde::{Serialize, Deserialize};
use std::fmt;

/// Which prefix index backs a store.
///
/// `Trie` trades memory for lookup speed (one child map per node), `Ternary`
/// keeps three child slots per node and is the low-memory choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Backend {
    #[default]
    Trie,
    Ternary,
}

impl Backend {
    pub fn from_low_memory(low_memory_mode: bool) -> Self {
        if low_memory_mode {
            Backend::Ternary
        } else {
            Backend::Trie
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Backend::Trie => "trie",
            Backend::Ternary => "ternary",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

//! Trie configuration module.
//!
//! The trie has no tunable semantics; this section only controls the
//! diagnostics it emits.

use serde::{Deserialize, Serialize};

/// Trie configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieConfig {
    /// Whether every insertion emits a `trace` level event
    pub trace_inserts: bool,
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self {
            trace_inserts: true,
        }
    }
}

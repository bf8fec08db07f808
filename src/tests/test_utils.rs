//! Test utilities and fixtures for Lei Trie.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use std::path::PathBuf;
use tempfile::TempDir;

/// Maximum word length for generated test data.
const MAX_WORD_LENGTH: usize = 8;

/// Maximum number of words in a generated word list.
const MAX_WORDS: usize = 40;

/// Generate a strategy for words over a small alphabet.
///
/// A small alphabet makes shared prefixes, and words that are prefixes of
/// other words, common.
pub fn word_strategy() -> BoxedStrategy<String> {
    proptest::collection::vec(prop::sample::select(vec!['a', 'b', 'c', 'é']), 0..MAX_WORD_LENGTH)
        .prop_map(|chars| chars.into_iter().collect::<String>())
        .boxed()
}

/// Generate a strategy for word lists that may contain duplicates.
pub fn word_list_strategy() -> BoxedStrategy<Vec<String>> {
    proptest::collection::vec(word_strategy(), 0..MAX_WORDS).boxed()
}

/// Test fixture for tests that need configuration files on disk.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
}

impl TestFixture {
    /// Creates a fixture backed by a fresh temporary directory.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
        })
    }

    /// Writes `contents` to `name` inside the fixture directory.
    pub fn write_file(&self, name: &str, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

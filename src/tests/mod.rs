//! Test modules for Lei Trie.
//!
//! This module contains crate-internal test suites:
//! - Configuration loading and validation
//! - Error display and conversion
//! - Property-based tests for the trie using proptest
//! - Shared strategies and fixtures

pub mod test_utils;

//! Error module for Lei Trie.
//!
//! Trie operations are total and never fail. Errors only come from the ambient
//! setup around the trie: configuration loading and logging installation.

use thiserror::Error;

pub mod config;

/// Result type alias used throughout Lei Trie.
pub type LeiResult<T> = Result<T, LeiError>;

/// Core error enum for Lei Trie.
#[derive(Error, Debug)]
pub enum LeiError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors installing the tracing subscriber.
    #[error("Logging error: {0}")]
    Logging(String),
}

//! Lei Trie Library
//!
//! An ordered, uncompressed prefix tree. Words are stored as paths of
//! symbol-labelled edges and can be looked up exactly, checked as prefixes,
//! counted, and enumerated lazily in lexicographic order, either in full or
//! restricted to a prefix.
//!
//! # Architecture
//!
//! - [`trie`]: the data structure itself; all operations are total
//! - [`config`]: layered configuration (defaults, file, environment)
//! - [`logging`]: `tracing` subscriber installation
//! - [`error`]: error types for configuration and logging setup

pub mod config;
pub mod error;
pub mod logging;
pub mod trie;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use trie::{Trie, TrieKey, Words};

/// Version information for Lei Trie.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Loads the default configuration, makes it the global configuration and
/// installs the logging subscriber it describes.
pub fn init() -> error::LeiResult<()> {
    let config = config::load_default_config()?;
    logging::init_logging(&config.log)?;
    config::init_global_config(config);
    tracing::info!(version = VERSION, "Lei Trie initialized");
    Ok(())
}

//! Integration tests for the process-wide configuration.
//!
//! The global configuration can only be set once per process, so this binary
//! holds a single test that walks through the whole lifecycle in order.

use lei_trie::config::trie::TrieConfig;
use lei_trie::config::{get_global_config, init_global_config, try_get_global_config, LeiConfig};
use lei_trie::Trie;

#[test]
fn test_global_config_lifecycle() {
    // Before initialization tries use the defaults
    assert!(try_get_global_config().is_none());
    let trie: Trie = Trie::new();
    assert_eq!(trie.config(), &TrieConfig::default());

    let quiet = LeiConfig {
        trie: TrieConfig {
            trace_inserts: false,
        },
        ..LeiConfig::default()
    };
    init_global_config(quiet.clone());

    assert_eq!(get_global_config().get(), &quiet);
    let mut trie: Trie = Trie::new();
    assert!(!trie.config().trace_inserts);
    trie.insert("quiet");
    assert!(trie.search("quiet"));

    // Tries collected from words read the global too
    let collected: Trie = ["a", "b"].into_iter().collect();
    assert!(!collected.config().trace_inserts);

    // Later initialization, including the one done by `init`, is ignored
    init_global_config(LeiConfig::default());
    lei_trie::init().unwrap();
    assert_eq!(get_global_config().get(), &quiet);
}

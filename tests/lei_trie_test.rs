//! Integration tests for Lei Trie.
//! Exercises the public API the way an embedding crate would.

use lei_trie::config::trie::TrieConfig;
use lei_trie::{Trie, Words};

#[test]
fn test_word_list_scenario() {
    let mut trie = Trie::new();
    for word in ["cat", "car", "care", "dog"] {
        trie.insert(word);
    }

    assert!(trie.search("cat"));
    assert!(!trie.search("ca"));
    assert!(trie.contains_prefix("ca"));
    assert_eq!(trie.len(), 4);
    assert_eq!(trie.iter().collect::<Vec<_>>(), ["car", "care", "cat", "dog"]);
    assert_eq!(trie.iter_with_prefix("ca").collect::<Vec<_>>(), ["car", "care", "cat"]);
    assert_eq!(trie.iter_with_prefix("do").collect::<Vec<_>>(), ["dog"]);
    assert!(trie.iter_with_prefix("x").next().is_none());
}

#[test]
fn test_empty_word_only() {
    let mut trie = Trie::new();
    trie.insert("");

    assert_eq!(trie.len(), 1);
    assert!(trie.search(""));
    assert_eq!(trie.iter().collect::<Vec<_>>(), [""]);
}

#[test]
fn test_fresh_trie() {
    let trie: Trie = Trie::default();

    assert_eq!(trie.len(), 0);
    assert!(trie.is_empty());
    assert!(trie.contains_prefix(""));
    assert!(!trie.search(""));
    assert_eq!(trie.iter().next(), None);
}

#[test]
fn test_autocomplete_stops_early() {
    let words: Vec<String> = (0..1000).map(|i| format!("item{i:04}")).collect();
    let trie: Trie = words.iter().map(String::as_str).collect();

    // Only the first few suggestions are pulled from the traversal
    let suggestions: Vec<String> = trie.iter_with_prefix("item09").take(3).collect();
    assert_eq!(suggestions, ["item0900", "item0901", "item0902"]);
    assert_eq!(trie.len(), 1000);
}

#[test]
fn test_token_sequences() {
    let mut trie: Trie<[&str]> = Trie::with_config(TrieConfig {
        trace_inserts: false,
    });
    trie.insert(&["GET", "/users"]);
    trie.insert(&["GET", "/users", "42"]);
    trie.insert(&["POST", "/users"]);

    assert!(trie.search(&["GET", "/users"]));
    assert!(!trie.search(&["GET"]));
    assert!(trie.contains_prefix(&["POST"]));

    let routes: Words<'_, [&str]> = trie.iter_with_prefix(&["GET"]);
    assert_eq!(
        routes.collect::<Vec<_>>(),
        vec![vec!["GET", "/users"], vec!["GET", "/users", "42"]]
    );
}

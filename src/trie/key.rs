//! Word types that can be stored in a [`Trie`](super::Trie).
//!
//! A word is a finite sequence of symbols. The trie only needs to split a
//! borrowed word into symbols on the way in, and to rebuild an owned word from
//! an accumulated symbol path on the way out.

/// A borrowed word that the trie can store.
///
/// Implemented for `str` (one `char` per edge) and for slices of any ordered,
/// clonable symbol type.
pub trait TrieKey {
    /// The atomic unit labelling a single edge.
    type Symbol: Ord + Clone;

    /// The owned form yielded by enumeration.
    type Owned;

    /// Iterator over the symbols of a word, in order.
    type Symbols<'a>: Iterator<Item = Self::Symbol>
    where
        Self: 'a;

    /// Splits the word into its symbols.
    fn symbols(&self) -> Self::Symbols<'_>;

    /// Rebuilds an owned word from a root-to-node symbol path.
    fn from_symbols(path: &[Self::Symbol]) -> Self::Owned;
}

impl TrieKey for str {
    type Symbol = char;
    type Owned = String;
    type Symbols<'a> = std::str::Chars<'a>
    where
        Self: 'a;

    fn symbols(&self) -> Self::Symbols<'_> {
        self.chars()
    }

    fn from_symbols(path: &[char]) -> String {
        path.iter().collect()
    }
}

impl<T: Ord + Clone> TrieKey for [T] {
    type Symbol = T;
    type Owned = Vec<T>;
    type Symbols<'a> = std::iter::Cloned<std::slice::Iter<'a, T>>
    where
        Self: 'a;

    fn symbols(&self) -> Self::Symbols<'_> {
        self.iter().cloned()
    }

    fn from_symbols(path: &[T]) -> Vec<T> {
        path.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_symbols_are_chars() {
        let symbols: Vec<char> = "café".symbols().collect();
        assert_eq!(symbols, vec!['c', 'a', 'f', 'é']);
        assert_eq!(<str as TrieKey>::from_symbols(&symbols), "café");
    }

    #[test]
    fn test_slice_symbols() {
        let word: &[u8] = &[3, 1, 2];
        let symbols: Vec<u8> = word.symbols().collect();
        assert_eq!(symbols, vec![3, 1, 2]);
        assert_eq!(<[u8] as TrieKey>::from_symbols(&[]), Vec::<u8>::new());
    }
}

//! The vocabulary capability the encoder borrows per call.
//!
//! Anything that can report its size and map a token to an index can drive
//! the encoder. Implementations are provided for the common map types so
//! callers can pass whatever their vocabulary builder produced.

use ahash::AHashMap;
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Read-only token -> index lookup.
///
/// Implementors are expected to map tokens onto `0..size()` without
/// duplicates. The encoder checks the upper bound on every hit and reports a
/// violation as [`crate::EncoderError::IndexOutOfRange`].
pub trait VocabLookup {
    /// Number of entries, which is also the length of every count vector.
    fn size(&self) -> usize;

    /// Index of `token`, or `None` when the token is out of vocabulary.
    fn index_of(&self, token: &str) -> Option<usize>;
}

impl<T: VocabLookup + ?Sized> VocabLookup for &T {
    #[inline]
    fn size(&self) -> usize {
        (**self).size()
    }

    #[inline]
    fn index_of(&self, token: &str) -> Option<usize> {
        (**self).index_of(token)
    }
}

impl<K, S> VocabLookup for HashMap<K, u32, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn index_of(&self, token: &str) -> Option<usize> {
        self.get(token).map(|&id| id as usize)
    }
}

impl<K> VocabLookup for AHashMap<K, u32>
where
    K: Borrow<str> + Hash + Eq,
{
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn index_of(&self, token: &str) -> Option<usize> {
        self.get(token).map(|&id| id as usize)
    }
}

impl<K> VocabLookup for BTreeMap<K, u32>
where
    K: Borrow<str> + Ord,
{
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn index_of(&self, token: &str) -> Option<usize> {
        self.get(token).map(|&id| id as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_summary<V: VocabLookup + ?Sized>(vocab: &V) -> (usize, Option<usize>, Option<usize>) {
        (vocab.size(), vocab.index_of("b"), vocab.index_of("zzz"))
    }

    #[test]
    fn test_std_hashmap_lookup() {
        let vocab: HashMap<String, u32> = [("a".to_string(), 0), ("b".to_string(), 1)]
            .into_iter()
            .collect();
        assert_eq!(lookup_summary(&vocab), (2, Some(1), None));
    }

    #[test]
    fn test_ahashmap_lookup() {
        let mut vocab: AHashMap<&str, u32> = AHashMap::new();
        vocab.insert("a", 0);
        vocab.insert("b", 1);
        assert_eq!(lookup_summary(&vocab), (2, Some(1), None));
    }

    #[test]
    fn test_btreemap_lookup() {
        let vocab: BTreeMap<String, u32> = [("a".to_string(), 0), ("b".to_string(), 1)]
            .into_iter()
            .collect();
        assert_eq!(lookup_summary(&vocab), (2, Some(1), None));
    }

    #[test]
    fn test_trait_object_lookup() {
        let vocab: HashMap<String, u32> = [("b".to_string(), 0)].into_iter().collect();
        let dynamic: &dyn VocabLookup = &vocab;
        assert_eq!(lookup_summary(dynamic), (1, Some(0), None));
    }
}

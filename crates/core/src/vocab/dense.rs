//! Dense vocabulary storage.
//!
//! `Vocabulary` is a ready-made [`VocabLookup`] for callers that already have
//! token/index pairs in hand. It stores tokens as `CompactString` keys in an
//! `AHashMap` and keeps a dense reverse table, so it always satisfies the
//! `0..len()` index invariant the encoder relies on.

use super::lookup::VocabLookup;
use crate::error::{EncoderError, Result};
use ahash::AHashMap;
use compact_str::CompactString;

/// Forward mapping: token string -> index
pub type Vocab = AHashMap<CompactString, u32>;

/// Token -> index mapping with a dense reverse table.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Forward mapping: token string -> index
    vocab: Vocab,
    /// Reverse mapping: index -> token string
    tokens: Vec<CompactString>,
}

impl Vocabulary {
    /// Create a new empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a vocabulary whose indices follow the order of `tokens`.
    ///
    /// Fails on a repeated token, since it would leave a hole in the
    /// index range.
    pub fn from_tokens<I, T>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let tokens = tokens.into_iter();
        let mut vocab = Vocab::with_capacity(tokens.size_hint().0);
        let mut reverse = Vec::with_capacity(tokens.size_hint().0);

        for token in tokens {
            let token = CompactString::new(token.as_ref());
            if vocab.contains_key(&token) {
                return Err(EncoderError::DuplicateToken(token.to_string()));
            }
            vocab.insert(token.clone(), reverse.len() as u32);
            reverse.push(token);
        }

        Ok(Self {
            vocab,
            tokens: reverse,
        })
    }

    /// Create a vocabulary from explicit `(token, index)` pairs.
    ///
    /// The indices must be exactly `0..n` for `n` pairs, in any order.
    pub fn from_pairs<I, T>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (T, u32)>,
        T: AsRef<str>,
    {
        let pairs: Vec<(CompactString, u32)> = pairs
            .into_iter()
            .map(|(token, id)| (CompactString::new(token.as_ref()), id))
            .collect();
        let size = pairs.len();

        let mut slots: Vec<Option<CompactString>> = vec![None; size];
        let mut vocab = Vocab::with_capacity(size);

        for (token, id) in pairs {
            if vocab.contains_key(&token) {
                return Err(EncoderError::DuplicateToken(token.to_string()));
            }

            let slot = id as usize;
            if slot >= size {
                return Err(EncoderError::InvalidConfig(format!(
                    "token {token:?} has index {id}, outside 0..{size}"
                )));
            }
            if let Some(first) = &slots[slot] {
                return Err(EncoderError::DuplicateIndex {
                    index: id,
                    first: first.to_string(),
                    second: token.to_string(),
                });
            }

            slots[slot] = Some(token.clone());
            vocab.insert(token, id);
        }

        // Distinct indices below `size` fill every slot.
        let tokens = slots.into_iter().flatten().collect();

        Ok(Self { vocab, tokens })
    }

    /// Get the index for a token string.
    #[inline]
    pub fn get_id(&self, token: &str) -> Option<u32> {
        self.vocab.get(token).copied()
    }

    /// Get the token string for an index.
    #[inline]
    pub fn get_token(&self, id: u32) -> Option<&str> {
        self.tokens.get(id as usize).map(|s| s.as_str())
    }

    /// Check whether a token is in the vocabulary.
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.vocab.contains_key(token)
    }

    /// Get the size of the vocabulary.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the vocabulary is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens in index order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens.iter().map(|s| s.as_str())
    }
}

impl VocabLookup for Vocabulary {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn index_of(&self, token: &str) -> Option<usize> {
        self.get_id(token).map(|id| id as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tokens() {
        let vocab = Vocabulary::from_tokens(["hello", "world"]).unwrap();

        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.get_id("hello"), Some(0));
        assert_eq!(vocab.get_id("world"), Some(1));
        assert_eq!(vocab.get_token(0), Some("hello"));
        assert_eq!(vocab.get_token(1), Some("world"));
        assert_eq!(vocab.get_token(2), None);
    }

    #[test]
    fn test_from_tokens_rejects_duplicates() {
        let err = Vocabulary::from_tokens(["hello", "hello"]).unwrap_err();
        assert!(matches!(err, EncoderError::DuplicateToken(t) if t == "hello"));
    }

    #[test]
    fn test_from_pairs_any_order() {
        let vocab = Vocabulary::from_pairs([("world", 1), ("hello", 0)]).unwrap();

        assert_eq!(vocab.tokens().collect::<Vec<_>>(), vec!["hello", "world"]);
        assert!(vocab.contains("world"));
        assert!(!vocab.contains("rust"));
    }

    #[test]
    fn test_from_pairs_duplicate_index() {
        let err = Vocabulary::from_pairs([("hello", 0), ("world", 0)]).unwrap_err();
        assert!(matches!(err, EncoderError::DuplicateIndex { index: 0, .. }));
    }

    #[test]
    fn test_from_pairs_gap() {
        let err = Vocabulary::from_pairs([("hello", 0), ("world", 5)]).unwrap_err();
        assert!(matches!(err, EncoderError::InvalidConfig(_)));
    }

    #[test]
    fn test_lookup_trait() {
        let vocab = Vocabulary::from_tokens(["a", "b"]).unwrap();

        assert_eq!(vocab.size(), 2);
        assert_eq!(vocab.index_of("b"), Some(1));
        assert_eq!(vocab.index_of("c"), None);
    }

    #[test]
    fn test_empty() {
        let vocab = Vocabulary::new();
        assert!(vocab.is_empty());
        assert_eq!(vocab.size(), 0);
    }
}

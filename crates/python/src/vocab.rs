//! Adapter from Python vocabulary objects to `VocabLookup`.
//!
//! Pipeline vocabularies are duck-typed: a plain `dict`, or any object with
//! `len()`, `in` and `[]`. Probing Python for every token would hold the GIL
//! for the whole encode, so the tokens of a call are resolved once up front.

use ahash::AHashMap;
use bagwords_core::VocabLookup;
use pyo3::prelude::*;

/// Resolved view of a Python vocabulary for a fixed set of tokens.
pub(crate) struct VocabSnapshot {
    size: usize,
    /// Token -> index, `None` for out-of-vocabulary tokens
    ids: AHashMap<String, Option<u32>>,
}

impl VocabSnapshot {
    /// Resolve every distinct token in `tokens` against `vocab`.
    ///
    /// Raises whatever Python raises when `vocab` lacks `len()`, `in` or
    /// `[]`, and `OverflowError`/`TypeError` for indices that are not
    /// non-negative integers.
    pub(crate) fn capture<'a, I>(vocab: &Bound<'_, PyAny>, tokens: I) -> PyResult<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let size = vocab.len()?;
        let mut ids: AHashMap<String, Option<u32>> = AHashMap::new();

        for token in tokens {
            if ids.contains_key(token) {
                continue;
            }

            let id = if vocab.contains(token)? {
                Some(vocab.get_item(token)?.extract::<u32>()?)
            } else {
                None
            };
            ids.insert(token.to_string(), id);
        }

        Ok(Self { size, ids })
    }
}

impl VocabLookup for VocabSnapshot {
    fn size(&self) -> usize {
        self.size
    }

    fn index_of(&self, token: &str) -> Option<usize> {
        self.ids
            .get(token)
            .copied()
            .flatten()
            .map(|id| id as usize)
    }
}

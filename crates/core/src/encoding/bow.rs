//! Bag-of-words count encoding.
//!
//! Each token sequence becomes a vector with one counter per vocabulary
//! entry. Token order is discarded and out-of-vocabulary tokens are skipped.

use crate::error::{EncoderError, Result};
use crate::vocab::VocabLookup;
use rayon::prelude::*;

/// Counter type of a [`CountVector`].
pub type Count = u32;

/// One counter per vocabulary index.
pub type CountVector = Vec<Count>;

/// Stateless bag-of-words encoder.
///
/// The vocabulary is borrowed per call, so one encoder can serve any number
/// of vocabularies and threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BagOfWordsEncoder;

impl BagOfWordsEncoder {
    /// Create a new encoder.
    pub fn new() -> Self {
        Self
    }

    /// Encode a single token sequence.
    ///
    /// The result has exactly `vocab.size()` entries. Tokens the vocabulary
    /// does not know are ignored.
    ///
    /// # Errors
    /// Returns [`EncoderError::IndexOutOfRange`] if the vocabulary maps a
    /// token at or beyond its own size.
    pub fn encode_one<I, V>(&self, tokens: I, vocab: &V) -> Result<CountVector>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        V: VocabLookup + ?Sized,
    {
        let size = vocab.size();
        let mut bow: CountVector = vec![0; size];

        for token in tokens {
            let token = token.as_ref();
            if let Some(idx) = vocab.index_of(token) {
                let slot = bow
                    .get_mut(idx)
                    .ok_or_else(|| EncoderError::IndexOutOfRange {
                        token: token.to_string(),
                        index: idx,
                        size,
                    })?;
                *slot = slot.saturating_add(1);
            }
        }

        Ok(bow)
    }

    /// Encode a batch, one vector per sample, in input order.
    pub fn encode_batch<S, T, V>(&self, batch: &[S], vocab: &V) -> Result<Vec<CountVector>>
    where
        S: AsRef<[T]>,
        T: AsRef<str>,
        V: VocabLookup + ?Sized,
    {
        tracing::debug!(
            samples = batch.len(),
            vocab_size = vocab.size(),
            parallel = false,
            "encoding bag-of-words batch"
        );

        batch
            .iter()
            .map(|sample| self.encode_one(sample.as_ref(), vocab))
            .collect()
    }

    /// Encode a batch on the rayon thread pool.
    ///
    /// Produces the same vectors in the same order as [`Self::encode_batch`].
    pub fn encode_batch_par<S, T, V>(&self, batch: &[S], vocab: &V) -> Result<Vec<CountVector>>
    where
        S: AsRef<[T]> + Sync,
        T: AsRef<str> + Sync,
        V: VocabLookup + Sync + ?Sized,
    {
        tracing::debug!(
            samples = batch.len(),
            vocab_size = vocab.size(),
            parallel = true,
            "encoding bag-of-words batch"
        );

        batch
            .par_iter()
            .map(|sample| self.encode_one(sample.as_ref(), vocab))
            .collect()
    }
}

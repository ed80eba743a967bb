//! Vocabulary capability and storage.
//!
//! The encoder only needs to ask a vocabulary for its size and for the
//! index of a token; this module defines that capability and a dense
//! implementation of it.

pub mod dense;
pub mod lookup;

pub use dense::{Vocab, Vocabulary};
pub use lookup::VocabLookup;

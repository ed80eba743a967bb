//! Bagwords-core - Bag-of-words count encoding
//!
//! This crate turns batches of token sequences into fixed-length count
//! vectors, given a vocabulary that maps tokens to indices. The vocabulary is
//! owned by the caller and only borrowed for the duration of a call.
//!
//! # Features
//!
//! - A two-method [`VocabLookup`] capability, implemented for `HashMap`,
//!   `AHashMap`, `BTreeMap` and the dense [`Vocabulary`]
//! - Sequential and rayon-parallel batch encoding with identical results
//! - Out-of-vocabulary tokens are skipped, never reported
//! - A name-keyed [`Registry`] for building components from pipeline configs
//!
//! # Example
//!
//! ```rust
//! use bagwords_core::{BagOfWordsEncoder, Vocabulary};
//!
//! let vocab = Vocabulary::from_tokens(["a", "b"])?;
//! let encoder = BagOfWordsEncoder::new();
//!
//! assert_eq!(encoder.encode_one(["a", "b", "c"], &vocab)?, vec![1, 1]);
//! assert_eq!(encoder.encode_batch(&[vec!["a", "a", "b"]], &vocab)?, vec![vec![2, 1]]);
//! # Ok::<(), bagwords_core::EncoderError>(())
//! ```

pub mod error;
pub use error::{EncoderError, Result};

// Vocabulary capability and storage
pub mod vocab;
pub use vocab::{Vocab, VocabLookup, Vocabulary};

// Encoders
pub mod encoding;
pub use encoding::{BagOfWordsEncoder, Count, CountVector};

// Component construction by name
pub mod registry;
pub use registry::{ComponentConfig, ComponentFactory, ComponentOptions, Embedder, Registry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Encoders that turn token sequences into numeric features.

pub mod bow;

pub use bow::{BagOfWordsEncoder, Count, CountVector};

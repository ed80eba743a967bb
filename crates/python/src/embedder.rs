//! PyO3 wrapper for the bag-of-words encoder

use bagwords_core::BagOfWordsEncoder;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::error::IntoPyErr;
use crate::vocab::VocabSnapshot;

/// One sample of a batch.
///
/// A token list is used as is. A bare string is iterated like Python
/// iterates it, one token per character, so `bow(['ab'], vocab)` counts
/// `'a'` and `'b'`.
#[derive(Debug, Clone, PartialEq, Eq, FromPyObject)]
pub(crate) enum Sample {
    Text(String),
    Tokens(Vec<String>),
}

impl Sample {
    pub(crate) fn into_tokens(self) -> Vec<String> {
        match self {
            Sample::Text(text) => text.chars().map(String::from).collect(),
            Sample::Tokens(tokens) => tokens,
        }
    }
}

/// One-hot counts of tokens over a pre-built vocabulary.
///
/// Each batch item is a list of tokens, or a string whose characters are
/// the tokens.
///
/// >>> bow = BoWEmbedder()
/// >>> bow([['a', 'b', 'c']], vocab={'a': 0, 'b': 1})
/// [[1, 1]]
/// >>> bow(['a', 'b', 'c'], vocab={'a': 0, 'b': 1})
/// [[1, 0], [0, 1], [0, 0]]
#[pyclass(name = "BoWEmbedder", module = "bagwords")]
pub struct PyBowEmbedder {
    inner: BagOfWordsEncoder,
}

#[pymethods]
impl PyBowEmbedder {
    /// Options are accepted for config compatibility and ignored
    #[new]
    #[pyo3(signature = (**_kwargs))]
    fn new(_kwargs: Option<&Bound<'_, PyDict>>) -> Self {
        Self {
            inner: BagOfWordsEncoder::new(),
        }
    }

    /// Encode a batch of token lists, one count list per sample
    fn __call__(
        &self,
        py: Python<'_>,
        batch: Vec<Sample>,
        vocab: &Bound<'_, PyAny>,
    ) -> PyResult<Vec<Vec<u32>>> {
        let batch: Vec<Vec<String>> = batch.into_iter().map(Sample::into_tokens).collect();
        let snapshot = VocabSnapshot::capture(vocab, batch.iter().flatten().map(String::as_str))?;
        let encoder = self.inner;

        py.allow_threads(move || encoder.encode_batch(&batch, &snapshot))
            .map_err(|e| e.into_py_err())
    }

    /// Encode a single token list
    fn encode_one(&self, sample: Sample, vocab: &Bound<'_, PyAny>) -> PyResult<Vec<u32>> {
        let tokens = sample.into_tokens();
        let snapshot = VocabSnapshot::capture(vocab, tokens.iter().map(String::as_str))?;
        self.inner
            .encode_one(&tokens, &snapshot)
            .map_err(|e| e.into_py_err())
    }

    /// Registered component name
    #[getter]
    fn name(&self) -> &'static str {
        BagOfWordsEncoder::NAME
    }

    fn __repr__(&self) -> String {
        "BoWEmbedder()".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_sample_splits_into_characters() {
        let sample = Sample::Text("abé".to_string());
        assert_eq!(sample.into_tokens(), vec!["a", "b", "é"]);
    }

    #[test]
    fn test_token_sample_is_kept() {
        let sample = Sample::Tokens(vec!["ab".to_string(), "c".to_string()]);
        assert_eq!(sample.into_tokens(), vec!["ab", "c"]);
    }

    #[test]
    fn test_flat_batch_encodes_one_vector_per_string() {
        let vocab = bagwords_core::Vocabulary::from_pairs([("a", 0), ("b", 1)]).unwrap();
        let batch: Vec<Vec<String>> = ["a", "b", "c"]
            .into_iter()
            .map(|s| Sample::Text(s.to_string()).into_tokens())
            .collect();

        let bows = BagOfWordsEncoder::new().encode_batch(&batch, &vocab).unwrap();
        assert_eq!(bows, vec![vec![1, 0], vec![0, 1], vec![0, 0]]);
    }
}

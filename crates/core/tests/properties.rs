use bagwords_core::{BagOfWordsEncoder, VocabLookup, Vocabulary};
use proptest::prelude::*;

/// Tokens drawn from a small alphabet so samples mix known and unknown words.
fn token() -> impl Strategy<Value = String> {
    "[a-h]{1,2}"
}

fn vocabulary() -> impl Strategy<Value = Vocabulary> {
    prop::collection::btree_set(token(), 0..12).prop_map(|tokens| {
        Vocabulary::from_tokens(tokens).expect("distinct tokens form a vocabulary")
    })
}

fn batch() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec(token(), 0..20), 0..16)
}

proptest! {
    #[test]
    fn prop_one_vector_per_sample(vocab in vocabulary(), batch in batch()) {
        let bows = BagOfWordsEncoder::new().encode_batch(&batch, &vocab).unwrap();
        prop_assert_eq!(bows.len(), batch.len());
    }

    #[test]
    fn prop_vector_length_is_vocab_size(vocab in vocabulary(), sample in prop::collection::vec(token(), 0..20)) {
        let bow = BagOfWordsEncoder::new().encode_one(&sample, &vocab).unwrap();
        prop_assert_eq!(bow.len(), vocab.size());
    }

    #[test]
    fn prop_sum_counts_known_tokens(vocab in vocabulary(), sample in prop::collection::vec(token(), 0..20)) {
        let bow = BagOfWordsEncoder::new().encode_one(&sample, &vocab).unwrap();
        let known = sample.iter().filter(|t| vocab.contains(t)).count() as u64;
        prop_assert_eq!(bow.iter().map(|&c| u64::from(c)).sum::<u64>(), known);
    }

    #[test]
    fn prop_each_slot_counts_its_token(vocab in vocabulary(), sample in prop::collection::vec(token(), 0..20)) {
        let bow = BagOfWordsEncoder::new().encode_one(&sample, &vocab).unwrap();
        for (index, token) in vocab.tokens().enumerate() {
            let expected = sample.iter().filter(|t| t.as_str() == token).count() as u32;
            prop_assert_eq!(bow[index], expected);
        }
    }

    #[test]
    fn prop_encoding_is_idempotent(vocab in vocabulary(), sample in prop::collection::vec(token(), 0..20)) {
        let encoder = BagOfWordsEncoder::new();
        let first = encoder.encode_one(&sample, &vocab).unwrap();
        let second = encoder.encode_one(&sample, &vocab).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_parallel_matches_sequential(vocab in vocabulary(), batch in batch()) {
        let encoder = BagOfWordsEncoder::new();
        let sequential = encoder.encode_batch(&batch, &vocab).unwrap();
        let parallel = encoder.encode_batch_par(&batch, &vocab).unwrap();
        prop_assert_eq!(sequential, parallel);
    }
}

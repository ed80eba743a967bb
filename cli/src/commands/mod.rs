//! CLI commands for the bagwords encoder.

pub mod benchmark;
pub mod components;
pub mod encode;

pub use benchmark::BenchmarkCommand;
pub use components::ComponentsCommand;
pub use encode::EncodeCommand;

use anyhow::{Context, Result};
use bagwords_core::Vocabulary;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Read a JSON object of token -> index produced by a vocabulary builder.
pub(crate) fn load_vocabulary(path: &Path) -> Result<Vocabulary> {
    let file = File::open(path)
        .with_context(|| format!("failed to open vocabulary {}", path.display()))?;
    let map: HashMap<String, u32> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse vocabulary {}", path.display()))?;
    let vocab = Vocabulary::from_pairs(map)
        .with_context(|| format!("invalid vocabulary {}", path.display()))?;

    tracing::info!(path = %path.display(), size = vocab.len(), "loaded vocabulary");
    Ok(vocab)
}

/// Read samples, one per line, tokens separated by whitespace.
///
/// `-` reads from stdin.
pub(crate) fn read_samples(input: &str) -> Result<Vec<Vec<String>>> {
    let text = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read samples from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("failed to read samples from {input}"))?
    };

    Ok(split_samples(&text))
}

fn split_samples(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .map(|line| line.split_whitespace().map(String::from).collect())
        .collect()
}

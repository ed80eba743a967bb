//! Benchmark command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Benchmark command arguments.
#[derive(Parser)]
pub struct BenchmarkCommand {
    /// Path to a JSON vocabulary (token -> index)
    #[arg(short, long)]
    pub vocab: PathBuf,

    /// Samples to encode, one per line
    #[arg(short, long)]
    pub input: String,

    /// Number of iterations to run
    #[arg(short = 'n', long, default_value_t = 100)]
    pub iterations: usize,

    /// Encode on all cores
    #[arg(short, long, default_value_t = false)]
    pub parallel: bool,
}

use super::{load_vocabulary, read_samples};
use anyhow::{bail, Result as AnyhowResult};
use bagwords_core::{BagOfWordsEncoder, Result as EncodeResult, Vocabulary};
use std::time::Instant;

pub fn run(cmd: BenchmarkCommand) -> AnyhowResult<()> {
    if cmd.iterations == 0 {
        bail!("iterations must be at least 1");
    }

    let vocab = load_vocabulary(&cmd.vocab)?;
    let samples = read_samples(&cmd.input)?;
    let token_count: usize = samples.iter().map(Vec::len).sum();
    let encoder = BagOfWordsEncoder::new();

    let encode = |samples: &[Vec<String>], vocab: &Vocabulary| -> EncodeResult<usize> {
        let vectors = if cmd.parallel {
            encoder.encode_batch_par(samples, vocab)?
        } else {
            encoder.encode_batch(samples, vocab)?
        };
        Ok(vectors.len())
    };

    println!("Benchmarking encoding...");
    println!("  Samples: {}", samples.len());
    println!("  Tokens: {}", token_count);
    println!("  Vocabulary size: {}", vocab.len());
    println!("  Iterations: {}", cmd.iterations);
    println!("  Parallel: {}", cmd.parallel);
    println!();

    // Warmup
    encode(samples.as_slice(), &vocab)?;

    // Benchmark
    let start = Instant::now();
    for _ in 0..cmd.iterations {
        encode(samples.as_slice(), &vocab)?;
    }
    let elapsed = start.elapsed();

    let avg_time_ns = elapsed.as_nanos() / cmd.iterations as u128;
    let avg_time_ms = avg_time_ns as f64 / 1_000_000.0;
    let avg_secs = avg_time_ns as f64 / 1_000_000_000.0;

    println!("Results:");
    println!("  Total time: {:.2}s", elapsed.as_secs_f64());
    println!("  Average time: {:.3}ms", avg_time_ms);
    if avg_secs > 0.0 {
        println!("  Throughput: {:.0} tokens/s", token_count as f64 / avg_secs);
    }

    Ok(())
}

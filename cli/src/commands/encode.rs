//! Encode command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Encode command arguments.
#[derive(Parser)]
pub struct EncodeCommand {
    /// Path to a JSON vocabulary (token -> index)
    #[arg(short, long)]
    pub vocab: PathBuf,

    /// Samples to encode, one per line ("-" for stdin)
    #[arg(short, long, default_value = "-")]
    pub input: String,

    /// Encode on all cores (overrides the config file when set)
    #[arg(short, long, default_value_t = false)]
    pub parallel: bool,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TOML settings (defaults to ./encode.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

use super::{load_vocabulary, read_samples};
use crate::config::{load_settings, EncodeSettings};
use anyhow::{Context, Result as AnyhowResult};
use bagwords_core::{CountVector, Registry};

pub fn run(cmd: EncodeCommand) -> AnyhowResult<()> {
    let settings: EncodeSettings = load_settings("encode", cmd.config)?;
    let vocab = load_vocabulary(&cmd.vocab)?;
    let samples = read_samples(&cmd.input)?;

    let component = Registry::builtin().create(&settings.component)?;
    let parallel = cmd.parallel || settings.parallel;

    tracing::debug!(component = component.name(), parallel, "encoding samples");
    let vectors = if parallel {
        component.embed_par(&samples, &vocab)?
    } else {
        component.embed(&samples, &vocab)?
    };

    let output = format_vectors(&vectors, &settings.separator);

    match &cmd.output {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(
                samples = vectors.len(),
                path = %path.display(),
                "wrote count vectors"
            );
        }
        None => {
            print!("{}", output);
        }
    }

    Ok(())
}

fn format_vectors(vectors: &[CountVector], separator: &str) -> String {
    let mut output = String::new();
    for vector in vectors {
        let line: Vec<String> = vector.iter().map(|count| count.to_string()).collect();
        output.push_str(&line.join(separator));
        output.push('\n');
    }
    output
}

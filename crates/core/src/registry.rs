//! Name-keyed component construction.
//!
//! Pipeline configs refer to components by a short name (`"bow"`) plus a bag
//! of options. [`Registry`] maps those names to factory functions so a config
//! can be turned into a ready [`Embedder`] without any runtime discovery.

use crate::encoding::{BagOfWordsEncoder, CountVector};
use crate::error::{EncoderError, Result};
use crate::vocab::VocabLookup;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form component options, as found in a pipeline config.
pub type ComponentOptions = Map<String, Value>;

/// Factory building a component from its options.
pub type ComponentFactory = fn(&ComponentOptions) -> Box<dyn Embedder>;

/// A pipeline stage that turns token batches into count vectors.
pub trait Embedder: Send + Sync {
    /// Registered name of the component.
    fn name(&self) -> &'static str;

    /// Encode `batch` against `vocab`, one vector per sample.
    fn embed(&self, batch: &[Vec<String>], vocab: &dyn VocabLookup) -> Result<Vec<CountVector>>;

    /// Like [`Embedder::embed`], free to spread the batch across threads.
    ///
    /// Must return what `embed` returns. Components without a parallel path
    /// keep the default, which encodes sequentially.
    fn embed_par(
        &self,
        batch: &[Vec<String>],
        vocab: &(dyn VocabLookup + Sync),
    ) -> Result<Vec<CountVector>> {
        self.embed(batch, vocab)
    }
}

/// Component entry of a pipeline config.
///
/// Every key besides the name is collected into `options`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentConfig {
    /// Registered component name
    #[serde(alias = "name")]
    pub class_name: String,
    /// Remaining keys, handed to the factory
    #[serde(flatten)]
    pub options: ComponentOptions,
}

impl ComponentConfig {
    /// Config naming `class_name` with no options.
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            options: ComponentOptions::new(),
        }
    }

    /// Parse a component entry from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for ComponentConfig {
    fn default() -> Self {
        Self::new(BagOfWordsEncoder::NAME)
    }
}

impl BagOfWordsEncoder {
    /// Name the encoder is registered under.
    pub const NAME: &'static str = "bow";

    /// Build an encoder from pipeline options.
    ///
    /// The encoder has nothing to configure, so every option is ignored.
    pub fn from_options(options: &ComponentOptions) -> Self {
        if !options.is_empty() {
            let keys: Vec<&str> = options.keys().map(String::as_str).collect();
            tracing::debug!(?keys, "ignoring bag-of-words options");
        }
        Self::new()
    }
}

impl Embedder for BagOfWordsEncoder {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn embed(&self, batch: &[Vec<String>], vocab: &dyn VocabLookup) -> Result<Vec<CountVector>> {
        self.encode_batch(batch, vocab)
    }

    fn embed_par(
        &self,
        batch: &[Vec<String>],
        vocab: &(dyn VocabLookup + Sync),
    ) -> Result<Vec<CountVector>> {
        self.encode_batch_par(batch, vocab)
    }
}

fn build_bow(options: &ComponentOptions) -> Box<dyn Embedder> {
    Box::new(BagOfWordsEncoder::from_options(options))
}

/// Built-in components, in registration order.
const BUILTIN: &[(&str, ComponentFactory)] = &[(BagOfWordsEncoder::NAME, build_bow)];

/// Table of component factories keyed by name.
#[derive(Clone)]
pub struct Registry {
    entries: Vec<(&'static str, ComponentFactory)>,
}

impl Registry {
    /// Registry holding the built-in components.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN.to_vec(),
        }
    }

    /// Register a factory, replacing any existing entry with the same name.
    pub fn register(&mut self, name: &'static str, factory: ComponentFactory) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = factory,
            None => self.entries.push((name, factory)),
        }
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Check whether a component is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| *n == name)
    }

    /// Build the component a config entry names.
    pub fn create(&self, config: &ComponentConfig) -> Result<Box<dyn Embedder>> {
        let factory = self
            .entries
            .iter()
            .find(|(name, _)| *name == config.class_name)
            .map(|(_, factory)| *factory)
            .ok_or_else(|| EncoderError::UnknownComponent {
                name: config.class_name.clone(),
                known: self.names().collect::<Vec<_>>().join(", "),
            })?;

        tracing::debug!(component = %config.class_name, "building component");
        Ok(factory(&config.options))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

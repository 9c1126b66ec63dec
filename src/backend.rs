//! Tokenizer adapter over the HuggingFace `tokenizers` crate
//!
//! The backing library owns vocabulary lookup, subword segmentation, and
//! special-token insertion; this module only resolves a checkpoint name to a
//! tokenizer and exposes the two operations the explorer needs.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use hf_hub::{api::sync::Api, Repo, RepoType};
use tokenizers::Tokenizer;
use tracing::info;

use crate::checkpoint::{Checkpoint, TokenizerFamily};

/// Capability interface onto a resolved tokenizer.
///
/// `encode` follows the library's special-token policy when
/// `add_special_tokens` is true and suppresses it otherwise; `decode_token`
/// maps one ID back to its sub-string, special markers included.
pub trait TokenBackend {
    fn encode(&self, text: &str, add_special_tokens: bool) -> Result<Vec<u32>>;
    fn decode_token(&self, id: u32) -> Result<String>;
}

/// A tokenizer loaded from a HuggingFace `tokenizer.json`.
pub struct HfTokenizer {
    inner: Tokenizer,
}

impl HfTokenizer {
    /// Download `tokenizer.json` for a checkpoint from the Hub and load it.
    pub fn from_hub(checkpoint: Checkpoint) -> Result<Self> {
        info!("Loading tokenizer: {}", checkpoint);
        let api = Api::new()?;
        let repo = api.repo(Repo::new(checkpoint.as_str().to_string(), RepoType::Model));
        let tokenizer_path = repo
            .get("tokenizer.json")
            .with_context(|| format!("Failed to download tokenizer.json for '{checkpoint}'"))?;
        Self::from_file(&tokenizer_path)
    }

    /// Load from a local `tokenizer.json` file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let inner = Tokenizer::from_file(path)
            .map_err(|e| anyhow::anyhow!("Tokenizer error: {e}"))?;
        Ok(Self { inner })
    }

    /// Wrap an already-built tokenizer.
    pub fn from_tokenizer(inner: Tokenizer) -> Self {
        Self { inner }
    }
}

impl TokenBackend for HfTokenizer {
    fn encode(&self, text: &str, add_special_tokens: bool) -> Result<Vec<u32>> {
        let encoding = self
            .inner
            .encode(text, add_special_tokens)
            .map_err(|e| anyhow::anyhow!("Tokenization error: {e}"))?;
        Ok(encoding.get_ids().to_vec())
    }

    fn decode_token(&self, id: u32) -> Result<String> {
        self.inner
            .decode(&[id], false)
            .map_err(|e| anyhow::anyhow!("Decoding error for token {id}: {e}"))
    }
}

/// Resolves checkpoints to tokenizer backends.
pub trait TokenizerProvider {
    fn get(&mut self, checkpoint: Checkpoint) -> Result<Arc<dyn TokenBackend>>;
}

/// Hub-backed provider with one memoized tokenizer per checkpoint.
///
/// Memoization only avoids repeated downloads across runs; every run still
/// encodes and decodes from scratch.
#[derive(Default)]
pub struct HubProvider {
    cache: HashMap<Checkpoint, Arc<dyn TokenBackend>>,
}

impl HubProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenizerProvider for HubProvider {
    fn get(&mut self, checkpoint: Checkpoint) -> Result<Arc<dyn TokenBackend>> {
        if let Some(backend) = self.cache.get(&checkpoint) {
            return Ok(Arc::clone(backend));
        }

        let backend: Arc<dyn TokenBackend> = match checkpoint.family() {
            TokenizerFamily::Bert => Arc::new(HfTokenizer::from_hub(checkpoint)?),
        };

        self.cache.insert(checkpoint, Arc::clone(&backend));
        Ok(backend)
    }
}

//! The linear encode/decode pass
//!
//! One run turns the two mutable inputs (checkpoint, text) into a
//! [`TokenReport`]: the default-policy encoding decoded pair by pair, plus
//! the length of the special-token-suppressed encoding. Nothing survives a
//! run; every interaction rebuilds the report from scratch.

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::backend::TokenBackend;
use crate::checkpoint::Checkpoint;

/// A token ID paired with its decoded sub-string.
///
/// Ordering mirrors the encoding; sub-strings may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedToken {
    pub id: u32,
    pub piece: String,
}

/// Output of one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct TokenReport {
    pub checkpoint: Checkpoint,
    pub text: String,
    /// Default-policy encoding, decoded per token (special markers included).
    pub tokens: Vec<DecodedToken>,
    /// Length of the encoding with special tokens suppressed.
    pub token_count: usize,
}

/// Run the full pass: encode, decode each token, count without specials.
pub fn run(backend: &dyn TokenBackend, checkpoint: Checkpoint, text: &str) -> Result<TokenReport> {
    let ids = backend.encode(text, true)?;
    debug!("Encoded {} tokens for checkpoint {}", ids.len(), checkpoint);

    let tokens = ids
        .iter()
        .map(|&id| {
            let piece = backend.decode_token(id)?;
            Ok(DecodedToken { id, piece })
        })
        .collect::<Result<Vec<_>>>()?;

    let token_count = backend.encode(text, false)?.len();

    Ok(TokenReport {
        checkpoint,
        text: text.to_string(),
        tokens,
        token_count,
    })
}

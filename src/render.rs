//! Markdown-style rendering of token reports
//!
//! One bullet per (ID, sub-string) pair in encoding order, then the token
//! count as a labeled metric. No pagination, no truncation, no sorting.

use std::fmt::Write;

use crate::checkpoint::Checkpoint;
use crate::pipeline::TokenReport;

pub fn render_title() -> String {
    "=== Tokenizer Testing ===".to_string()
}

/// Render the checkpoint selector, marking the current choice.
pub fn render_checkpoint_list(current: Checkpoint) -> String {
    let mut out = String::from("checkpoints:\n");
    for checkpoint in Checkpoint::ALL {
        let marker = if checkpoint == current { '*' } else { ' ' };
        let _ = writeln!(out, "  {marker} {checkpoint}");
    }
    out.pop();
    out
}

/// Render a report: `` - `id: piece` `` per token, then `tokens: N`.
pub fn render_report(report: &TokenReport) -> String {
    let mut out = String::new();
    for token in &report.tokens {
        let _ = writeln!(out, "- `{}: {}`", token.id, token.piece);
    }
    let _ = write!(out, "\ntokens: {}", report.token_count);
    out
}

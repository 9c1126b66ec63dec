#![allow(clippy::module_name_repetitions)] // HfTokenizer in backend.rs is fine
#![allow(clippy::must_use_candidate)] // #[must_use] on every pure fn is excessive
#![allow(clippy::missing_errors_doc)] // # Errors section for every Result fn

//! tokscope: interactive tokenizer checkpoint explorer
//!
//! Pick a pretrained checkpoint, type text, and inspect the resulting
//! token IDs alongside their decoded sub-strings and a token count. All
//! segmentation and special-token handling is delegated to the HuggingFace
//! `tokenizers` crate; checkpoints are fetched from the Hub.
//!
//! ## Architecture
//!
//! - `checkpoint`: The fixed set of supported checkpoint presets
//! - `backend`: Tokenizer adapter over the `tokenizers` crate, plus
//!   checkpoint resolution and per-checkpoint memoization
//! - `pipeline`: The linear encode/decode pass producing a token report
//! - `render`: Markdown-style rendering of reports and the selector
//! - `app`: Explicit event loop re-running the pipeline on each input change

pub mod app;
pub mod backend;
pub mod checkpoint;
pub mod pipeline;
pub mod render;

pub use app::{parse_event, App, InputEvent, Outcome};
pub use backend::{HfTokenizer, HubProvider, TokenBackend, TokenizerProvider};
pub use checkpoint::{Checkpoint, TokenizerFamily};
pub use pipeline::{run, DecodedToken, TokenReport};
pub use render::{render_checkpoint_list, render_report, render_title};

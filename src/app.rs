//! Explicit event loop over the linear pipeline
//!
//! Each input-change event re-runs the full pass with the current
//! (checkpoint, text) pair. A failed run renders an error notice in place of
//! the output; the inputs are kept and the next event starts fresh.

use anyhow::{anyhow, Result};

use crate::backend::TokenizerProvider;
use crate::checkpoint::Checkpoint;
use crate::pipeline::{self, TokenReport};
use crate::render;

/// One user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Replace the input text.
    SetText(String),
    /// Switch the active checkpoint.
    SelectCheckpoint(Checkpoint),
    /// Show the selector listing.
    ListCheckpoints,
    Help,
    /// Re-run with unchanged inputs.
    Rerun,
    Quit,
}

/// Parse one input line into an event.
///
/// Lines starting with `:` are commands; anything else replaces the text.
/// An empty line re-runs with unchanged inputs.
pub fn parse_event(line: &str) -> Result<InputEvent> {
    let line = line.trim_end_matches(['\r', '\n']);
    if !line.starts_with(':') {
        return Ok(if line.is_empty() {
            InputEvent::Rerun
        } else {
            InputEvent::SetText(line.to_string())
        });
    }

    let mut parts = line.splitn(2, char::is_whitespace);
    let command = parts.next().unwrap_or_default();
    let arg = parts.next().map(str::trim).unwrap_or_default();

    match command {
        ":checkpoint" => {
            if arg.is_empty() {
                return Err(anyhow!("usage: :checkpoint NAME"));
            }
            Ok(InputEvent::SelectCheckpoint(arg.parse()?))
        }
        ":checkpoints" => Ok(InputEvent::ListCheckpoints),
        ":help" => Ok(InputEvent::Help),
        ":quit" | ":q" => Ok(InputEvent::Quit),
        other => Err(anyhow!("unknown command '{other}', try :help")),
    }
}

const HELP: &str = "\
type text to tokenize it with the current checkpoint
  :checkpoint NAME   switch checkpoint
  :checkpoints       list checkpoints
  :help              show this help
  :quit              exit";

/// What the loop should show after applying an event.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Render(String),
    Quit,
}

/// The two mutable inputs plus the tokenizer source.
pub struct App<P: TokenizerProvider> {
    checkpoint: Checkpoint,
    text: String,
    provider: P,
}

impl<P: TokenizerProvider> App<P> {
    pub fn new(checkpoint: Checkpoint, text: String, provider: P) -> Self {
        Self {
            checkpoint,
            text,
            provider,
        }
    }

    pub fn checkpoint(&self) -> Checkpoint {
        self.checkpoint
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Resolve the current checkpoint and run the pipeline once.
    pub fn run_once(&mut self) -> Result<TokenReport> {
        let backend = self.provider.get(self.checkpoint)?;
        pipeline::run(backend.as_ref(), self.checkpoint, &self.text)
    }

    /// Apply one event: update inputs, re-run, and render.
    ///
    /// Pipeline failures are rendered as an error notice rather than
    /// returned, so the loop keeps running with the inputs intact.
    pub fn apply(&mut self, event: InputEvent) -> Outcome {
        match event {
            InputEvent::Quit => return Outcome::Quit,
            InputEvent::Help => return Outcome::Render(HELP.to_string()),
            InputEvent::ListCheckpoints => {
                return Outcome::Render(render::render_checkpoint_list(self.checkpoint))
            }
            InputEvent::SetText(text) => self.text = text,
            InputEvent::SelectCheckpoint(checkpoint) => self.checkpoint = checkpoint,
            InputEvent::Rerun => {}
        }

        match self.run_once() {
            Ok(report) => Outcome::Render(render::render_report(&report)),
            Err(e) => Outcome::Render(format!("error: {e:#}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::TokenBackend;
    use std::sync::Arc;

    struct FixtureBackend;

    impl TokenBackend for FixtureBackend {
        fn encode(&self, text: &str, add_special_tokens: bool) -> Result<Vec<u32>> {
            let mut ids: Vec<u32> = (0..text.split_whitespace().count() as u32).collect();
            if add_special_tokens {
                ids.insert(0, 101);
                ids.push(102);
            }
            Ok(ids)
        }

        fn decode_token(&self, id: u32) -> Result<String> {
            Ok(match id {
                101 => "[CLS]".into(),
                102 => "[SEP]".into(),
                n => format!("w{n}"),
            })
        }
    }

    struct FixtureProvider {
        resolutions: usize,
        fail: bool,
    }

    impl TokenizerProvider for FixtureProvider {
        fn get(&mut self, _checkpoint: Checkpoint) -> Result<Arc<dyn TokenBackend>> {
            self.resolutions += 1;
            if self.fail {
                return Err(anyhow!("checkpoint not found"));
            }
            Ok(Arc::new(FixtureBackend))
        }
    }

    fn app(fail: bool) -> App<FixtureProvider> {
        App::new(
            Checkpoint::default(),
            "one two".into(),
            FixtureProvider {
                resolutions: 0,
                fail,
            },
        )
    }

    #[test]
    fn test_parse_plain_line_sets_text() {
        assert_eq!(
            parse_event("hello world\n").unwrap(),
            InputEvent::SetText("hello world".into())
        );
    }

    #[test]
    fn test_parse_empty_line_reruns() {
        assert_eq!(parse_event("\n").unwrap(), InputEvent::Rerun);
    }

    #[test]
    fn test_parse_checkpoint_command() {
        assert_eq!(
            parse_event(":checkpoint bert-base-cased").unwrap(),
            InputEvent::SelectCheckpoint(Checkpoint::BertBaseCased)
        );
        assert!(parse_event(":checkpoint").is_err());
        assert!(parse_event(":checkpoint gpt2").is_err());
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = parse_event(":frobnicate").unwrap_err();
        assert!(err.to_string().contains(":frobnicate"));
    }

    #[test]
    fn test_set_text_rerenders() {
        let mut app = app(false);
        let outcome = app.apply(InputEvent::SetText("a b c".into()));
        match outcome {
            Outcome::Render(out) => {
                assert!(out.contains("- `101: [CLS]`"));
                assert!(out.contains("tokens: 3"));
            }
            Outcome::Quit => panic!("expected a render"),
        }
        assert_eq!(app.text(), "a b c");
    }

    #[test]
    fn test_select_checkpoint_updates_state() {
        let mut app = app(false);
        app.apply(InputEvent::SelectCheckpoint(Checkpoint::BertLargeCased));
        assert_eq!(app.checkpoint(), Checkpoint::BertLargeCased);
    }

    #[test]
    fn test_every_event_reresolves() {
        let mut app = app(false);
        app.apply(InputEvent::Rerun);
        app.apply(InputEvent::SetText("x".into()));
        assert_eq!(app.provider.resolutions, 2);
    }

    #[test]
    fn test_failure_renders_notice_and_keeps_inputs() {
        let mut app = app(true);
        let outcome = app.apply(InputEvent::SetText("new text".into()));
        match outcome {
            Outcome::Render(out) => assert!(out.starts_with("error:")),
            Outcome::Quit => panic!("expected a render"),
        }
        assert_eq!(app.text(), "new text");
    }

    #[test]
    fn test_quit_short_circuits() {
        let mut app = app(false);
        assert_eq!(app.apply(InputEvent::Quit), Outcome::Quit);
        assert_eq!(app.provider.resolutions, 0);
    }
}

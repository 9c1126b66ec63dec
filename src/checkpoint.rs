//! Supported tokenizer checkpoint presets

use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use clap::ValueEnum;
use serde::Serialize;

/// A named, pretrained tokenizer configuration on the HuggingFace Hub.
///
/// The set is fixed; `Checkpoint::ALL` lists the presets in selector order
/// with the default first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Checkpoint {
    BertBaseUncased,
    BertBaseCased,
    BertLargeUncased,
    BertLargeCased,
}

/// Tokenizer family behind a checkpoint.
///
/// Checkpoint names resolve to a concrete tokenizer implementation through
/// this mapping. All four current presets are WordPiece-based BERT
/// tokenizers; new families get a variant here and an arm in
/// [`crate::backend::HubProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerFamily {
    Bert,
}

impl Checkpoint {
    /// All supported checkpoints, default first.
    pub const ALL: [Checkpoint; 4] = [
        Checkpoint::BertBaseUncased,
        Checkpoint::BertBaseCased,
        Checkpoint::BertLargeUncased,
        Checkpoint::BertLargeCased,
    ];

    /// The Hub model ID for this checkpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            Checkpoint::BertBaseUncased => "bert-base-uncased",
            Checkpoint::BertBaseCased => "bert-base-cased",
            Checkpoint::BertLargeUncased => "bert-large-uncased",
            Checkpoint::BertLargeCased => "bert-large-cased",
        }
    }

    /// Map this checkpoint to its tokenizer family.
    pub fn family(self) -> TokenizerFamily {
        match self {
            Checkpoint::BertBaseUncased
            | Checkpoint::BertBaseCased
            | Checkpoint::BertLargeUncased
            | Checkpoint::BertLargeCased => TokenizerFamily::Bert,
        }
    }

    /// Whether this checkpoint lowercases input before segmentation.
    pub fn is_uncased(self) -> bool {
        matches!(
            self,
            Checkpoint::BertBaseUncased | Checkpoint::BertLargeUncased
        )
    }
}

impl Default for Checkpoint {
    fn default() -> Self {
        Checkpoint::ALL[0]
    }
}

impl fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Checkpoint {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Checkpoint::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                let options: Vec<&str> = Checkpoint::ALL.iter().map(|c| c.as_str()).collect();
                anyhow!(
                    "unknown checkpoint '{s}', expected one of: {}",
                    options.join(", ")
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first() {
        assert_eq!(Checkpoint::default(), Checkpoint::ALL[0]);
        assert_eq!(Checkpoint::default().as_str(), "bert-base-uncased");
    }

    #[test]
    fn test_roundtrip_names() {
        for checkpoint in Checkpoint::ALL {
            let parsed: Checkpoint = checkpoint.as_str().parse().unwrap();
            assert_eq!(parsed, checkpoint);
            assert_eq!(checkpoint.to_string(), checkpoint.as_str());
        }
    }

    #[test]
    fn test_unknown_name_lists_options() {
        let err = "gpt2".parse::<Checkpoint>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("gpt2"));
        assert!(msg.contains("bert-base-uncased"));
        assert!(msg.contains("bert-large-cased"));
    }

    #[test]
    fn test_family_mapping() {
        for checkpoint in Checkpoint::ALL {
            assert_eq!(checkpoint.family(), TokenizerFamily::Bert);
        }
    }

    #[test]
    fn test_casing_flag() {
        assert!(Checkpoint::BertBaseUncased.is_uncased());
        assert!(Checkpoint::BertLargeUncased.is_uncased());
        assert!(!Checkpoint::BertBaseCased.is_uncased());
        assert!(!Checkpoint::BertLargeCased.is_uncased());
    }
}

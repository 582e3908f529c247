//! Configuration options for paste cleaning
//!
//! Mirrors the two knobs embedders care about: the output format and
//! whether the AI-assisted path should be attempted. Options deserialize
//! from the loose JSON shape bindings pass in (`format` as a lowercase
//! string, `ai` as a boolean or a credential string).

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Output representation produced by the cleaner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Cleaned HTML fragment (default)
    #[default]
    Html,
    /// Markdown rendition of the cleaned fragment
    Markdown,
}

/// How (and whether) the AI-assisted cleaner should be engaged
///
/// `Disabled` is the default and means rule-based cleaning only. `Ambient`
/// resolves the credential from the environment at call time. `Key` carries
/// an explicit credential. Wire form is `false` / `true` / `"<api-key>"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AiMode {
    /// Rule-based cleaning only
    #[default]
    Disabled,
    /// Use the ambient `GEMINI_API_KEY` credential
    Ambient,
    /// Use this value as the credential directly
    Key(String),
}

impl AiMode {
    /// Whether the caller asked for the AI path at all
    #[must_use]
    pub fn is_requested(&self) -> bool {
        !matches!(self, AiMode::Disabled)
    }
}

impl From<bool> for AiMode {
    fn from(flag: bool) -> Self {
        if flag { AiMode::Ambient } else { AiMode::Disabled }
    }
}

impl From<String> for AiMode {
    fn from(key: String) -> Self {
        AiMode::Key(key)
    }
}

impl Serialize for AiMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AiMode::Disabled => serializer.serialize_bool(false),
            AiMode::Ambient => serializer.serialize_bool(true),
            AiMode::Key(key) => serializer.serialize_str(key),
        }
    }
}

impl<'de> Deserialize<'de> for AiMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Key(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Flag(flag) => AiMode::from(flag),
            Raw::Key(key) => AiMode::Key(key),
        })
    }
}

/// Options accepted by the cleaning entry points
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanOptions {
    /// Output format (default: HTML)
    pub format: OutputFormat,
    /// AI engagement mode (default: disabled)
    pub ai: AiMode,
}

impl CleanOptions {
    /// Options for markdown output with rule-based cleaning
    #[must_use]
    pub fn markdown() -> Self {
        Self {
            format: OutputFormat::Markdown,
            ..Self::default()
        }
    }
}

//! Rendering context: which subset of formatting is honoured.

use std::fmt;
use std::str::FromStr;

/// Where the rendered markup will be shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RenderContext {
    /// Full message content.
    #[default]
    Content,
    /// Compact quoted preview of a replied-to message. Block-level
    /// formatting collapses to inline.
    Reply,
    /// Minimal header text. Mentions, emoji, and timestamps show their raw
    /// fallback text and are never resolved.
    Header,
}

impl RenderContext {
    /// Lowercase name of the context.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Reply => "reply",
            Self::Header => "header",
        }
    }
}

impl fmt::Display for RenderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown context name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseContextError(String);

impl fmt::Display for ParseContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown render context '{}' (expected content, reply, or header)",
            self.0
        )
    }
}

impl std::error::Error for ParseContextError {}

impl FromStr for RenderContext {
    type Err = ParseContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "content" => Ok(Self::Content),
            "reply" => Ok(Self::Reply),
            "header" => Ok(Self::Header),
            _ => Err(ParseContextError(s.to_owned())),
        }
    }
}

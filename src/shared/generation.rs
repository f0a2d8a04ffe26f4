//! Generation Types and Payloads
//!
//! The AI endpoint produces one of six fixed content shapes. Each shape has
//! its own prompt template, demo template and token budget.
//!
//! # Token Budgets
//!
//! | type      | max tokens |
//! |-----------|-----------:|
//! | `section` | 500        |
//! | `full`    | 2000       |
//! | `outline` | 1500       |
//! | `title`   | 300        |
//! | `tags`    | 200        |
//! | `meta`    | 150        |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::error::SharedError;

/// Content shape requested from the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationType {
    /// A single article section
    #[default]
    Section,
    /// A complete article
    Full,
    /// A structured article outline
    Outline,
    /// Headline suggestions
    Title,
    /// SEO tags
    Tags,
    /// Meta description
    Meta,
}

impl GenerationType {
    /// All generation types, in the order the editor lists them
    pub const ALL: [GenerationType; 6] = [
        GenerationType::Section,
        GenerationType::Full,
        GenerationType::Outline,
        GenerationType::Title,
        GenerationType::Tags,
        GenerationType::Meta,
    ];

    /// Wire name of this type
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Section => "section",
            Self::Full => "full",
            Self::Outline => "outline",
            Self::Title => "title",
            Self::Tags => "tags",
            Self::Meta => "meta",
        }
    }

    /// Completion token budget for this type
    pub fn max_tokens(self) -> u32 {
        match self {
            Self::Section => 500,
            Self::Full => 2000,
            Self::Outline => 1500,
            Self::Title => 300,
            Self::Tags => 200,
            Self::Meta => 150,
        }
    }

    /// Parse a type name, substituting `section` for anything unrecognized
    ///
    /// Template lookups use this; request validation uses [`FromStr`] and
    /// rejects unknown values instead.
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl fmt::Display for GenerationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenerationType {
    type Err = SharedError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| SharedError::unknown_generation_type(value))
    }
}

/// Validated generation request
///
/// Built by the route handler once `prompt` and `type` have been checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Topic or instruction entered in the composer
    pub prompt: String,
    /// Requested content shape
    #[serde(rename = "type")]
    pub kind: GenerationType,
}

/// Generation result returned to the editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// Generated text (markdown)
    pub text: String,
    /// Content shape that was generated
    #[serde(rename = "type")]
    pub kind: GenerationType,
    /// When the response was produced
    pub timestamp: DateTime<Utc>,
    /// `true` when the text came from the demo generator
    pub demo: bool,
}

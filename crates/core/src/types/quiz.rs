//! Skin quiz results.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Skin type as reported by the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinType {
    Oily,
    Dry,
    Combination,
    Normal,
}

impl SkinType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Oily => "oily",
            Self::Dry => "dry",
            Self::Combination => "combination",
            Self::Normal => "normal",
        }
    }
}

impl std::fmt::Display for SkinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a skin type from user input.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown skin type '{0}' (expected oily, dry, combination, or normal)")]
pub struct ParseSkinTypeError(String);

impl std::str::FromStr for SkinType {
    type Err = ParseSkinTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "oily" => Ok(Self::Oily),
            "dry" => Ok(Self::Dry),
            "combination" => Ok(Self::Combination),
            "normal" => Ok(Self::Normal),
            other => Err(ParseSkinTypeError(other.to_string())),
        }
    }
}

/// Outcome of a completed skin quiz.
///
/// Transient derived state; overwritten on each quiz completion, no history
/// retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinQuizResult {
    pub skin_type: SkinType,
    /// Concern tags driving recommendation filtering (e.g. `"aging"`).
    pub concerns: Vec<String>,
}

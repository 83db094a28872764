//! Wire types for the Generative Language API, plus the structured shapes
//! exchanged with the rest of the crate.

use serde::{Deserialize, Serialize};

use lumiere_core::Routine;

// =============================================================================
// Conversation Types
// =============================================================================

/// Speaker role in a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// The shopper.
    User,
    /// The assistant.
    Model,
}

impl ChatRole {
    /// Wire string for the API (`"user"` / `"model"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Model => "model",
        }
    }
}

/// One turn of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl ChatTurn {
    /// A user turn.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    /// An assistant turn.
    #[must_use]
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }
}

// =============================================================================
// Structured Rewrite Output
// =============================================================================

/// Structured listing copy produced by the rewrite call.
///
/// Deserialization doubles as shape validation: a response missing any
/// field or carrying an unknown routine fails to parse and the caller
/// falls back to the raw supplier copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRewrite {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub benefits: Vec<String>,
    pub routine: Routine,
}

// =============================================================================
// Request Types
// =============================================================================

/// A `generateContent` request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// A content block: an optional role plus ordered parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// A single-part content block with a role.
    #[must_use]
    pub fn with_role(role: &str, text: impl Into<String>) -> Self {
        Self {
            role: Some(role.to_string()),
            parts: vec![Part { text: text.into() }],
        }
    }

    /// A single-part content block without a role (system instructions).
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// A text part of a content block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

/// Generation tuning and structured-output settings.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
}

// =============================================================================
// Response Types
// =============================================================================

/// A `generateContent` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate, empty when the response
    /// carried no text.
    #[must_use]
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

/// One response candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_camel_case() {
        let request = GenerateRequest {
            contents: vec![Content::with_role("user", "hello")],
            system_instruction: Some(Content::text("be helpful")),
            generation_config: Some(GenerationConfig {
                temperature: Some(0.7),
                response_mime_type: None,
                response_schema: None,
            }),
        };

        let json = serde_json::to_value(&request).expect("serialize");
        assert!(json.get("systemInstruction").is_some());
        assert!(json.get("generationConfig").is_some());
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
    }

    #[test]
    fn test_response_text_extraction() {
        let json = r#"{
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "Good " }, { "text": "morning." }] } }
            ]
        }"#;
        let response: GenerateResponse = serde_json::from_str(json).expect("deserialize");
        assert_eq!(response.text(), "Good morning.");
    }

    #[test]
    fn test_response_without_candidates_is_empty_text() {
        let response: GenerateResponse = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(response.text(), "");
    }

    #[test]
    fn test_product_rewrite_validates_shape() {
        let valid = r#"{
            "name": "Radiance Sonic Purifier",
            "tagline": "Pristine brushes, luminous skin.",
            "description": "Two elegant paragraphs.",
            "benefits": ["Gentle", "Fast"],
            "routine": "PM"
        }"#;
        let rewrite: ProductRewrite = serde_json::from_str(valid).expect("deserialize");
        assert_eq!(rewrite.routine, Routine::Pm);

        // Unknown routine value fails shape validation.
        let invalid = valid.replace("\"PM\"", "\"Weekly\"");
        assert!(serde_json::from_str::<ProductRewrite>(&invalid).is_err());

        // Missing field fails shape validation.
        let missing = r#"{ "name": "X", "tagline": "Y", "description": "Z", "routine": "AM" }"#;
        assert!(serde_json::from_str::<ProductRewrite>(missing).is_err());
    }
}

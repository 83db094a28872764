//! HTTP client for the Google Generative Language API.

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use tracing::instrument;

use crate::config::GeminiConfig;

use super::TextGeneration;
use super::error::{ApiErrorResponse, GeminiError};
use super::types::{
    ChatTurn, Content, GenerateRequest, GenerateResponse, GenerationConfig, ProductRewrite,
};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const CHAT_TEMPERATURE: f32 = 0.7;

/// Gemini API client.
///
/// Cheaply cloneable via `Arc`; one instance serves both the concierge
/// chat and the structured product rewrite.
#[derive(Clone)]
pub struct GeminiClient {
    inner: Arc<GeminiClientInner>,
}

struct GeminiClientInner {
    client: reqwest::Client,
    chat_model: String,
    rewrite_model: String,
}

impl GeminiClient {
    /// Create a new Gemini client.
    ///
    /// # Panics
    ///
    /// Panics if the API key contains invalid header characters.
    #[must_use]
    pub fn new(config: &GeminiConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(config.api_key.expose_secret())
                .expect("Invalid API key for header"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(GeminiClientInner {
                client,
                chat_model: config.chat_model.clone(),
                rewrite_model: config.rewrite_model.clone(),
            }),
        }
    }

    /// Send a `generateContent` request and return the first candidate's
    /// text (empty when the model returned none).
    async fn generate(&self, model: &str, request: GenerateRequest) -> Result<String, GeminiError> {
        let url = format!("{GEMINI_API_BASE}/models/{model}:generateContent");
        let response = self.inner.client.post(&url).json(&request).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map_or(body, |api_error| api_error.error.message);
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse = serde_json::from_str(&body)
            .map_err(|e| GeminiError::Parse(format!("Failed to parse response: {e}")))?;
        Ok(parsed.text())
    }
}

/// The prompt wrapper for the structured rewrite call.
fn rewrite_prompt(name: &str, raw_description: &str) -> String {
    format!(
        "Rewrite this AliExpress product description for a luxury beauty brand called \"Lumiere\".\n\
         Make it sound sophisticated, elegant, and focus on beauty benefits, self-care routines, and high-quality results.\n\
         \n\
         Product Name: {name}\n\
         Original: {raw_description}\n\
         \n\
         Provide:\n\
         1. A catchy product name\n\
         2. An elegant short tagline\n\
         3. A persuasive long description (2-3 paragraphs)\n\
         4. A list of 3-5 key beauty benefits\n\
         5. Suggested routine (AM, PM, or Both)"
    )
}

/// JSON schema constraining the rewrite output.
fn rewrite_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING" },
            "tagline": { "type": "STRING" },
            "description": { "type": "STRING" },
            "benefits": { "type": "ARRAY", "items": { "type": "STRING" } },
            "routine": { "type": "STRING" }
        },
        "required": ["name", "tagline", "description", "benefits", "routine"]
    })
}

impl TextGeneration for GeminiClient {
    #[instrument(skip(self, history, system_instruction), fields(model = %self.inner.chat_model))]
    async fn chat(
        &self,
        history: &[ChatTurn],
        system_instruction: &str,
    ) -> Result<String, GeminiError> {
        let request = GenerateRequest {
            contents: history
                .iter()
                .map(|turn| Content::with_role(turn.role.as_str(), turn.text.clone()))
                .collect(),
            system_instruction: Some(Content::text(system_instruction)),
            generation_config: Some(GenerationConfig {
                temperature: Some(CHAT_TEMPERATURE),
                response_mime_type: None,
                response_schema: None,
            }),
        };

        self.generate(&self.inner.chat_model, request).await
    }

    #[instrument(skip(self, raw_description), fields(model = %self.inner.rewrite_model))]
    async fn rewrite_product(
        &self,
        name: &str,
        raw_description: &str,
    ) -> Result<ProductRewrite, GeminiError> {
        let request = GenerateRequest {
            contents: vec![Content::with_role(
                "user",
                rewrite_prompt(name, raw_description),
            )],
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                temperature: None,
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(rewrite_schema()),
            }),
        };

        let text = self.generate(&self.inner.rewrite_model, request).await?;
        if text.trim().is_empty() {
            return Err(GeminiError::Parse(
                "rewrite response contained no text".to_string(),
            ));
        }
        serde_json::from_str(&text)
            .map_err(|e| GeminiError::Parse(format!("Malformed rewrite payload: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn config() -> GeminiConfig {
        GeminiConfig {
            api_key: SecretString::from("test-key"),
            chat_model: "gemini-3-pro-preview".to_string(),
            rewrite_model: "gemini-3-flash-preview".to_string(),
        }
    }

    #[test]
    fn test_rewrite_prompt_embeds_inputs() {
        let prompt = rewrite_prompt("Sonic Brush", "100% brand new.");
        assert!(prompt.contains("Product Name: Sonic Brush"));
        assert!(prompt.contains("Original: 100% brand new."));
        assert!(prompt.contains("luxury beauty brand"));
    }

    #[test]
    fn test_rewrite_schema_requires_all_fields() {
        let schema = rewrite_schema();
        let required = schema["required"].as_array().expect("required");
        assert_eq!(required.len(), 5);
        assert!(required.iter().any(|v| v == "routine"));
    }

    #[test]
    fn test_gemini_client_is_clone_send_sync() {
        fn assert_clone<T: Clone>() {}
        fn assert_send_sync<T: Send + Sync>() {}
        assert_clone::<GeminiClient>();
        assert_send_sync::<GeminiClient>();
        let _client = GeminiClient::new(&config());
    }
}

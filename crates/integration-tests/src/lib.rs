//! Integration tests for the Lumiere storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p lumiere-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `store_lifecycle` - Shopper journey over a durable store
//! - `recommendations` - Quiz-driven recommendation scenarios
//! - `import_flow` - Supplier import end to end
//! - `concierge` - Concierge chat over a scripted backend
//!
//! This module provides the shared fixtures: a scripted text-generation
//! backend standing in for the Gemini API, and temp-file storage paths.

use std::path::PathBuf;

use lumiere_core::Routine;
use lumiere_storefront::gemini::{ChatTurn, GeminiError, ProductRewrite, TextGeneration};

/// A unique temp file path for one test's durable store.
#[must_use]
pub fn temp_storage_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("lumiere-it-{tag}-{}.json", uuid::Uuid::new_v4()))
}

/// Scripted stand-in for the Gemini API.
///
/// Replies with fixed payloads, or errors when `available` is false, so
/// tests cover both the happy path and every fallback branch without
/// touching the network.
pub struct ScriptedBackend {
    pub available: bool,
    pub chat_reply: String,
}

impl ScriptedBackend {
    #[must_use]
    pub fn up() -> Self {
        Self {
            available: true,
            chat_reply: "A gentle PM ritual would suit you beautifully.".to_string(),
        }
    }

    #[must_use]
    pub fn down() -> Self {
        Self {
            available: false,
            chat_reply: String::new(),
        }
    }
}

impl TextGeneration for ScriptedBackend {
    async fn chat(
        &self,
        _history: &[ChatTurn],
        _system_instruction: &str,
    ) -> Result<String, GeminiError> {
        if self.available {
            Ok(self.chat_reply.clone())
        } else {
            Err(GeminiError::Api {
                status: 503,
                message: "model overloaded".to_string(),
            })
        }
    }

    async fn rewrite_product(
        &self,
        name: &str,
        _raw_description: &str,
    ) -> Result<ProductRewrite, GeminiError> {
        if self.available {
            Ok(ProductRewrite {
                name: format!("Lumiere {name}"),
                tagline: "Refined radiance, daily.".to_string(),
                description: "A refined addition to your beauty ritual.".to_string(),
                benefits: vec!["Gentle on skin".to_string(), "Salon results".to_string()],
                routine: Routine::Both,
            })
        } else {
            Err(GeminiError::Api {
                status: 503,
                message: "model overloaded".to_string(),
            })
        }
    }
}

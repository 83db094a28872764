//! Gemini API client for the concierge chat and product rewrites.
//!
//! This is the LLM service boundary: callers never let a failure here
//! propagate to the user. The concierge substitutes a fixed apology on
//! error and the importer falls back to the raw supplier copy.

pub mod client;
pub mod error;
pub mod types;

use std::future::Future;

pub use client::GeminiClient;
pub use error::GeminiError;
pub use types::{ChatRole, ChatTurn, ProductRewrite};

/// Text-generation backend used by the concierge and the import flow.
///
/// Abstracted so services can be tested against mocks instead of the
/// network; [`GeminiClient`] is the production implementation.
pub trait TextGeneration: Send + Sync {
    /// Send a conversation and get a free-text reply.
    ///
    /// `history` is the ordered conversation including the latest user
    /// turn; `system_instruction` carries the catalog context.
    fn chat(
        &self,
        history: &[ChatTurn],
        system_instruction: &str,
    ) -> impl Future<Output = Result<String, GeminiError>> + Send;

    /// Rewrite raw supplier copy into structured luxury-brand listing copy.
    fn rewrite_product(
        &self,
        name: &str,
        raw_description: &str,
    ) -> impl Future<Output = Result<ProductRewrite, GeminiError>> + Send;
}

//! The Lumiere Concierge: a catalog-aware beauty-advisor chat.
//!
//! Failure never reaches the shopper as an error: a backend failure is
//! logged and replaced by a fixed apology, and an empty reply by the
//! "momentarily unavailable" line.

use tracing::{instrument, warn};

use lumiere_core::Product;

use crate::gemini::{ChatTurn, TextGeneration};

/// Greeting shown when the chat opens.
pub const WELCOME_MESSAGE: &str = "Welcome to Lumiere Concierge. I am your personal beauty \
                                   advisor. How may I assist with your ritual today?";

/// Substituted when the backend call fails.
pub const CONNECTION_APOLOGY: &str =
    "I'm having a bit of trouble connecting to my beauty database. Please forgive me.";

/// Substituted when the backend returns an empty reply.
pub const UNAVAILABLE_APOLOGY: &str =
    "I apologize, I am momentarily unavailable to assist. Please try again shortly.";

/// Concierge chat service over a text-generation backend.
pub struct Concierge<G> {
    backend: G,
}

impl<G: TextGeneration> Concierge<G> {
    /// Create a concierge over `backend`.
    #[must_use]
    pub const fn new(backend: G) -> Self {
        Self { backend }
    }

    /// Build the system instruction embedding the current catalog summary.
    #[must_use]
    pub fn system_instruction(products: &[Product]) -> String {
        let product_context = products
            .iter()
            .map(|p| {
                format!(
                    "Product: {}, Category: {}, Price: ${}, Benefits: {}",
                    p.name,
                    p.category,
                    p.price,
                    p.benefits.join(", ")
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "You are the Lumiere Concierge, a luxury beauty expert for Lumiere Beauty.\n\
             Your tone is sophisticated, elegant, and helpful.\n\
             You provide expert advice on skincare routines, beauty tools, and product recommendations.\n\
             Refer to the following product catalog when making suggestions:\n\
             {product_context}\n\
             Always encourage a sense of self-care and luxury rituals. If asked about shipping or \
             support, tell them our specialists handle everything with the utmost care \
             (12-14 days shipping)."
        )
    }

    /// Answer the shopper's latest message given the prior conversation.
    ///
    /// Always returns a displayable reply; failures are converted to the
    /// fixed apology strings rather than propagated.
    #[instrument(skip_all, fields(history_len = history.len()))]
    pub async fn reply(
        &self,
        products: &[Product],
        history: &[ChatTurn],
        user_message: &str,
    ) -> String {
        let mut turns = history.to_vec();
        turns.push(ChatTurn::user(user_message));

        let system_instruction = Self::system_instruction(products);

        match self.backend.chat(&turns, &system_instruction).await {
            Ok(text) if text.trim().is_empty() => UNAVAILABLE_APOLOGY.to_string(),
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "concierge chat failed");
                CONNECTION_APOLOGY.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::{GeminiError, ProductRewrite};
    use crate::store::seed::seed_products;

    /// Backend with canned behavior.
    struct CannedBackend {
        reply: Result<String, ()>,
    }

    impl TextGeneration for CannedBackend {
        async fn chat(
            &self,
            _history: &[ChatTurn],
            _system_instruction: &str,
        ) -> Result<String, GeminiError> {
            self.reply.clone().map_err(|()| GeminiError::Api {
                status: 500,
                message: "backend down".to_string(),
            })
        }

        async fn rewrite_product(
            &self,
            _name: &str,
            _raw_description: &str,
        ) -> Result<ProductRewrite, GeminiError> {
            Err(GeminiError::Parse("not used".to_string()))
        }
    }

    #[test]
    fn test_system_instruction_embeds_catalog() {
        let products = seed_products();
        let instruction = Concierge::<CannedBackend>::system_instruction(&products);

        assert!(instruction.contains("LumiGlow LED Therapy Mask"));
        assert!(instruction.contains("Category: Tools"));
        assert!(instruction.contains("Price: $129.99"));
        assert!(instruction.contains("Reduces fine lines, Kills acne bacteria"));
        assert!(instruction.contains("12-14 days shipping"));
    }

    #[tokio::test]
    async fn test_reply_passes_through_backend_text() {
        let concierge = Concierge::new(CannedBackend {
            reply: Ok("A PM ritual suits you.".to_string()),
        });
        let reply = concierge
            .reply(&seed_products(), &[], "What should I use at night?")
            .await;
        assert_eq!(reply, "A PM ritual suits you.");
    }

    #[tokio::test]
    async fn test_reply_substitutes_apology_on_error() {
        let concierge = Concierge::new(CannedBackend { reply: Err(()) });
        let reply = concierge.reply(&seed_products(), &[], "Hello").await;
        assert_eq!(reply, CONNECTION_APOLOGY);
    }

    #[tokio::test]
    async fn test_reply_substitutes_unavailable_on_empty_text() {
        let concierge = Concierge::new(CannedBackend {
            reply: Ok("  ".to_string()),
        });
        let reply = concierge.reply(&seed_products(), &[], "Hello").await;
        assert_eq!(reply, UNAVAILABLE_APOLOGY);
    }
}

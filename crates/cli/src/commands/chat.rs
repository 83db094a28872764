//! Interactive concierge chat.
//!
//! # Environment Variables
//!
//! - `GEMINI_API_KEY` - Google Generative Language API key

use std::io::Write as _;

use lumiere_storefront::config::StorefrontConfig;
use lumiere_storefront::gemini::{ChatTurn, GeminiClient};
use lumiere_storefront::services::Concierge;
use lumiere_storefront::services::concierge::WELCOME_MESSAGE;

use super::open_store;

/// Run an interactive chat session. An empty line or `exit` ends it.
pub async fn chat() -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let concierge = Concierge::new(GeminiClient::new(&config.gemini));
    let store = open_store();

    println!("{WELCOME_MESSAGE}");
    println!("(empty line or 'exit' to leave)");

    let mut history: Vec<ChatTurn> = Vec::new();
    let stdin = std::io::stdin();

    loop {
        print!("you> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let message = line.trim();
        if message.is_empty() || message.eq_ignore_ascii_case("exit") {
            break;
        }

        let reply = concierge.reply(store.products(), &history, message).await;
        println!("concierge> {reply}");

        history.push(ChatTurn::user(message));
        history.push(ChatTurn::model(reply));
    }

    Ok(())
}

//! Lumiere CLI - Storefront management and shopping from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Seed the storage file with the default catalog
//! lumiere seed
//!
//! # Browse the catalog
//! lumiere catalog list
//! lumiere catalog show ali-1
//!
//! # Shop
//! lumiere cart add ali-2 --quantity 2
//! lumiere cart show
//! lumiere order place -e customer@example.com
//!
//! # Skin quiz and recommendations
//! lumiere quiz submit --skin-type dry --concern aging --concern dullness
//!
//! # Admin: import a supplier product (requires GEMINI_API_KEY)
//! lumiere import https://aliexpress.com/item/1.html --margin 150
//!
//! # Talk to the concierge (requires GEMINI_API_KEY)
//! lumiere chat
//! ```
//!
//! # Commands
//!
//! - `seed` - Seed the storage file with the default catalog
//! - `catalog` - Browse and manage the product catalog
//! - `cart` - Manage the shopping cart
//! - `order` - Place orders and view history
//! - `quiz` - Submit the skin quiz and view recommendations
//! - `import` - Import a supplier product with AI-rewritten copy
//! - `chat` - Chat with the Lumiere Concierge

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "lumiere")]
#[command(author, version, about = "Lumiere storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the storage file with the default catalog
    Seed {
        /// Overwrite an existing storage file
        #[arg(long)]
        force: bool,
    },
    /// Browse and manage the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Place orders and view order history
    Order {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Submit the skin quiz and view recommendations
    Quiz {
        #[command(subcommand)]
        action: QuizAction,
    },
    /// Import a supplier product with AI-rewritten listing copy
    Import {
        /// Supplier listing URL
        url: String,

        /// Profit margin percent applied on the supplier cost (20-300)
        #[arg(short, long, default_value_t = 100)]
        margin: u32,
    },
    /// Chat with the Lumiere Concierge
    Chat,
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List all products
    List,
    /// Show a product in detail
    Show {
        /// Product id
        id: String,
    },
    /// Delete a product from the catalog
    Delete {
        /// Product id
        id: String,
    },
    /// Add a customer review to a product
    Review {
        /// Product id
        id: String,

        /// Reviewer display name
        #[arg(short, long)]
        name: String,

        /// Star rating (1-5)
        #[arg(short, long)]
        rating: u8,

        /// Review text
        #[arg(short, long)]
        comment: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product to the cart
    Add {
        /// Product id
        id: String,

        /// Quantity to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a cart line
    Remove {
        /// Product id
        id: String,
    },
    /// Set a cart line's quantity (0 removes the line)
    SetQuantity {
        /// Product id
        id: String,

        /// New quantity
        quantity: i64,
    },
    /// Show the cart contents and subtotal
    Show,
}

#[derive(Subcommand)]
enum OrderAction {
    /// Place an order from the current cart
    Place {
        /// Customer email address
        #[arg(short, long)]
        email: String,
    },
    /// List order history, most recent first
    List,
}

#[derive(Subcommand)]
enum QuizAction {
    /// Submit quiz answers and show recommendations
    Submit {
        /// Skin type (`dry`, `oily`, `combination`, `sensitive`, `normal`)
        #[arg(short, long)]
        skin_type: String,

        /// A concern; repeat the flag for multiple concerns
        #[arg(short, long = "concern")]
        concerns: Vec<String>,
    },
    /// Show recommendations for the stored quiz result
    Recommendations,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { force } => commands::seed::seed(force)?,
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list()?,
            CatalogAction::Show { id } => commands::catalog::show(&id)?,
            CatalogAction::Delete { id } => commands::catalog::delete(&id)?,
            CatalogAction::Review {
                id,
                name,
                rating,
                comment,
            } => commands::catalog::review(&id, &name, rating, &comment)?,
        },
        Commands::Cart { action } => match action {
            CartAction::Add { id, quantity } => commands::cart::add(&id, quantity)?,
            CartAction::Remove { id } => commands::cart::remove(&id)?,
            CartAction::SetQuantity { id, quantity } => {
                commands::cart::set_quantity(&id, quantity)?;
            }
            CartAction::Show => commands::cart::show()?,
        },
        Commands::Order { action } => match action {
            OrderAction::Place { email } => commands::order::place(&email)?,
            OrderAction::List => commands::order::list()?,
        },
        Commands::Quiz { action } => match action {
            QuizAction::Submit {
                skin_type,
                concerns,
            } => commands::quiz::submit(&skin_type, concerns)?,
            QuizAction::Recommendations => commands::quiz::recommendations()?,
        },
        Commands::Import { url, margin } => commands::import::import(&url, margin).await?,
        Commands::Chat => commands::chat::chat().await?,
    }
    Ok(())
}

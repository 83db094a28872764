//! Application services built on the store and the Gemini boundary.

pub mod concierge;
pub mod import;

pub use concierge::Concierge;
pub use import::ProductImporter;

//! Lumiere Core - Shared domain types library.
//!
//! This crate provides the domain model used across all Lumiere components:
//! - `storefront` - State store, derived views, recommendations, AI services
//! - `cli` - Command-line storefront client
//!
//! # Architecture
//!
//! The core crate contains only types and pure accessors - no I/O, no HTTP
//! clients, no persistence. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! Serde representations follow the persisted `lumiere-storage` layout:
//! camelCase keys, ISO-8601 timestamps, optional fields omitted when absent
//! and defaulted when missing so older persisted shapes still load.
//!
//! # Modules
//!
//! - [`types`] - Catalog, cart, order, and skin-quiz entities

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

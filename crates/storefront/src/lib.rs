//! Lumiere Storefront library.
//!
//! The single source of truth for the Lumiere beauty storefront: the state
//! store holding products, cart, orders, and quiz results, together with
//! the derived views, the skin-quiz recommendation engine, the Gemini
//! service boundary, and the admin import flow. Presentation layers (the
//! CLI today) consume this crate and hold no durable state of their own.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod gemini;
pub mod recommend;
pub mod routing;
pub mod services;
pub mod store;
pub mod views;

//! Shared types and models for the Kiryana Inventory web client
//!
//! This crate contains the backend wire types, report aggregation helpers,
//! and the form-input coercion utilities used by the browser (WASM) client.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;

//! Page controllers
//!
//! One module per page: the load routine that fetches and re-renders the
//! page's containers, plus the form and button wiring for its mutations.

pub mod dashboard;
pub mod inventory;
pub mod movements;
pub mod products;
pub mod reports;

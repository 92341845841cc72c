//! Store models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A registered store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Input for registering a new store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStore {
    pub name: String,
    pub code: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

//! Stock movement models

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Product;

/// Kinds of stock movement the backend records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementType {
    StockIn,
    Sale,
    Adjustment,
}

impl MovementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementType::StockIn => "stock_in",
            MovementType::Sale => "sale",
            MovementType::Adjustment => "adjustment",
        }
    }

    /// Human-readable name for tables and selectors
    pub fn label(&self) -> &'static str {
        match self {
            MovementType::StockIn => "Stock In",
            MovementType::Sale => "Sale",
            MovementType::Adjustment => "Adjustment",
        }
    }
}

impl std::str::FromStr for MovementType {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stock_in" => Ok(MovementType::StockIn),
            "sale" => Ok(MovementType::Sale),
            "adjustment" => Ok(MovementType::Adjustment),
            _ => Err("movement type must be one of: stock_in, sale, adjustment"),
        }
    }
}

/// A recorded change in stock quantity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockMovement {
    pub id: i64,
    pub store_id: i64,
    pub product_id: i64,
    pub movement_type: MovementType,
    pub quantity: i64,
    pub unit_price: Option<Decimal>,
    pub notes: Option<String>,
    pub timestamp: NaiveDateTime,
    /// Embedded by the backend when listing movements
    pub product: Option<Product>,
}

impl StockMovement {
    /// Monetary value of the movement, when it carries a unit price
    pub fn value(&self) -> Option<Decimal> {
        self.unit_price.map(|p| p * Decimal::from(self.quantity))
    }
}

/// Input for recording a stock movement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStockMovement {
    pub store_id: i64,
    pub product_id: i64,
    pub movement_type: MovementType,
    pub quantity: i64,
    pub unit_price: Option<Decimal>,
    pub notes: Option<String>,
}

impl NewStockMovement {
    pub fn stock_in(
        store_id: i64,
        product_id: i64,
        quantity: i64,
        unit_price: Option<Decimal>,
        notes: Option<String>,
    ) -> Self {
        Self {
            store_id,
            product_id,
            movement_type: MovementType::StockIn,
            quantity,
            unit_price,
            notes,
        }
    }

    pub fn sale(
        store_id: i64,
        product_id: i64,
        quantity: i64,
        unit_price: Option<Decimal>,
        notes: Option<String>,
    ) -> Self {
        Self {
            store_id,
            product_id,
            movement_type: MovementType::Sale,
            quantity,
            unit_price,
            notes,
        }
    }

    /// Manual correction; quantity may be negative, price never applies
    pub fn adjustment(store_id: i64, product_id: i64, quantity: i64, notes: Option<String>) -> Self {
        Self {
            store_id,
            product_id,
            movement_type: MovementType::Adjustment,
            quantity,
            unit_price: None,
            notes,
        }
    }
}

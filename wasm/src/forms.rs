//! Form reading and coercion
//!
//! Raw string values from the DOM are coerced into the typed inputs the
//! backend expects. Anything that fails a required-field check or numeric
//! coercion is reported back to the user instead of being sent.

use shared::models::{InventoryLevel, MovementType, NewProduct, NewStockMovement};
use shared::validation::{
    optional_text, parse_id, parse_optional_price, parse_quantity, require_text,
};

/// Raw values of the add/edit product form
#[derive(Debug, Default, Clone)]
pub struct ProductForm {
    pub name: String,
    pub code: String,
    pub category: String,
    pub purchase_price: String,
    pub selling_price: String,
}

impl ProductForm {
    pub fn into_product(self) -> Result<NewProduct, &'static str> {
        Ok(NewProduct {
            name: require_text(&self.name)?,
            code: optional_text(&self.code),
            category: optional_text(&self.category),
            purchase_price: parse_optional_price(&self.purchase_price)?,
            selling_price: parse_optional_price(&self.selling_price)?,
        })
    }
}

/// Raw values of the record-movement form
#[derive(Debug, Default, Clone)]
pub struct MovementForm {
    pub store_id: String,
    pub product_id: String,
    pub movement_type: String,
    pub quantity: String,
    pub unit_price: String,
    pub notes: String,
}

impl MovementForm {
    pub fn into_movement(self) -> Result<NewStockMovement, &'static str> {
        let movement_type: MovementType = self.movement_type.parse()?;
        let store_id = parse_id(&self.store_id)?;
        let product_id = parse_id(&self.product_id)?;
        let quantity = parse_quantity(&self.quantity)?;
        let notes = optional_text(&self.notes);

        Ok(match movement_type {
            MovementType::StockIn => NewStockMovement::stock_in(
                store_id,
                product_id,
                quantity,
                parse_optional_price(&self.unit_price)?,
                notes,
            ),
            MovementType::Sale => NewStockMovement::sale(
                store_id,
                product_id,
                quantity,
                parse_optional_price(&self.unit_price)?,
                notes,
            ),
            // Adjustments never carry a price, whatever the field says
            MovementType::Adjustment => {
                NewStockMovement::adjustment(store_id, product_id, quantity, notes)
            }
        })
    }
}

/// Raw values of the update-quantity form
#[derive(Debug, Default, Clone)]
pub struct QuantityForm {
    pub store_id: String,
    pub product_id: String,
    pub quantity: String,
}

impl QuantityForm {
    pub fn into_level(self) -> Result<InventoryLevel, &'static str> {
        let quantity = parse_quantity(&self.quantity)?;
        if quantity < 0 {
            return Err("Quantity cannot be negative");
        }
        Ok(InventoryLevel {
            store_id: parse_id(&self.store_id)?,
            product_id: parse_id(&self.product_id)?,
            current_quantity: quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    // ========================================================================
    // Movement coercion
    // ========================================================================

    #[test]
    fn test_movement_coerces_numeric_strings() {
        let form = MovementForm {
            store_id: "1".into(),
            product_id: "42".into(),
            movement_type: "sale".into(),
            quantity: "3".into(),
            unit_price: "12.5".into(),
            notes: "".into(),
        };
        let movement = form.into_movement().unwrap();
        assert_eq!(movement.store_id, 1);
        assert_eq!(movement.product_id, 42);
        assert_eq!(movement.quantity, 3);
        assert_eq!(movement.unit_price, Some(Decimal::new(125, 1)));
        assert_eq!(movement.movement_type, MovementType::Sale);
        assert_eq!(movement.notes, None);
    }

    #[test]
    fn test_movement_rejects_unparsable_numbers() {
        let form = MovementForm {
            store_id: "1".into(),
            product_id: "first".into(),
            movement_type: "stock_in".into(),
            quantity: "10".into(),
            ..MovementForm::default()
        };
        assert!(form.into_movement().is_err());
    }

    #[test]
    fn test_adjustment_drops_unit_price() {
        let form = MovementForm {
            store_id: "1".into(),
            product_id: "42".into(),
            movement_type: "adjustment".into(),
            quantity: "-2".into(),
            unit_price: "99.0".into(),
            notes: "breakage".into(),
        };
        let movement = form.into_movement().unwrap();
        assert_eq!(movement.quantity, -2);
        assert_eq!(movement.unit_price, None);
        assert_eq!(movement.notes, Some("breakage".into()));
    }

    #[test]
    fn test_movement_rejects_unknown_type() {
        let form = MovementForm {
            store_id: "1".into(),
            product_id: "2".into(),
            movement_type: "transfer".into(),
            quantity: "1".into(),
            ..MovementForm::default()
        };
        assert!(form.into_movement().is_err());
    }

    // ========================================================================
    // Product form
    // ========================================================================

    #[test]
    fn test_product_requires_name() {
        let form = ProductForm::default();
        assert!(form.into_product().is_err());
    }

    #[test]
    fn test_product_blank_fields_become_none() {
        let form = ProductForm {
            name: "Basmati Rice 5kg".into(),
            ..ProductForm::default()
        };
        let product = form.into_product().unwrap();
        assert_eq!(product.name, "Basmati Rice 5kg");
        assert_eq!(product.code, None);
        assert_eq!(product.purchase_price, None);
    }

    #[test]
    fn test_product_parses_prices() {
        let form = ProductForm {
            name: "Sugar".into(),
            purchase_price: "40".into(),
            selling_price: "48.50".into(),
            ..ProductForm::default()
        };
        let product = form.into_product().unwrap();
        assert_eq!(product.purchase_price, Some(Decimal::new(40, 0)));
        assert_eq!(product.selling_price, Some(Decimal::new(4850, 2)));
    }

    // ========================================================================
    // Quantity form
    // ========================================================================

    #[test]
    fn test_quantity_form_coerces() {
        let form = QuantityForm {
            store_id: "2".into(),
            product_id: "9".into(),
            quantity: "17".into(),
        };
        let level = form.into_level().unwrap();
        assert_eq!(level.store_id, 2);
        assert_eq!(level.product_id, 9);
        assert_eq!(level.current_quantity, 17);
    }

    #[test]
    fn test_quantity_form_rejects_negative() {
        let form = QuantityForm {
            store_id: "2".into(),
            product_id: "9".into(),
            quantity: "-1".into(),
        };
        assert!(form.into_level().is_err());
    }
}

//! Form input validation and coercion
//!
//! The browser hands every form field over as a string. These helpers do
//! the required-field checks and the string-to-number coercion the backend
//! expects before anything goes on the wire.

use rust_decimal::Decimal;

/// Require a non-empty text field
pub fn require_text(input: &str) -> Result<String, &'static str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("This field is required");
    }
    Ok(trimmed.to_string())
}

/// Optional text field; blank becomes `None`
pub fn optional_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Coerce a record id from its string form
pub fn parse_id(input: &str) -> Result<i64, &'static str> {
    let id: i64 = input
        .trim()
        .parse()
        .map_err(|_| "Expected a numeric id")?;
    if id <= 0 {
        return Err("Expected a numeric id");
    }
    Ok(id)
}

/// Coerce a quantity; negative values are allowed (adjustments)
pub fn parse_quantity(input: &str) -> Result<i64, &'static str> {
    input
        .trim()
        .parse()
        .map_err(|_| "Quantity must be a whole number")
}

/// Coerce a required price field
pub fn parse_price(input: &str) -> Result<Decimal, &'static str> {
    let price: Decimal = input
        .trim()
        .parse()
        .map_err(|_| "Price must be a number")?;
    if price < Decimal::ZERO {
        return Err("Price cannot be negative");
    }
    Ok(price)
}

/// Optional price field; blank becomes `None`
pub fn parse_optional_price(input: &str) -> Result<Option<Decimal>, &'static str> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    parse_price(input).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ========================================================================
    // Required / optional text
    // ========================================================================

    #[test]
    fn test_require_text() {
        assert_eq!(require_text("  Basmati Rice "), Ok("Basmati Rice".into()));
        assert!(require_text("").is_err());
        assert!(require_text("   ").is_err());
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text("note"), Some("note".into()));
        assert_eq!(optional_text("  "), None);
    }

    // ========================================================================
    // Numeric coercion
    // ========================================================================

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42"), Ok(42));
        assert_eq!(parse_id(" 7 "), Ok(7));
        assert!(parse_id("0").is_err());
        assert!(parse_id("-3").is_err());
        assert!(parse_id("abc").is_err());
        assert!(parse_id("").is_err());
    }

    #[test]
    fn test_parse_quantity_allows_negative() {
        assert_eq!(parse_quantity("10"), Ok(10));
        assert_eq!(parse_quantity("-4"), Ok(-4));
        assert!(parse_quantity("4.5").is_err());
        assert!(parse_quantity("many").is_err());
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("12.50"), Ok(Decimal::new(1250, 2)));
        assert_eq!(parse_price("0"), Ok(Decimal::ZERO));
        assert!(parse_price("-1").is_err());
        assert!(parse_price("free").is_err());
    }

    #[test]
    fn test_parse_optional_price() {
        assert_eq!(parse_optional_price(""), Ok(None));
        assert_eq!(
            parse_optional_price("99.99"),
            Ok(Some(Decimal::new(9999, 2)))
        );
        assert!(parse_optional_price("n/a").is_err());
    }

    proptest! {
        #[test]
        fn prop_quantity_roundtrips(n in any::<i64>()) {
            prop_assert_eq!(parse_quantity(&n.to_string()), Ok(n));
        }

        #[test]
        fn prop_positive_ids_roundtrip(n in 1i64..=i64::MAX) {
            prop_assert_eq!(parse_id(&n.to_string()), Ok(n));
        }

        #[test]
        fn prop_two_decimal_prices_roundtrip(cents in 0u32..=10_000_000u32) {
            let text = format!("{}.{:02}", cents / 100, cents % 100);
            prop_assert_eq!(parse_price(&text), Ok(Decimal::new(cents as i64, 2)));
        }
    }
}

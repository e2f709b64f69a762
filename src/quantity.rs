//! Quantity Rules
//!
//! Every stepper control funnels into one "set absolute quantity" path;
//! these helpers give it a single clamping and parsing story. Cart surfaces
//! allow 0 (removal); the product-page selector bottoms out at 1.

/// Minimum quantity on cart page / drawer lines (0 removes the line).
pub const CART_MIN_QTY: u32 = 0;

/// Minimum quantity for the product-page pre-add selector.
pub const PRODUCT_MIN_QTY: u32 = 1;

/// Clamp a candidate quantity to the surface minimum.
pub fn clamp_quantity(raw: i64, min: u32) -> u32 {
    if raw < min as i64 {
        min
    } else {
        raw.min(u32::MAX as i64) as u32
    }
}

/// Parse a raw input value, falling back to the minimum on garbage.
pub fn parse_quantity(input: &str, min: u32) -> u32 {
    match input.trim().parse::<i64>() {
        Ok(value) => clamp_quantity(value, min),
        Err(_) => min,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_cart_quantity() {
        assert_eq!(clamp_quantity(-1, CART_MIN_QTY), 0);
        assert_eq!(clamp_quantity(0, CART_MIN_QTY), 0);
        assert_eq!(clamp_quantity(7, CART_MIN_QTY), 7);
    }

    #[test]
    fn test_clamp_product_quantity() {
        assert_eq!(clamp_quantity(0, PRODUCT_MIN_QTY), 1);
        assert_eq!(clamp_quantity(-5, PRODUCT_MIN_QTY), 1);
        assert_eq!(clamp_quantity(3, PRODUCT_MIN_QTY), 3);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("4", CART_MIN_QTY), 4);
        assert_eq!(parse_quantity(" 2 ", PRODUCT_MIN_QTY), 2);
        assert_eq!(parse_quantity("", CART_MIN_QTY), 0);
        assert_eq!(parse_quantity("abc", PRODUCT_MIN_QTY), 1);
        assert_eq!(parse_quantity("-3", CART_MIN_QTY), 0);
    }
}

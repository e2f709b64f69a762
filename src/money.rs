//! Money Formatting
//!
//! Renders minor currency units through the theme's money format template.

/// Format used when the host page does not supply one.
pub const DEFAULT_MONEY_FORMAT: &str = "₹{{amount}}";

/// Format an amount in minor units (e.g. 500 → "₹5.00") using the given
/// template. Recognized placeholders: `{{amount}}` (two decimals) and
/// `{{amount_no_decimals}}` (rounded to whole units).
pub fn format_money(minor_units: i64, format: &str) -> String {
    let amount = format!("{:.2}", minor_units as f64 / 100.0);
    let whole = ((minor_units as f64 / 100.0).round() as i64).to_string();
    format
        .replace("{{amount}}", &amount)
        .replace("{{amount_no_decimals}}", &whole)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format() {
        assert_eq!(format_money(500, DEFAULT_MONEY_FORMAT), "₹5.00");
        assert_eq!(format_money(0, DEFAULT_MONEY_FORMAT), "₹0.00");
        assert_eq!(format_money(123456, DEFAULT_MONEY_FORMAT), "₹1234.56");
    }

    #[test]
    fn test_no_decimals_placeholder() {
        assert_eq!(format_money(500, "Rs. {{amount_no_decimals}}"), "Rs. 5");
        // Rounds, not truncates
        assert_eq!(format_money(550, "{{amount_no_decimals}}"), "6");
        assert_eq!(format_money(549, "{{amount_no_decimals}}"), "5");
    }

    #[test]
    fn test_custom_template() {
        assert_eq!(format_money(1999, "${{amount}} USD"), "$19.99 USD");
    }
}

//! Price label formatting for cards and seat detail lines.

use eventgo_core::PriceTag;

/// Format a dollar amount the way the feed advertises it: whole dollars
/// without decimals, fractional prices with two.
pub fn fmt_amount(amount: f64) -> String {
    if amount.fract().abs() < f64::EPSILON {
        format!("{amount:.0}")
    } else {
        format!("{amount:.2}")
    }
}

/// Card price line for a computed price tag.
pub fn price_tag_label(tag: PriceTag) -> String {
    match tag {
        PriceTag::Starting(price) => format!("Starting at ${}", fmt_amount(price)),
        PriceTag::SoldOut => "No tickets available".to_owned(),
        PriceTag::Unknown => "Price unavailable".to_owned(),
    }
}

/// Card price line for the raw advertised price on the featured feed.
pub fn advertised_label(price: Option<f64>) -> String {
    match price {
        Some(price) => format!("Starting at ${}", fmt_amount(price)),
        None => "No tickets available".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn whole_dollar_amounts_drop_decimals() {
        assert_eq!(fmt_amount(45.0), "45");
        assert_eq!(fmt_amount(120.0), "120");
    }

    #[test]
    fn fractional_amounts_keep_two_decimals() {
        assert_eq!(fmt_amount(35.5), "35.50");
        assert_eq!(fmt_amount(99.99), "99.99");
    }

    #[test]
    fn price_tag_labels() {
        assert_eq!(price_tag_label(PriceTag::Starting(50.0)), "Starting at $50");
        assert_eq!(price_tag_label(PriceTag::SoldOut), "No tickets available");
        assert_eq!(price_tag_label(PriceTag::Unknown), "Price unavailable");
    }

    #[test]
    fn advertised_label_handles_missing_price() {
        assert_eq!(advertised_label(Some(59.0)), "Starting at $59");
        assert_eq!(advertised_label(None), "No tickets available");
    }
}

//! Price helpers.
//!
//! Remote catalog prices are decimal numbers in major units (e.g. `9.99`).
//! Derived prices are computed unrounded; rounding only happens when a price
//! is formatted for display.

/// Price after applying a percentage discount.
///
/// `price - price * discount_percentage / 100`, with no rounding.
///
/// ```
/// use catalog_commerce::money::discounted_price;
/// assert_eq!(discounted_price(100.0, 25.0), 75.0);
/// assert_eq!(discounted_price(19.99, 0.0), 19.99);
/// ```
pub fn discounted_price(price: f64, discount_percentage: f64) -> f64 {
    price - (price * discount_percentage / 100.0)
}

/// Format a price in US dollars, en-US style (e.g. `$1,234.50`).
pub fn format_price(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    // "-0.00" would read oddly after rounding a tiny negative amount.
    let negative = amount < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };

    format!("{}${}.{}", sign, grouped, fraction)
}

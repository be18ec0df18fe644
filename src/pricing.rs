//! Price-break reduction: pick the unit price at the largest available
//! order quantity. This is bulk-price reporting, deliberately not the
//! lowest unit price.

use crate::models::{PartRecord, PriceBreak};
use serde_json::Value;

const CURRENCY_SYMBOLS: [char; 4] = ['$', '¥', '€', '£'];

/// Parse a currency-prefixed price string ("$0.80", "¥12.50", ...)
pub fn parse_price(raw: &str) -> Option<f64> {
    let cleaned = raw
        .trim()
        .trim_matches(|c| CURRENCY_SYMBOLS.contains(&c))
        .trim();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

fn parse_quantity(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}

fn parse_break(pb: &PriceBreak) -> Option<(u64, f64)> {
    let quantity = parse_quantity(&pb.quantity)?;
    let price = parse_price(&pb.price)?;
    Some((quantity, price))
}

/// Reduce a part's pricing ladder to `(price, quantity)` at the largest
/// quantity break. Ties keep the first-seen maximum; breaks that fail to
/// parse are skipped individually. Returns `(0.0, 0)` when nothing parses.
pub fn reduce(record: &PartRecord) -> (f64, u64) {
    if record.price_breaks.is_empty() {
        return fallback(record);
    }

    let mut max_quantity: u64 = 0;
    let mut price_at_max: f64 = 0.0;

    for pb in &record.price_breaks {
        let Some((quantity, price)) = parse_break(pb) else {
            continue;
        };
        if quantity > max_quantity {
            max_quantity = quantity;
            price_at_max = price;
        }
    }

    (price_at_max, max_quantity)
}

/// No break ladder: fall back to the top-level price and minimum order
/// quantity (quantity 1 when absent).
fn fallback(record: &PartRecord) -> (f64, u64) {
    let Some(price_str) = record.price.as_deref().filter(|p| !p.trim().is_empty()) else {
        return (0.0, 0);
    };
    let Some(price) = parse_price(price_str) else {
        return (0.0, 0);
    };
    let quantity = match record.min.as_deref().filter(|m| !m.trim().is_empty()) {
        None => 1,
        Some(min) => match min.trim().parse::<u64>() {
            Ok(q) => q,
            Err(_) => return (0.0, 0),
        },
    };
    (price, quantity)
}

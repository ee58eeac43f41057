// web_app/api/pricing.rs - Price text parsing
//
// Listing prices look like "12,34 €" and unit prices like "(8,90 €/kg)" or
// "1,25 €/100 g". Everything here is normalised to euros per kilogram.

use std::sync::LazyLock;

use regex::Regex;

static UNIT_PRICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([\d.,\s]+)€\s*/?\s*(kg|100\s*g)").expect("unit price pattern is valid")
});

/// Unit price found in a listing
#[derive(Clone, Debug, PartialEq)]
pub struct UnitPrice {
    pub value: f64,
    /// `kg` or `100g`
    pub unit: String,
    /// Text the price was extracted from
    pub raw: String,
}

impl UnitPrice {
    pub fn per_kg(&self) -> f64 {
        price_per_kg(self.value, &self.unit)
    }
}

/// Parses a displayed total price; anything unparsable counts as 0.0
pub fn clean_total_price(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| *c != '€' && !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    cleaned.parse().unwrap_or(0.0)
}

/// Converts a unit price to €/kg. Non-positive values and unknown units give 0.0.
pub fn price_per_kg(value: f64, unit: &str) -> f64 {
    if value <= 0.0 {
        return 0.0;
    }
    let unit: String = unit.chars().filter(|c| !c.is_whitespace()).collect();
    match unit.to_lowercase().as_str() {
        "kg" => value,
        "100g" => value * 10.0,
        _ => 0.0,
    }
}

/// First unit price in `text`, if any
pub fn extract_unit_price(text: &str) -> Option<UnitPrice> {
    let captures = UNIT_PRICE.captures(text)?;
    let value: String = captures[1]
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    let value = value.parse::<f64>().ok()?;
    let unit: String = captures[2].chars().filter(|c| !c.is_whitespace()).collect();

    Some(UnitPrice {
        value,
        unit,
        raw: text.to_string(),
    })
}

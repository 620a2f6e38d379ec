use serde::{Deserialize, Serialize};

pub const LIVE_SOURCE: &str = "EarthHero";
pub const SAMPLE_SOURCE: &str = "SampleData";
pub const NO_BRAND: &str = "No brand";

/// One listed item, either scraped from the storefront or taken from the
/// sample set. Field names are the JSON keys served by `/api/products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    pub price: f64,
    pub brand: String,
    pub materials: Vec<String>,
    pub description: String,
    pub url: String,
    pub image: Option<String>,
    pub badges: Vec<String>,
    pub source: String,
}

impl Product {
    pub fn is_sample(&self) -> bool {
        self.source == SAMPLE_SOURCE
    }
}

#[derive(Debug, PartialEq)]
pub enum PriceText {
    Missing,
    Amount(f64),
    Invalid(f64),
}

/// Strips the currency symbol and thousands separators from a price label.
///
/// Empty or non-numeric labels count as `Missing` (priced at 0.0), while a
/// label that parses but is negative or not finite is `Invalid`.
pub fn parse_price(text: &str) -> PriceText {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();

    match cleaned.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => PriceText::Amount(amount),
        Ok(amount) => PriceText::Invalid(amount),
        Err(_) => PriceText::Missing,
    }
}

use rust_decimal::Decimal;
use serde::Serialize;

/// Market data for one stock code, fetched from the external quote
/// service.
///
/// Ephemeral: a snapshot lives for the duration of a single valuation
/// request and is never cached across calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteSnapshot {
    /// Listed company name
    pub name: String,

    /// Industry sector
    pub sector: String,

    /// Current market price, non-negative
    pub price: Decimal,

    /// Icon image URL; empty when the code has no image
    pub image_url: String,
}

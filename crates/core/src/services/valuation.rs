use crate::models::holding::Holding;
use crate::models::quote::QuoteSnapshot;
use crate::models::valuation::{round_money, CostBasis, GainRate, ValuationResult};

/// Combines a ledger-derived cost basis with a live quote into the full
/// per-holding valuation view.
///
/// Infallible by design: an empty or zero-cost holding values to zeros
/// with a `GainRate::ZeroBasis` marker, never an error. Rounding is
/// applied at each derived figure, not once at the end.
pub struct ValuationEngine;

impl ValuationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Value one holding against a current quote.
    #[must_use]
    pub fn value_holding(
        &self,
        holding: &Holding,
        basis: &CostBasis,
        quote: &QuoteSnapshot,
    ) -> ValuationResult {
        let asset_value = round_money(quote.price * basis.quantity);
        let gain = round_money((quote.price - basis.average_cost) * basis.quantity);
        let gain_rate = GainRate::from_totals(asset_value, basis.total_cost());

        ValuationResult {
            holding_id: holding.id,
            stock_code: holding.stock_code.clone(),
            name: quote.name.clone(),
            sector: quote.sector.clone(),
            quantity: basis.quantity,
            average_cost: basis.average_cost,
            current_price: quote.price,
            asset_value,
            gain,
            gain_rate,
            image_url: quote.image_url.clone(),
        }
    }
}

impl Default for ValuationEngine {
    fn default() -> Self {
        Self::new()
    }
}

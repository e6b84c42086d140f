use rust_decimal::Decimal;

use crate::errors::CoreError;
use crate::models::trade::{TradeEvent, TradeType};
use crate::models::valuation::{round_money, CostBasis};

/// Reduces a holding's trade ledger into quantity and average unit cost.
///
/// Pure business logic, no I/O, no API calls. Event order does not
/// matter: both figures are plain sums before rounding.
///
/// Average cost is total money paid (each event contributes its lot
/// spend, unit price × quantity) divided by total quantity. Fixed
/// rounding points: each lot spend, the quantity sum, and the final
/// division are all rounded to 2 dp half-up.
pub struct CostBasisCalculator;

impl CostBasisCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Compute the cost basis from all events of one holding.
    ///
    /// An empty ledger resolves to an all-zero basis, and a zero total
    /// quantity makes the average cost zero instead of dividing by zero.
    /// Both are defined results, not errors.
    ///
    /// Fails with `InvalidTradeData` on a negative quantity, a negative
    /// unit price, or a sell event (reserved type: a recorded sell means
    /// the ledger is corrupt).
    pub fn calculate(&self, events: &[TradeEvent]) -> Result<CostBasis, CoreError> {
        let mut total_quantity = Decimal::ZERO;
        let mut total_paid = Decimal::ZERO;

        for event in events {
            if event.quantity.is_sign_negative() {
                return Err(CoreError::InvalidTradeData(format!(
                    "trade {} has negative quantity {}",
                    event.id, event.quantity
                )));
            }
            if event.unit_price.is_sign_negative() {
                return Err(CoreError::InvalidTradeData(format!(
                    "trade {} has negative unit price {}",
                    event.id, event.unit_price
                )));
            }

            match event.trade_type {
                TradeType::Buy => {
                    total_quantity += event.quantity;
                    total_paid += event.total_price();
                }
                TradeType::Sell => {
                    return Err(CoreError::InvalidTradeData(format!(
                        "trade {} is a sell; sells are not recorded yet",
                        event.id
                    )));
                }
            }
        }

        let quantity = round_money(total_quantity);

        let average_cost = if quantity.is_zero() {
            Decimal::ZERO
        } else {
            round_money(total_paid / quantity)
        };

        Ok(CostBasis {
            quantity,
            average_cost,
        })
    }
}

impl Default for CostBasisCalculator {
    fn default() -> Self {
        Self::new()
    }
}

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::valuation::round_money;

/// Type of trade recorded against a holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeType {
    /// Buying units of the stock
    Buy,
    /// Selling units (reserved; no recording path produces it yet)
    Sell,
}

impl std::fmt::Display for TradeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeType::Buy => write!(f, "Buy"),
            TradeType::Sell => write!(f, "Sell"),
        }
    }
}

/// A single executed trade against a holding.
///
/// Immutable once recorded. `market_price` is the quoted price at
/// execution time, kept for display only; cost basis never reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeEvent {
    /// Unique identifier
    pub id: Uuid,

    /// The holding this trade belongs to
    pub holding_id: Uuid,

    /// Buy or (reserved) Sell
    pub trade_type: TradeType,

    /// Unit price paid, non-negative
    pub unit_price: Decimal,

    /// Units traded, non-negative
    pub quantity: Decimal,

    /// When the trade executed
    pub traded_at: NaiveDateTime,

    /// Market price quoted at execution time (informational)
    pub market_price: Decimal,
}

impl TradeEvent {
    /// Record a buy.
    pub fn buy(
        holding_id: Uuid,
        unit_price: Decimal,
        quantity: Decimal,
        traded_at: NaiveDateTime,
        market_price: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            holding_id,
            trade_type: TradeType::Buy,
            unit_price,
            quantity,
            traded_at,
            market_price,
        }
    }

    /// Total money moved by this trade: unit price × quantity, 2 dp.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        round_money(self.unit_price * self.quantity)
    }
}

/// One row of a holding's trade history, as shown to the member.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeLogView {
    pub id: Uuid,
    pub trade_type: TradeType,
    pub unit_price: Decimal,
    pub quantity: Decimal,

    /// Unit price × quantity, 2 dp
    pub total_price: Decimal,

    /// Realized profit for this trade; always 0.00 while only buys exist
    pub profit: Decimal,

    pub traded_at: NaiveDateTime,
}

impl TradeLogView {
    #[must_use]
    pub fn from_event(event: &TradeEvent) -> Self {
        Self {
            id: event.id,
            trade_type: event.trade_type,
            unit_price: event.unit_price,
            quantity: event.quantity,
            total_price: event.total_price(),
            profit: Decimal::ZERO,
            traded_at: event.traded_at,
        }
    }
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One tracked stock position inside a portfolio.
///
/// The stock code is normalized to uppercase on creation and is immutable
/// afterwards. Quantity and cost basis are never stored here; they are
/// always derived from the trade ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holding {
    /// Unique identifier
    pub id: Uuid,

    /// Exchange symbol, uppercased (e.g., "005930", "AAPL")
    pub stock_code: String,

    /// Owning portfolio
    pub portfolio_id: Uuid,
}

impl Holding {
    pub fn new(stock_code: impl Into<String>, portfolio_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            stock_code: stock_code.into().trim().to_uppercase(),
            portfolio_id,
        }
    }
}

use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::holding::Holding;
use crate::models::portfolio::Portfolio;
use crate::models::trade::TradeEvent;

/// Read/write access to recorded trade events.
///
/// Writes happen only when trades are recorded or a holding is removed;
/// the valuation engine itself only reads.
pub trait TradeLedger: Send + Sync {
    /// All events for a holding, in no guaranteed order.
    /// Never fails for an unknown holding; an empty list means no trades.
    fn list_events(&self, holding_id: Uuid) -> Vec<TradeEvent>;

    /// Append an event to the ledger.
    fn record(&self, event: TradeEvent);

    /// Drop every event belonging to a holding.
    fn remove_for_holding(&self, holding_id: Uuid);
}

/// Access to holdings grouped by owning portfolio.
pub trait HoldingStore: Send + Sync {
    /// All holdings of a portfolio; empty for an unknown portfolio.
    fn list_by_portfolio(&self, portfolio_id: Uuid) -> Vec<Holding>;

    /// A single holding, or `HoldingNotFound`.
    fn get(&self, holding_id: Uuid) -> Result<Holding, CoreError>;

    fn add(&self, holding: Holding);

    /// Remove one holding, or `HoldingNotFound`.
    fn remove(&self, holding_id: Uuid) -> Result<(), CoreError>;

    /// Remove every holding of a portfolio.
    /// Returns the removed holding ids so callers can cascade to the ledger.
    fn remove_by_portfolio(&self, portfolio_id: Uuid) -> Vec<Uuid>;
}

/// Access to a member's portfolios.
pub trait PortfolioStore: Send + Sync {
    /// A single portfolio, or `PortfolioNotFound`.
    fn get(&self, id: Uuid) -> Result<Portfolio, CoreError>;

    /// All portfolios owned by a member, in creation order.
    fn list_by_member(&self, member_id: Uuid) -> Vec<Portfolio>;

    fn add(&self, portfolio: Portfolio);

    /// Replace a stored portfolio, or `PortfolioNotFound`.
    fn update(&self, portfolio: Portfolio) -> Result<(), CoreError>;

    /// Remove a portfolio, or `PortfolioNotFound`.
    fn remove(&self, id: Uuid) -> Result<(), CoreError>;
}

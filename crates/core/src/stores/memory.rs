use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use super::traits::{HoldingStore, PortfolioStore, TradeLedger};
use crate::errors::CoreError;
use crate::models::holding::Holding;
use crate::models::portfolio::Portfolio;
use crate::models::trade::TradeEvent;

/// In-memory trade ledger.
///
/// Events are kept per holding in insertion order; callers must not rely
/// on any order from `list_events`.
#[derive(Debug, Default)]
pub struct InMemoryTradeLedger {
    events: Mutex<HashMap<Uuid, Vec<TradeEvent>>>,
}

impl InMemoryTradeLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TradeLedger for InMemoryTradeLedger {
    fn list_events(&self, holding_id: Uuid) -> Vec<TradeEvent> {
        self.events
            .lock()
            .expect("trade ledger lock poisoned")
            .get(&holding_id)
            .cloned()
            .unwrap_or_default()
    }

    fn record(&self, event: TradeEvent) {
        self.events
            .lock()
            .expect("trade ledger lock poisoned")
            .entry(event.holding_id)
            .or_default()
            .push(event);
    }

    fn remove_for_holding(&self, holding_id: Uuid) {
        self.events
            .lock()
            .expect("trade ledger lock poisoned")
            .remove(&holding_id);
    }
}

/// In-memory holding store.
#[derive(Debug, Default)]
pub struct InMemoryHoldingStore {
    holdings: Mutex<Vec<Holding>>,
}

impl InMemoryHoldingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HoldingStore for InMemoryHoldingStore {
    fn list_by_portfolio(&self, portfolio_id: Uuid) -> Vec<Holding> {
        self.holdings
            .lock()
            .expect("holding store lock poisoned")
            .iter()
            .filter(|h| h.portfolio_id == portfolio_id)
            .cloned()
            .collect()
    }

    fn get(&self, holding_id: Uuid) -> Result<Holding, CoreError> {
        self.holdings
            .lock()
            .expect("holding store lock poisoned")
            .iter()
            .find(|h| h.id == holding_id)
            .cloned()
            .ok_or_else(|| CoreError::HoldingNotFound(holding_id.to_string()))
    }

    fn add(&self, holding: Holding) {
        self.holdings
            .lock()
            .expect("holding store lock poisoned")
            .push(holding);
    }

    fn remove(&self, holding_id: Uuid) -> Result<(), CoreError> {
        let mut holdings = self.holdings.lock().expect("holding store lock poisoned");
        let idx = holdings
            .iter()
            .position(|h| h.id == holding_id)
            .ok_or_else(|| CoreError::HoldingNotFound(holding_id.to_string()))?;
        holdings.remove(idx);
        Ok(())
    }

    fn remove_by_portfolio(&self, portfolio_id: Uuid) -> Vec<Uuid> {
        let mut holdings = self.holdings.lock().expect("holding store lock poisoned");
        let removed: Vec<Uuid> = holdings
            .iter()
            .filter(|h| h.portfolio_id == portfolio_id)
            .map(|h| h.id)
            .collect();
        holdings.retain(|h| h.portfolio_id != portfolio_id);
        removed
    }
}

/// In-memory portfolio store.
#[derive(Debug, Default)]
pub struct InMemoryPortfolioStore {
    portfolios: Mutex<Vec<Portfolio>>,
}

impl InMemoryPortfolioStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PortfolioStore for InMemoryPortfolioStore {
    fn get(&self, id: Uuid) -> Result<Portfolio, CoreError> {
        self.portfolios
            .lock()
            .expect("portfolio store lock poisoned")
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| CoreError::PortfolioNotFound(id.to_string()))
    }

    fn list_by_member(&self, member_id: Uuid) -> Vec<Portfolio> {
        self.portfolios
            .lock()
            .expect("portfolio store lock poisoned")
            .iter()
            .filter(|p| p.member_id == member_id)
            .cloned()
            .collect()
    }

    fn add(&self, portfolio: Portfolio) {
        self.portfolios
            .lock()
            .expect("portfolio store lock poisoned")
            .push(portfolio);
    }

    fn update(&self, portfolio: Portfolio) -> Result<(), CoreError> {
        let mut portfolios = self.portfolios.lock().expect("portfolio store lock poisoned");
        let existing = portfolios
            .iter_mut()
            .find(|p| p.id == portfolio.id)
            .ok_or_else(|| CoreError::PortfolioNotFound(portfolio.id.to_string()))?;
        *existing = portfolio;
        Ok(())
    }

    fn remove(&self, id: Uuid) -> Result<(), CoreError> {
        let mut portfolios = self.portfolios.lock().expect("portfolio store lock poisoned");
        let idx = portfolios
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| CoreError::PortfolioNotFound(id.to_string()))?;
        portfolios.remove(idx);
        Ok(())
    }
}

pub mod errors;
pub mod models;
pub mod quotes;
pub mod services;
pub mod stores;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use errors::CoreError;
use models::{
    holding::Holding,
    portfolio::{Portfolio, PortfolioCreate, PortfolioUpdate},
    trade::{TradeEvent, TradeLogView},
    valuation::{PortfolioListItem, PortfolioSummary, TotalSummary, ValuationResult},
};
use quotes::{client::QuoteClient, traits::QuoteProvider};
use services::{
    holdings::HoldingsService, portfolio::PortfolioService, trades::TradeService,
};
use stores::memory::{InMemoryHoldingStore, InMemoryPortfolioStore, InMemoryTradeLedger};
use stores::traits::{HoldingStore, PortfolioStore, TradeLedger};

/// Main entry point for the stock portfolio tracker core library.
/// Wires the stores, the quote client, and the services together.
#[must_use]
pub struct PortfolioTracker {
    portfolio_service: PortfolioService,
    holdings_service: HoldingsService,
    trade_service: TradeService,
    provider_name: String,
}

impl std::fmt::Debug for PortfolioTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioTracker")
            .field("quote_provider", &self.provider_name)
            .finish()
    }
}

impl PortfolioTracker {
    /// Build a tracker backed by in-memory stores and the given quote
    /// provider.
    pub fn new(provider: Arc<dyn QuoteProvider>) -> Self {
        let portfolio_store: Arc<dyn PortfolioStore> = Arc::new(InMemoryPortfolioStore::new());
        let holding_store: Arc<dyn HoldingStore> = Arc::new(InMemoryHoldingStore::new());
        let trade_ledger: Arc<dyn TradeLedger> = Arc::new(InMemoryTradeLedger::new());
        Self::with_stores(portfolio_store, holding_store, trade_ledger, provider)
    }

    /// Build a tracker over caller-supplied store implementations.
    pub fn with_stores(
        portfolio_store: Arc<dyn PortfolioStore>,
        holding_store: Arc<dyn HoldingStore>,
        trade_ledger: Arc<dyn TradeLedger>,
        provider: Arc<dyn QuoteProvider>,
    ) -> Self {
        let provider_name = provider.name().to_string();
        let quote_client = QuoteClient::new(provider);

        let portfolio_service = PortfolioService::new(
            Arc::clone(&portfolio_store),
            Arc::clone(&holding_store),
            Arc::clone(&trade_ledger),
        );
        let holdings_service = HoldingsService::new(
            Arc::clone(&holding_store),
            Arc::clone(&trade_ledger),
            quote_client.clone(),
        );
        let trade_service = TradeService::new(
            portfolio_store,
            holding_store,
            trade_ledger,
            quote_client,
        );

        Self {
            portfolio_service,
            holdings_service,
            trade_service,
            provider_name,
        }
    }

    // ── Portfolio Management ────────────────────────────────────────

    /// Create a portfolio for a member. New portfolios are included in
    /// the member's totals by default.
    pub fn create_portfolio(
        &self,
        create: PortfolioCreate,
        member_id: Uuid,
    ) -> Result<Portfolio, CoreError> {
        self.portfolio_service.create(create, member_id)
    }

    /// Update a portfolio's name, description, currency, kind, or
    /// include flag.
    pub fn update_portfolio(
        &self,
        portfolio_id: Uuid,
        update: PortfolioUpdate,
    ) -> Result<Portfolio, CoreError> {
        self.portfolio_service.update(portfolio_id, update)
    }

    /// Delete a portfolio along with its holdings and their trade events.
    pub fn delete_portfolio(&self, portfolio_id: Uuid) -> Result<(), CoreError> {
        self.portfolio_service.delete(portfolio_id)
    }

    /// Get a single portfolio by id.
    pub fn get_portfolio(&self, portfolio_id: Uuid) -> Result<Portfolio, CoreError> {
        self.portfolio_service.get(portfolio_id)
    }

    /// All portfolios owned by a member, without valuation figures.
    #[must_use]
    pub fn get_portfolios(&self, member_id: Uuid) -> Vec<Portfolio> {
        self.portfolio_service.list_by_member(member_id)
    }

    /// A member's portfolio list with per-portfolio gain and gain rate.
    pub async fn list_portfolios(
        &self,
        member_id: Uuid,
    ) -> Result<Vec<PortfolioListItem>, CoreError> {
        self.portfolio_service
            .list_with_valuations(&self.holdings_service, member_id)
            .await
    }

    /// Member-level totals across portfolios flagged for inclusion.
    pub async fn total_summary(&self, member_id: Uuid) -> Result<TotalSummary, CoreError> {
        self.portfolio_service
            .total_summary(&self.holdings_service, member_id)
            .await
    }

    // ── Holdings & Valuation ────────────────────────────────────────

    /// Current valuations for every holding of a portfolio.
    pub async fn get_stocks(&self, portfolio_id: Uuid) -> Result<Vec<ValuationResult>, CoreError> {
        self.portfolio_service.get(portfolio_id)?;
        self.holdings_service.portfolio_valuations(portfolio_id).await
    }

    /// Valuations for the holdings of a portfolio matching one stock
    /// code. Non-matching holdings cost no quote lookups.
    pub async fn get_stocks_by_code(
        &self,
        portfolio_id: Uuid,
        stock_code: &str,
    ) -> Result<Vec<ValuationResult>, CoreError> {
        self.portfolio_service.get(portfolio_id)?;
        self.holdings_service
            .portfolio_valuations_by_code(portfolio_id, stock_code)
            .await
    }

    /// Full valuation summary of one portfolio.
    pub async fn portfolio_summary(
        &self,
        portfolio_id: Uuid,
    ) -> Result<PortfolioSummary, CoreError> {
        self.portfolio_service.get(portfolio_id)?;
        self.holdings_service.portfolio_summary(portfolio_id).await
    }

    // ── Trades ──────────────────────────────────────────────────────

    /// Buy a stock into a portfolio: creates the holding and records its
    /// opening trade event.
    pub async fn add_stock(
        &self,
        portfolio_id: Uuid,
        stock_code: &str,
        unit_price: Decimal,
        quantity: Decimal,
        traded_at: NaiveDateTime,
    ) -> Result<Holding, CoreError> {
        self.trade_service
            .add_stock(portfolio_id, stock_code, unit_price, quantity, traded_at)
            .await
    }

    /// Record an additional buy on an existing holding.
    pub async fn buy_more(
        &self,
        holding_id: Uuid,
        unit_price: Decimal,
        quantity: Decimal,
        traded_at: NaiveDateTime,
    ) -> Result<TradeEvent, CoreError> {
        self.trade_service
            .buy_more(holding_id, unit_price, quantity, traded_at)
            .await
    }

    /// Remove a holding and its trade history. Removal is unconditional,
    /// open quantity included.
    pub fn remove_stock(&self, holding_id: Uuid) -> Result<(), CoreError> {
        self.trade_service.remove_stock(holding_id)
    }

    /// Trade history of a holding, newest first.
    pub fn trade_logs(&self, holding_id: Uuid) -> Result<Vec<TradeLogView>, CoreError> {
        self.trade_service.trade_logs(holding_id)
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Export a portfolio's full valuation summary as pretty-printed
    /// JSON (for display or debugging).
    pub async fn export_summary_json(&self, portfolio_id: Uuid) -> Result<String, CoreError> {
        let summary = self.portfolio_summary(portfolio_id).await?;
        serde_json::to_string_pretty(&summary)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize summary: {e}")))
    }
}

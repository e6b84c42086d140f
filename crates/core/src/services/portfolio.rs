use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use super::holdings::HoldingsService;
use crate::errors::CoreError;
use crate::models::portfolio::{IncludeFlag, Portfolio, PortfolioCreate, PortfolioUpdate};
use crate::models::valuation::{round_money, GainRate, PortfolioListItem, TotalSummary};
use crate::stores::traits::{HoldingStore, PortfolioStore, TradeLedger};

/// Manages the portfolio lifecycle and member-level rollups.
///
/// Mutations validate first, then commit; valuation work is delegated to
/// the `HoldingsService` passed in by the caller.
pub struct PortfolioService {
    portfolio_store: Arc<dyn PortfolioStore>,
    holding_store: Arc<dyn HoldingStore>,
    trade_ledger: Arc<dyn TradeLedger>,
}

impl PortfolioService {
    pub fn new(
        portfolio_store: Arc<dyn PortfolioStore>,
        holding_store: Arc<dyn HoldingStore>,
        trade_ledger: Arc<dyn TradeLedger>,
    ) -> Self {
        Self {
            portfolio_store,
            holding_store,
            trade_ledger,
        }
    }

    /// Create a portfolio for a member. New portfolios start with
    /// `IncludeFlag::Y`.
    pub fn create(&self, create: PortfolioCreate, member_id: Uuid) -> Result<Portfolio, CoreError> {
        Self::validate(&create.name, &create.currency)?;
        let portfolio = Portfolio::of(create, member_id);
        self.portfolio_store.add(portfolio.clone());
        Ok(portfolio)
    }

    /// Update a portfolio's mutable fields. The id and owning member are
    /// untouched.
    pub fn update(&self, id: Uuid, update: PortfolioUpdate) -> Result<Portfolio, CoreError> {
        Self::validate(&update.name, &update.currency)?;
        let existing = self.portfolio_store.get(id)?;
        let updated = existing.apply(update);
        self.portfolio_store.update(updated.clone())?;
        Ok(updated)
    }

    /// Delete a portfolio together with its holdings and their trade
    /// events.
    pub fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        self.portfolio_store.get(id)?;
        for holding_id in self.holding_store.remove_by_portfolio(id) {
            self.trade_ledger.remove_for_holding(holding_id);
        }
        self.portfolio_store.remove(id)
    }

    /// A single portfolio, or `PortfolioNotFound`.
    pub fn get(&self, id: Uuid) -> Result<Portfolio, CoreError> {
        self.portfolio_store.get(id)
    }

    /// All portfolios owned by a member.
    #[must_use]
    pub fn list_by_member(&self, member_id: Uuid) -> Vec<Portfolio> {
        self.portfolio_store.list_by_member(member_id)
    }

    /// List a member's portfolios with each one's gain and gain rate.
    pub async fn list_with_valuations(
        &self,
        holdings_service: &HoldingsService,
        member_id: Uuid,
    ) -> Result<Vec<PortfolioListItem>, CoreError> {
        let portfolios = self.portfolio_store.list_by_member(member_id);
        let mut items = Vec::with_capacity(portfolios.len());

        for portfolio in portfolios {
            let summary = holdings_service.portfolio_summary(portfolio.id).await?;
            items.push(PortfolioListItem {
                id: portfolio.id,
                name: portfolio.name,
                kind: portfolio.kind,
                include_flag: portfolio.include_flag,
                gain: summary.total_gain,
                gain_rate: summary.total_gain_rate,
            });
        }

        Ok(items)
    }

    /// Member-level rollup across portfolios flagged `IncludeFlag::Y`.
    ///
    /// Excluded portfolios cost no quote lookups at all.
    pub async fn total_summary(
        &self,
        holdings_service: &HoldingsService,
        member_id: Uuid,
    ) -> Result<TotalSummary, CoreError> {
        let mut total_asset_value = Decimal::ZERO;
        let mut total_gain = Decimal::ZERO;
        let mut total_cost_basis = Decimal::ZERO;

        for portfolio in self
            .portfolio_store
            .list_by_member(member_id)
            .into_iter()
            .filter(|p| p.include_flag == IncludeFlag::Y)
        {
            let summary = holdings_service.portfolio_summary(portfolio.id).await?;
            total_asset_value += summary.total_asset_value;
            total_gain += summary.total_gain;
            total_cost_basis += summary.total_cost_basis;
        }

        Ok(TotalSummary {
            total_asset_value: round_money(total_asset_value),
            total_gain: round_money(total_gain),
            total_gain_rate: GainRate::from_totals(total_asset_value, total_cost_basis),
        })
    }

    /// A portfolio name must be non-empty and the currency a 3-letter
    /// alphabetic code.
    fn validate(name: &str, currency: &str) -> Result<(), CoreError> {
        if name.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Portfolio name must not be empty".into(),
            ));
        }

        let trimmed = currency.trim();
        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::ValidationError(format!(
                "Invalid currency code '{currency}': must be exactly 3 ASCII letters (e.g., USD, KRW, EUR)"
            )));
        }

        Ok(())
    }
}

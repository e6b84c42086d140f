use futures::stream::{self, StreamExt, TryStreamExt};
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use super::cost_basis::CostBasisCalculator;
use super::valuation::ValuationEngine;
use crate::errors::CoreError;
use crate::models::holding::Holding;
use crate::models::valuation::{round_money, GainRate, PortfolioSummary, ValuationResult};
use crate::quotes::client::QuoteClient;
use crate::stores::traits::{HoldingStore, TradeLedger};

/// How many quote lookups may be in flight at once while valuing a
/// portfolio.
const QUOTE_FANOUT_LIMIT: usize = 4;

/// Values every holding of a portfolio and rolls the results up.
///
/// Quote lookups fan out concurrently up to `QUOTE_FANOUT_LIMIT` and are
/// joined before any total is produced, so no holding is dropped or
/// double-counted. The first `QuoteUnavailable` fails the whole request:
/// partial summaries are never returned and no zero-filled entry ever
/// stands in for a failed lookup.
pub struct HoldingsService {
    holding_store: Arc<dyn HoldingStore>,
    trade_ledger: Arc<dyn TradeLedger>,
    quote_client: QuoteClient,
    cost_basis: CostBasisCalculator,
    engine: ValuationEngine,
}

impl HoldingsService {
    pub fn new(
        holding_store: Arc<dyn HoldingStore>,
        trade_ledger: Arc<dyn TradeLedger>,
        quote_client: QuoteClient,
    ) -> Self {
        Self {
            holding_store,
            trade_ledger,
            quote_client,
            cost_basis: CostBasisCalculator::new(),
            engine: ValuationEngine::new(),
        }
    }

    /// Value a single holding: read its ledger, derive the cost basis,
    /// fetch one quote, combine.
    pub async fn value_holding(&self, holding: &Holding) -> Result<ValuationResult, CoreError> {
        let events = self.trade_ledger.list_events(holding.id);
        let basis = self.cost_basis.calculate(&events)?;
        let quote = self.quote_client.get_quote(&holding.stock_code).await?;
        Ok(self.engine.value_holding(holding, &basis, &quote))
    }

    /// Value every holding in a portfolio.
    pub async fn portfolio_valuations(
        &self,
        portfolio_id: Uuid,
    ) -> Result<Vec<ValuationResult>, CoreError> {
        let holdings = self.holding_store.list_by_portfolio(portfolio_id);
        log::debug!(
            "valuing {} holding(s) for portfolio {portfolio_id}",
            holdings.len()
        );
        self.value_all(holdings).await
    }

    /// Value only the holdings matching a stock code (exact match).
    ///
    /// The filter narrows the holding set before any quote lookup, so
    /// non-matching holdings cost no external calls.
    pub async fn portfolio_valuations_by_code(
        &self,
        portfolio_id: Uuid,
        stock_code: &str,
    ) -> Result<Vec<ValuationResult>, CoreError> {
        let code = stock_code.trim().to_uppercase();
        let holdings: Vec<Holding> = self
            .holding_store
            .list_by_portfolio(portfolio_id)
            .into_iter()
            .filter(|h| h.stock_code == code)
            .collect();
        self.value_all(holdings).await
    }

    /// Roll every holding of a portfolio up into a summary.
    pub async fn portfolio_summary(
        &self,
        portfolio_id: Uuid,
    ) -> Result<PortfolioSummary, CoreError> {
        let holdings = self.portfolio_valuations(portfolio_id).await?;
        Ok(Self::summarize(portfolio_id, holdings))
    }

    /// Aggregate per-holding valuations into portfolio totals.
    ///
    /// Total gain rate uses the summed asset values over the summed cost
    /// bases, with the same zero-basis-to-zero degradation as a single
    /// holding.
    fn summarize(portfolio_id: Uuid, holdings: Vec<ValuationResult>) -> PortfolioSummary {
        let mut total_asset_value = Decimal::ZERO;
        let mut total_gain = Decimal::ZERO;
        let mut total_cost_basis = Decimal::ZERO;

        for valuation in &holdings {
            total_asset_value += valuation.asset_value;
            total_gain += valuation.gain;
            total_cost_basis += round_money(valuation.average_cost * valuation.quantity);
        }

        PortfolioSummary {
            portfolio_id,
            total_asset_value: round_money(total_asset_value),
            total_gain: round_money(total_gain),
            total_cost_basis: round_money(total_cost_basis),
            total_gain_rate: GainRate::from_totals(total_asset_value, total_cost_basis),
            holdings,
        }
    }

    /// Bounded scatter-gather over the quote service.
    ///
    /// `buffered` keeps input order and joins every lookup before
    /// returning, so the caller aggregates over a complete set.
    async fn value_all(&self, holdings: Vec<Holding>) -> Result<Vec<ValuationResult>, CoreError> {
        stream::iter(holdings)
            .map(|holding| async move { self.value_holding(&holding).await })
            .buffered(QUOTE_FANOUT_LIMIT)
            .try_collect()
            .await
    }
}

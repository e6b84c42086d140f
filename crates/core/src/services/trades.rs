use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::holding::Holding;
use crate::models::trade::{TradeEvent, TradeLogView};
use crate::quotes::client::QuoteClient;
use crate::stores::traits::{HoldingStore, PortfolioStore, TradeLedger};

/// Records buys and serves trade history.
///
/// Every recorded event stamps the current market price from the quote
/// service for display; the stamp never feeds cost basis.
pub struct TradeService {
    portfolio_store: Arc<dyn PortfolioStore>,
    holding_store: Arc<dyn HoldingStore>,
    trade_ledger: Arc<dyn TradeLedger>,
    quote_client: QuoteClient,
}

impl TradeService {
    pub fn new(
        portfolio_store: Arc<dyn PortfolioStore>,
        holding_store: Arc<dyn HoldingStore>,
        trade_ledger: Arc<dyn TradeLedger>,
        quote_client: QuoteClient,
    ) -> Self {
        Self {
            portfolio_store,
            holding_store,
            trade_ledger,
            quote_client,
        }
    }

    /// Record a first buy: creates the holding and its opening trade
    /// event in one step.
    pub async fn add_stock(
        &self,
        portfolio_id: Uuid,
        stock_code: &str,
        unit_price: Decimal,
        quantity: Decimal,
        traded_at: NaiveDateTime,
    ) -> Result<Holding, CoreError> {
        self.portfolio_store.get(portfolio_id)?;
        Self::validate_trade(stock_code, unit_price, quantity)?;

        let holding = Holding::new(stock_code, portfolio_id);
        let market_price = self.quote_client.get_quote(&holding.stock_code).await?.price;

        self.holding_store.add(holding.clone());
        self.trade_ledger.record(TradeEvent::buy(
            holding.id,
            unit_price,
            quantity,
            traded_at,
            market_price,
        ));

        Ok(holding)
    }

    /// Record an additional buy on an existing holding.
    pub async fn buy_more(
        &self,
        holding_id: Uuid,
        unit_price: Decimal,
        quantity: Decimal,
        traded_at: NaiveDateTime,
    ) -> Result<TradeEvent, CoreError> {
        let holding = self.holding_store.get(holding_id)?;
        Self::validate_trade(&holding.stock_code, unit_price, quantity)?;

        let market_price = self.quote_client.get_quote(&holding.stock_code).await?.price;
        let event = TradeEvent::buy(holding.id, unit_price, quantity, traded_at, market_price);
        self.trade_ledger.record(event.clone());

        Ok(event)
    }

    /// Remove a holding and its trade history.
    ///
    /// Removal is unconditional: a holding with open quantity can be
    /// removed.
    pub fn remove_stock(&self, holding_id: Uuid) -> Result<(), CoreError> {
        self.holding_store.remove(holding_id)?;
        self.trade_ledger.remove_for_holding(holding_id);
        Ok(())
    }

    /// Trade history of a holding, newest first.
    pub fn trade_logs(&self, holding_id: Uuid) -> Result<Vec<TradeLogView>, CoreError> {
        let holding = self.holding_store.get(holding_id)?;

        let mut events = self.trade_ledger.list_events(holding.id);
        events.sort_by(|a, b| b.traded_at.cmp(&a.traded_at));

        Ok(events.iter().map(TradeLogView::from_event).collect())
    }

    fn validate_trade(
        stock_code: &str,
        unit_price: Decimal,
        quantity: Decimal,
    ) -> Result<(), CoreError> {
        if stock_code.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Stock code must not be empty".into(),
            ));
        }
        if unit_price.is_sign_negative() {
            return Err(CoreError::InvalidTradeData(format!(
                "unit price must not be negative (got {unit_price})"
            )));
        }
        if quantity <= Decimal::ZERO {
            return Err(CoreError::InvalidTradeData(format!(
                "quantity must be positive (got {quantity})"
            )));
        }
        Ok(())
    }
}

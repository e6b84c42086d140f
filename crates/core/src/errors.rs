use thiserror::Error;

/// Unified error type for the entire stock-portfolio-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
///
/// A zero or empty cost basis is deliberately NOT an error: it resolves
/// to a defined zero result (see `GainRate::ZeroBasis`).
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Trade Ledger ────────────────────────────────────────────────
    #[error("Invalid trade data: {0}")]
    InvalidTradeData(String),

    // ── Quotes / Network ────────────────────────────────────────────
    #[error("Quote unavailable for {code}: {reason}")]
    QuoteUnavailable { code: String, reason: String },

    #[error("Network error: {0}")]
    Network(String),

    // ── Lookups ─────────────────────────────────────────────────────
    #[error("Portfolio not found: {0}")]
    PortfolioNotFound(String),

    #[error("Holding not found: {0}")]
    HoldingNotFound(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    // ── Serialization ───────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CoreError {
    /// Wrap a lower-level failure as `QuoteUnavailable` for a stock code.
    /// An error that already is `QuoteUnavailable` keeps its original code.
    #[must_use]
    pub fn quote_unavailable(code: &str, source: CoreError) -> Self {
        match source {
            unavailable @ CoreError::QuoteUnavailable { .. } => unavailable,
            other => CoreError::QuoteUnavailable {
                code: code.to_string(),
                reason: other.to_string(),
            },
        }
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs so
        // request details never leak into logs. reqwest errors often
        // contain the full URL.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}

use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::quote::QuoteSnapshot;

/// Trait abstraction over the external stock-data service.
///
/// The valuation engine treats every implementation as an unreliable
/// remote dependency: transport failures and malformed payloads surface
/// as `CoreError::QuoteUnavailable` for the affected stock code, never a
/// crash. Retry and backoff policy belongs to the caller, not here.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch current market data for a stock code.
    async fn get_quote(&self, stock_code: &str) -> Result<QuoteSnapshot, CoreError>;

    /// Look up the icon image URL for a stock code.
    /// Returns an empty string when the code has no image.
    async fn find_image_url(&self, stock_code: &str) -> Result<String, CoreError>;
}

use std::sync::Arc;

use super::traits::QuoteProvider;
use crate::errors::CoreError;
use crate::models::quote::QuoteSnapshot;

/// Validating front door to the quote provider.
///
/// Every snapshot the valuation engine sees has passed through here: the
/// price is guaranteed non-negative and the failure mode is always
/// `QuoteUnavailable` carrying the stock code, whatever the transport
/// actually reported. The client performs no retries and no caching;
/// each lookup is one remote call.
#[derive(Clone)]
pub struct QuoteClient {
    provider: Arc<dyn QuoteProvider>,
}

impl QuoteClient {
    pub fn new(provider: Arc<dyn QuoteProvider>) -> Self {
        Self { provider }
    }

    /// Name of the underlying provider (for logs/errors).
    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Fetch and validate a snapshot for one stock code.
    pub async fn get_quote(&self, stock_code: &str) -> Result<QuoteSnapshot, CoreError> {
        let snapshot = self
            .provider
            .get_quote(stock_code)
            .await
            .map_err(|e| CoreError::quote_unavailable(stock_code, e))?;

        if snapshot.price.is_sign_negative() {
            log::warn!(
                "{} returned negative price {} for {stock_code}",
                self.provider.name(),
                snapshot.price
            );
            return Err(CoreError::QuoteUnavailable {
                code: stock_code.to_string(),
                reason: format!("negative price {}", snapshot.price),
            });
        }

        Ok(snapshot)
    }

    /// Look up the icon image URL for a stock code.
    pub async fn find_image_url(&self, stock_code: &str) -> Result<String, CoreError> {
        self.provider
            .find_image_url(stock_code)
            .await
            .map_err(|e| CoreError::quote_unavailable(stock_code, e))
    }
}

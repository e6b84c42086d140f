use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;

use super::traits::QuoteProvider;
use crate::errors::CoreError;
use crate::models::quote::QuoteSnapshot;

/// HTTP client for the remote stock-data service.
///
/// The service speaks JSON with string-typed fields:
/// - `GET {base}/stocks/{code}` → `{"name": ..., "sector": ..., "price": ...}`
/// - `GET {base}/stocks/search?keyword={code}` → `[{"stockCode": ..., "imageUrl": ...}, ...]`
///
/// The price arrives as a string and is parsed into a `Decimal`; a
/// missing or non-numeric price is a `QuoteUnavailable` failure, not a
/// parse crash.
pub struct StockApiProvider {
    client: Client,
    base_url: String,
}

impl StockApiProvider {
    /// Build a provider against a service base URL (no trailing slash
    /// required).
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

// ── Stock service response types ────────────────────────────────────

#[derive(Deserialize)]
struct StockResponse {
    name: Option<String>,
    sector: Option<String>,
    price: Option<String>,
}

#[derive(Deserialize)]
struct SearchEntry {
    #[serde(rename = "stockCode")]
    stock_code: String,
    #[serde(rename = "imageUrl", default)]
    image_url: String,
}

#[async_trait]
impl QuoteProvider for StockApiProvider {
    fn name(&self) -> &str {
        "StockApi"
    }

    async fn get_quote(&self, stock_code: &str) -> Result<QuoteSnapshot, CoreError> {
        let url = format!("{}/stocks/{}", self.base_url, stock_code);
        log::debug!("fetching quote for {stock_code}");

        let resp: StockResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| CoreError::QuoteUnavailable {
                code: stock_code.to_string(),
                reason: format!("stock service returned {e}"),
            })?
            .json()
            .await
            .map_err(|e| CoreError::QuoteUnavailable {
                code: stock_code.to_string(),
                reason: format!("malformed quote payload: {e}"),
            })?;

        let raw_price = resp.price.ok_or_else(|| CoreError::QuoteUnavailable {
            code: stock_code.to_string(),
            reason: "price field missing".into(),
        })?;

        let price: Decimal = raw_price.parse().map_err(|_| {
            log::warn!("non-numeric price {raw_price:?} for {stock_code}");
            CoreError::QuoteUnavailable {
                code: stock_code.to_string(),
                reason: format!("non-numeric price {raw_price:?}"),
            }
        })?;

        let image_url = self.find_image_url(stock_code).await?;

        Ok(QuoteSnapshot {
            name: resp.name.unwrap_or_default(),
            sector: resp.sector.unwrap_or_default(),
            price,
            image_url,
        })
    }

    async fn find_image_url(&self, stock_code: &str) -> Result<String, CoreError> {
        let url = format!("{}/stocks/search?keyword={}", self.base_url, stock_code);

        let entries: Vec<SearchEntry> = self
            .client
            .get(&url)
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::QuoteUnavailable {
                code: stock_code.to_string(),
                reason: format!("malformed search payload: {e}"),
            })?;

        // Exact-code match only; the search endpoint may return loose matches
        Ok(entries
            .into_iter()
            .find(|entry| entry.stock_code == stock_code)
            .map(|entry| entry.image_url)
            .unwrap_or_default())
    }
}

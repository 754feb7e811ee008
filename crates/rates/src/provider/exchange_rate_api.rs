//! exchangerate-api.com provider implementation.
//!
//! Fetches the latest full rate table relative to a base currency from the
//! free `/v4/latest/<BASE>` JSON endpoint. No API key is required for the
//! free tier.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use reqwest::Client;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::RateFetchError;
use crate::models::RateSnapshot;
use crate::provider::RateSourceProvider;

const BASE_URL: &str = "https://api.exchangerate-api.com";
const PROVIDER_ID: &str = "EXCHANGE_RATE_API";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Remote rate source backed by the exchangerate-api.com latest-rates
/// endpoint.
pub struct ExchangeRateApiProvider {
    client: Client,
    base_url: String,
}

/// `/v4/latest/<BASE>` response body.
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    base: String,
    rates: HashMap<String, f64>,
}

impl ExchangeRateApiProvider {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Creates a provider pointing at a custom endpoint root. Useful for
    /// tests and self-hosted mirrors.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Parse and validate a response body into a snapshot.
    ///
    /// The declared base must match the requested one and every rate must
    /// be a positive finite number; anything else fails the whole fetch.
    fn snapshot_from_body(body: &str, base: &str) -> Result<RateSnapshot, RateFetchError> {
        let response: LatestRatesResponse =
            serde_json::from_str(body).map_err(|e| RateFetchError::MalformedResponse {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            })?;

        if response.base != base {
            return Err(RateFetchError::BaseMismatch {
                provider: PROVIDER_ID.to_string(),
                base: response.base,
            });
        }

        let mut rates = HashMap::with_capacity(response.rates.len());
        for (code, value) in response.rates {
            if !value.is_finite() || value <= 0.0 {
                return Err(RateFetchError::InvalidRate {
                    provider: PROVIDER_ID.to_string(),
                    code,
                });
            }
            // from_f64 rounds to the nearest short decimal form.
            let rate = Decimal::from_f64(value).ok_or_else(|| RateFetchError::InvalidRate {
                provider: PROVIDER_ID.to_string(),
                code: code.clone(),
            })?;
            rates.insert(code, rate);
        }

        Ok(RateSnapshot {
            base: base.to_string(),
            timestamp: Utc::now(),
            rates,
        })
    }
}

impl Default for ExchangeRateApiProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateSourceProvider for ExchangeRateApiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_latest(&self, base: &str) -> Result<RateSnapshot, RateFetchError> {
        let url = format!("{}/v4/latest/{}", self.base_url, base);

        debug!("Rate fetch request: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                RateFetchError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                RateFetchError::Network(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RateFetchError::InvalidStatus {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| RateFetchError::MalformedResponse {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            })?;

        Self::snapshot_from_body(&body, base)
    }
}

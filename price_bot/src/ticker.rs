use crate::error::FetchError;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::fmt::{self, Debug, Display};
use std::time::Duration;

pub const TICKER_URL: &str = "https://yobit.net/api/3/ticker/btc_usd";
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Sell price as the ticker API rendered it.
///
/// The text is kept verbatim so a string `"27123.45"` and a number `27123.45`
/// display identically and nothing gets rounded on the way to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceQuote {
    sell: String,
}

impl PriceQuote {
    /// Accepts a JSON number or a string holding a number.
    pub fn from_json(value: &Value) -> Result<Self, FetchError> {
        match value {
            Value::Number(number) => Ok(Self {
                sell: number.to_string(),
            }),
            Value::String(text) if text.trim().parse::<f64>().is_ok() => Ok(Self {
                sell: text.clone(),
            }),
            other => Err(FetchError::Malformed(format!(
                "sell price is not numeric: {}",
                other
            ))),
        }
    }

    pub fn sell(&self) -> &str {
        &self.sell
    }
}

impl Display for PriceQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sell)
    }
}

#[derive(Deserialize, Debug)]
struct TickerResponse {
    btc_usd: PairTicker,
}

#[derive(Deserialize, Debug)]
struct PairTicker {
    sell: Value,
}

/// Parses `{"btc_usd": {"sell": ...}}`.
pub fn parse_ticker_body(body: &[u8]) -> Result<PriceQuote, FetchError> {
    let response: TickerResponse = serde_json::from_slice(body)?;
    PriceQuote::from_json(&response.btc_usd.sell)
}

#[async_trait]
pub trait PriceSource: Send + Sync {
    /// One attempt, no retries.
    async fn fetch(&self) -> Result<PriceQuote, FetchError>;
}

pub struct TickerClient {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl Debug for TickerClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickerClient")
            .field("url", &self.url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for TickerClient {
    fn default() -> Self {
        Self::new(TICKER_URL, FETCH_TIMEOUT)
    }
}

impl TickerClient {
    pub fn new(url: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.to_owned(),
            timeout,
        }
    }

    async fn request_quote(&self) -> Result<PriceQuote, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        parse_ticker_body(&body)
    }
}

#[async_trait]
impl PriceSource for TickerClient {
    async fn fetch(&self) -> Result<PriceQuote, FetchError> {
        let quote = self.request_quote().await;
        match &quote {
            Ok(quote) => tracing::debug!("Fetched BTC price: {}", quote),
            Err(e) => tracing::error!("Error fetching BTC price: {}", e),
        }
        quote
    }
}

use async_trait::async_trait;
use chrono::NaiveDate;
use openclose_core::date_format;
use openclose_core::quote::{DailyQuote, SearchPage};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::warn;

use crate::error::ClientError;
use crate::fetcher::QuoteFetcher;

const JSONMOCK_BASE_URL: &str = "https://jsonmock.hackerrank.com/api";

/// Client for the jsonmock stocks search API.
/// No authentication required. One page of results per request.
pub struct JsonMockClient {
    client: Client,
    base_url: String,
}

impl JsonMockClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: JSONMOCK_BASE_URL.to_string(),
        }
    }

    /// Create with a custom base URL (for testing).
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

impl Default for JsonMockClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct RawSearchResponse {
    page: u32,
    per_page: u32,
    total: u32,
    total_pages: u32,
    data: Vec<RawQuote>,
}

#[derive(Debug, Deserialize)]
struct RawQuote {
    date: String,
    open: Decimal,
    close: Decimal,
    high: Decimal,
    low: Decimal,
}

impl RawQuote {
    /// A date the fixed format rejects is logged and left unset rather than
    /// failing the whole reply.
    fn into_quote(self) -> DailyQuote {
        let date = match date_format::parse_date(&self.date) {
            Ok(d) => Some(d),
            Err(e) => {
                warn!("bad quote date in server reply: {e}");
                None
            }
        };

        DailyQuote {
            date,
            open: self.open,
            close: self.close,
            high: self.high,
            low: self.low,
        }
    }
}

fn into_page(raw: RawSearchResponse) -> SearchPage {
    SearchPage {
        page: raw.page,
        per_page: raw.per_page,
        total: raw.total,
        total_pages: raw.total_pages,
        quotes: raw.data.into_iter().map(RawQuote::into_quote).collect(),
    }
}

#[async_trait]
impl QuoteFetcher for JsonMockClient {
    fn name(&self) -> &str {
        "jsonmock"
    }

    async fn fetch_day(&self, date: NaiveDate) -> Result<SearchPage, ClientError> {
        let response = self
            .client
            .get(format!("{}/stocks/search", self.base_url))
            .header("Accept", "application/json")
            .query(&[("date", date_format::format_date(date))])
            .send()
            .await?;

        // Anything other than 200 aborts the run, 2xx included.
        if response.status() != reqwest::StatusCode::OK {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status,
                message: body,
            });
        }

        let body: RawSearchResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Parse(format!("failed to parse response: {e}")))?;

        Ok(into_page(body))
    }
}

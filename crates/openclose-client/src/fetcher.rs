use async_trait::async_trait;
use chrono::NaiveDate;
use openclose_core::quote::SearchPage;

use crate::error::ClientError;

/// Trait for fetching one day of stock search results from an external source.
#[async_trait]
pub trait QuoteFetcher: Send + Sync {
    /// Source name (for logging/display).
    fn name(&self) -> &str;

    /// Fetch the search results page for a single date.
    async fn fetch_day(&self, date: NaiveDate) -> Result<SearchPage, ClientError>;
}

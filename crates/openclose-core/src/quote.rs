use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single daily stock quote.
///
/// `date` is `None` when the server sent a date string that does not match
/// the fixed format; such quotes never match a search date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyQuote {
    pub date: Option<NaiveDate>,
    pub open: Decimal,
    pub close: Decimal,
    pub high: Decimal,
    pub low: Decimal,
}

/// One page of results from the stocks search API.
///
/// The pagination fields are part of the reply schema; the query loop never
/// requests past the first page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
    pub page: u32,
    pub per_page: u32,
    pub total: u32,
    pub total_pages: u32,
    pub quotes: Vec<DailyQuote>,
}

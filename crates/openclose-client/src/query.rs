use chrono::NaiveDate;
use openclose_core::date_format::{format_date, weekday_name};
use openclose_core::date_range::DateRange;
use openclose_core::quote::DailyQuote;
use tracing::debug;

use crate::error::ClientError;
use crate::fetcher::QuoteFetcher;

/// Collect formatted `"<date> <open> <close>"` lines for every quote in
/// `[first, last)` whose weekday name matches `weekday`.
///
/// Both bounds must parse under the fixed format before the first request
/// goes out. One fetch per calendar date, issued strictly in ascending
/// order and awaited to completion; the first fetch error aborts the run.
pub async fn open_and_close_prices<F>(
    fetcher: &F,
    first: &str,
    last: &str,
    weekday: &str,
) -> Result<Vec<String>, ClientError>
where
    F: QuoteFetcher + ?Sized,
{
    let range = DateRange::parse(first, last)?;

    let mut lines = Vec::new();
    for date in range {
        let page = fetcher.fetch_day(date).await?;
        debug!("{date}: {} quote(s)", page.quotes.len());
        lines.extend(
            page.quotes
                .iter()
                .filter_map(|quote| format_match(quote, date, weekday)),
        );
    }

    Ok(lines)
}

/// `Some` line iff the quote's own weekday name equals `weekday` and its
/// date equals the searched date. Quotes with an unset date never match.
fn format_match(quote: &DailyQuote, search_date: NaiveDate, weekday: &str) -> Option<String> {
    let date = quote.date?;
    if weekday_name(date) != weekday || date != search_date {
        return None;
    }
    Some(format!("{} {} {}", format_date(date), quote.open, quote.close))
}

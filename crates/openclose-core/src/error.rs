use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("invalid date '{input}': expected a date like 5-January-2000")]
    InvalidDate { input: String },
}

use anyhow::{Context, Result};
use clap::Parser;
use openclose_client::fetcher::QuoteFetcher;
use openclose_client::jsonmock::JsonMockClient;
use openclose_client::query::open_and_close_prices;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "openclose",
    about = "Print open/close prices for stock quotes matching a weekday"
)]
struct Cli {
    /// First date of the range, inclusive (e.g. 1-January-2000)
    #[arg(long, default_value = "1-January-2000")]
    first_date: String,

    /// Last date of the range, exclusive
    #[arg(long, default_value = "22-February-2000")]
    last_date: String,

    /// Weekday name to match, case-sensitive (e.g. Monday)
    #[arg(long, default_value = "Monday")]
    weekday: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries result lines only.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = JsonMockClient::new();
    info!(
        "Querying {} for {} quotes from {} to {}",
        client.name(),
        cli.weekday,
        cli.first_date,
        cli.last_date
    );

    let lines = open_and_close_prices(&client, &cli.first_date, &cli.last_date, &cli.weekday)
        .await
        .context("query failed")?;

    for line in &lines {
        println!("{line}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_defaults() {
        let cli = Cli::try_parse_from(["openclose"]).unwrap();
        assert_eq!(cli.first_date, "1-January-2000");
        assert_eq!(cli.last_date, "22-February-2000");
        assert_eq!(cli.weekday, "Monday");
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn parse_overrides() {
        let cli = Cli::try_parse_from([
            "openclose",
            "--first-date",
            "3-January-2000",
            "--last-date",
            "10-January-2000",
            "--weekday",
            "Friday",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.first_date, "3-January-2000");
        assert_eq!(cli.last_date, "10-January-2000");
        assert_eq!(cli.weekday, "Friday");
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["openclose", "--page", "2"]).is_err());
    }
}

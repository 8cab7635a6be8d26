//! Moneta reducer
//!
//! Loads exchange rates and holdings from configuration, adds the holdings
//! up as one expression, and prints it reduced to the target currency.
//!
//! Usage: cargo run --bin moneta [-- --json]

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moneta_core::{Bank, Expression, Money};
use moneta_shared::AppConfig;
use moneta_shared::config::HoldingConfig;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moneta=info,moneta_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let json = std::env::args().skip(1).any(|arg| arg == "--json");

    let config = AppConfig::load()?;
    info!(
        rates = config.rates.len(),
        holdings = config.holdings.len(),
        target = %config.target_currency,
        "Configuration loaded"
    );

    let bank = Bank::from_rates(&config.rates)?;
    let Some(holdings) = holdings_expression(&config.holdings) else {
        warn!("No holdings configured");
        return Ok(());
    };

    let result = bank.reduce(&holdings.times(config.multiplier), config.target_currency.as_str());
    info!(%result, "Holdings reduced");

    if json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        println!("{result}");
    }
    Ok(())
}

/// Folds holdings left to right into one `Sum` tree.
fn holdings_expression(holdings: &[HoldingConfig]) -> Option<Expression> {
    holdings
        .iter()
        .map(|h| Expression::from(Money::new(h.amount, h.currency.as_str())))
        .reduce(|acc, next| acc.plus(next))
}

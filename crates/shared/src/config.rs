//! Application configuration management.

use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Currency the holdings are reduced to.
    #[serde(default = "default_target_currency")]
    pub target_currency: String,
    /// Factor applied to the whole holdings expression before reduction.
    #[serde(default = "default_multiplier")]
    pub multiplier: i64,
    /// Directed exchange rates.
    #[serde(default)]
    pub rates: Vec<RateConfig>,
    /// Amounts to add up.
    #[serde(default)]
    pub holdings: Vec<HoldingConfig>,
}

/// One directed exchange rate: `amount(from) / rate = amount(to)`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RateConfig {
    /// Source currency code.
    pub from: String,
    /// Target currency code.
    pub to: String,
    /// Integer divisor, must be positive.
    pub rate: i64,
}

/// One amount held in a currency.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HoldingConfig {
    /// Amount in whole units.
    pub amount: i64,
    /// Currency code.
    pub currency: String,
}

fn default_target_currency() -> String {
    "USD".to_string()
}

fn default_multiplier() -> i64 {
    1
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            target_currency: default_target_currency(),
            multiplier: default_multiplier(),
            rates: Vec::new(),
            holdings: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `MONETA__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("MONETA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not parse or is invalid.
    pub fn from_toml_str(source: &str) -> AppResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    /// Checks that every configured rate is positive.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` naming the first offending pair.
    pub fn validate(&self) -> AppResult<()> {
        if let Some(bad) = self.rates.iter().find(|r| r.rate <= 0) {
            return Err(AppError::Validation(format!(
                "rate {} -> {} must be positive, got {}",
                bad.from, bad.to, bad.rate
            )));
        }
        Ok(())
    }
}

//! Runtime configuration: environment variables plus positional arguments.

use ledger_core::{BigDecimal, DomainError, parse_amount};
use ledger_observability::LogFormat;
use thiserror::Error;

pub const BANK_NAME_VAR: &str = "LEDGER_BANK_NAME";
pub const LOG_FORMAT_VAR: &str = "LEDGER_LOG_FORMAT";

pub const DEFAULT_BANK_NAME: &str = "Banco del Estado";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("expected 0 or 5 arguments (<source-owner> <source-balance> <destination-owner> <destination-balance> <amount>), got {0}")]
    Arity(usize),

    #[error("{field}: {source}")]
    Amount {
        field: &'static str,
        #[source]
        source: DomainError,
    },

    #[error("LEDGER_LOG_FORMAT: {0}")]
    LogFormat(String),
}

/// One side of the transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holder {
    pub owner: String,
    pub balance: BigDecimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bank_name: String,
    pub log_format: LogFormat,
    pub source: Holder,
    pub destination: Holder,
    pub amount: BigDecimal,
}

impl Config {
    /// Load from the process environment and the given arguments (program
    /// name already stripped).
    pub fn from_env_and_args(args: impl IntoIterator<Item = String>) -> Result<Self, ConfigError> {
        Self::from_parts(
            std::env::var(BANK_NAME_VAR).ok(),
            std::env::var(LOG_FORMAT_VAR).ok(),
            args.into_iter().collect(),
        )
    }

    /// Without arguments the default scenario is used: Andres (1500.8989)
    /// sends 500 to Jhon Doe (2500).
    pub fn from_parts(
        bank_name: Option<String>,
        log_format: Option<String>,
        args: Vec<String>,
    ) -> Result<Self, ConfigError> {
        let log_format = match log_format {
            Some(raw) => raw.parse().map_err(ConfigError::LogFormat)?,
            None => LogFormat::default(),
        };

        let (source, destination, amount) = match args.as_slice() {
            [] => (
                holder("Andres", "1500.8989", "source-balance")?,
                holder("Jhon Doe", "2500", "destination-balance")?,
                amount("500", "amount")?,
            ),
            [src_owner, src_balance, dst_owner, dst_balance, raw_amount] => (
                holder(src_owner, src_balance, "source-balance")?,
                holder(dst_owner, dst_balance, "destination-balance")?,
                amount(raw_amount, "amount")?,
            ),
            other => return Err(ConfigError::Arity(other.len())),
        };

        Ok(Self {
            bank_name: bank_name.unwrap_or_else(|| DEFAULT_BANK_NAME.to_string()),
            log_format,
            source,
            destination,
            amount,
        })
    }
}

fn amount(raw: &str, field: &'static str) -> Result<BigDecimal, ConfigError> {
    parse_amount(raw).map_err(|source| ConfigError::Amount { field, source })
}

fn holder(owner: &str, balance: &str, field: &'static str) -> Result<Holder, ConfigError> {
    Ok(Holder {
        owner: owner.to_string(),
        balance: amount(balance, field)?,
    })
}

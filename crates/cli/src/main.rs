//! Runs a single transfer between two freshly registered accounts.
//!
//! ```text
//! ledger-cli [<source-owner> <source-balance> <destination-owner> <destination-balance> <amount>]
//! ```

mod config;

use std::process::ExitCode;

use anyhow::Context;
use ledger_banking::{Account, Bank};
use ledger_core::DomainError;

use crate::config::{BANK_NAME_VAR, Config};

fn main() -> anyhow::Result<ExitCode> {
    let config = Config::from_env_and_args(std::env::args().skip(1))
        .context("invalid configuration")?;

    ledger_observability::tracing::init(config.log_format);

    if std::env::var_os(BANK_NAME_VAR).is_none() {
        tracing::warn!("{BANK_NAME_VAR} not set; using default bank name");
    }

    let mut bank = open_bank(&config);
    match bank.transfer_between(0, 1, &config.amount) {
        Ok(()) => {
            tracing::info!(bank = %bank.name(), amount = %config.amount, "transfer completed");
            for account in bank.accounts() {
                println!("{account}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err @ DomainError::InsufficientFunds) => {
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err).context("transfer failed"),
    }
}

/// Bank with the source registered first and the destination second.
fn open_bank(config: &Config) -> Bank {
    Bank::with_accounts(
        config.bank_name.clone(),
        [
            Account::new(config.source.owner.clone(), config.source.balance.clone()),
            Account::new(config.destination.owner.clone(), config.destination.balance.clone()),
        ],
    )
}

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use ledger_core::money::is_negative;
use ledger_core::{BankId, DomainError, DomainResult, ValueObject};

/// An owner's monetary position.
///
/// Balances only change through [`Account::debit`] and [`Account::credit`]
/// (or an explicit [`Account::set_balance`]). A successful debit never leaves
/// the balance below zero. Arithmetic is exact at any magnitude or scale.
///
/// Equality is by value: two accounts with the same owner and numerically equal
/// balances compare equal, whichever bank (if any) they are registered with.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Account {
    owner: String,
    balance: BigDecimal,
    /// Bank this account was registered with. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bank: Option<BankId>,
}

impl Account {
    pub fn new(owner: impl Into<String>, balance: BigDecimal) -> Self {
        Self {
            owner: owner.into(),
            balance,
            bank: None,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> &BigDecimal {
        &self.balance
    }

    /// Bank this account was registered with, if any.
    pub fn bank(&self) -> Option<BankId> {
        self.bank
    }

    pub fn set_owner(&mut self, owner: impl Into<String>) {
        self.owner = owner.into();
    }

    pub fn set_balance(&mut self, balance: BigDecimal) {
        self.balance = balance;
    }

    /// Record the registering bank. Only `Bank` does this.
    pub(crate) fn attach_to(&mut self, bank: BankId) {
        self.bank = Some(bank);
    }

    /// Remove `amount` from the balance.
    ///
    /// Fails with [`DomainError::InsufficientFunds`] when the result would be
    /// below zero; the balance is left untouched in that case.
    pub fn debit(&mut self, amount: &BigDecimal) -> DomainResult<()> {
        let new_balance = &self.balance - amount;
        if is_negative(&new_balance) {
            return Err(DomainError::InsufficientFunds);
        }

        self.balance = new_balance;
        tracing::debug!(owner = %self.owner, %amount, balance = %self.balance, "account debited");
        Ok(())
    }

    /// Add `amount` to the balance. Never fails; a negative amount lowers the
    /// balance.
    pub fn credit(&mut self, amount: &BigDecimal) {
        self.balance = &self.balance + amount;
        tracing::debug!(owner = %self.owner, %amount, balance = %self.balance, "account credited");
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.balance == other.balance
    }
}

impl Eq for Account {}

impl ValueObject for Account {}

impl core::fmt::Display for Account {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.owner, self.balance.to_plain_string())
    }
}

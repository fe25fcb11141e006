use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use ledger_core::{BankId, DomainError, DomainResult, Entity};

use crate::account::Account;

/// A named collection of accounts that mediates transfers.
///
/// The bank owns its collection. Registered accounts point back to it through
/// a [`BankId`], never through a reference. Deserializing a bank re-registers
/// every account, so a stale or missing `bank` field in the input is replaced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "BankRecord")]
pub struct Bank {
    id: BankId,
    name: String,
    accounts: Vec<Account>,
}

impl Bank {
    /// Create a bank with a fresh identifier and no accounts.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(BankId::new(), name)
    }

    pub fn with_id(id: BankId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            accounts: Vec::new(),
        }
    }

    /// Full construction: every supplied account is registered in order.
    pub fn with_accounts(name: impl Into<String>, accounts: impl IntoIterator<Item = Account>) -> Self {
        let mut bank = Self::new(name);
        for account in accounts {
            bank.add_account(account);
        }
        bank
    }

    pub fn id_typed(&self) -> BankId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Registered accounts, in insertion order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn account_mut(&mut self, index: usize) -> Option<&mut Account> {
        self.accounts.get_mut(index)
    }

    /// First registered account held by `owner`.
    pub fn find_by_owner(&self, owner: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.owner() == owner)
    }

    pub fn has_owner(&self, owner: &str) -> bool {
        self.accounts.iter().any(|a| a.owner() == owner)
    }

    /// Whether `account` was registered with this bank.
    pub fn owns(&self, account: &Account) -> bool {
        account.bank() == Some(self.id)
    }

    /// Append `account` to the collection and point it back at this bank.
    ///
    /// Registering the same holder twice is allowed.
    pub fn add_account(&mut self, mut account: Account) {
        account.attach_to(self.id);
        tracing::debug!(bank = %self.name, owner = %account.owner(), "account registered");
        self.accounts.push(account);
    }

    /// Move `amount` from `source` to `destination`.
    ///
    /// The debit is attempted first; the destination is credited only if it
    /// succeeds, so a failed transfer mutates neither account. Neither account
    /// has to be registered with this bank.
    pub fn transfer(
        &self,
        source: &mut Account,
        destination: &mut Account,
        amount: &BigDecimal,
    ) -> DomainResult<()> {
        settle(&self.name, source, destination, amount)
    }

    /// Same contract as [`Bank::transfer`], between two registered accounts
    /// addressed by insertion index.
    pub fn transfer_between(&mut self, from: usize, to: usize, amount: &BigDecimal) -> DomainResult<()> {
        let len = self.accounts.len();
        if from >= len || to >= len {
            return Err(DomainError::validation(format!(
                "account index out of range (from: {from}, to: {to}, len: {len})"
            )));
        }
        if from == to {
            return Err(DomainError::validation("source and destination must differ"));
        }

        let (source, destination) = if from < to {
            let (head, tail) = self.accounts.split_at_mut(to);
            (&mut head[from], &mut tail[0])
        } else {
            let (head, tail) = self.accounts.split_at_mut(from);
            (&mut tail[0], &mut head[to])
        };

        settle(&self.name, source, destination, amount)
    }
}

/// Wire shape of a bank; converted through `add_account` on the way in.
#[derive(Deserialize)]
struct BankRecord {
    id: BankId,
    name: String,
    #[serde(default)]
    accounts: Vec<Account>,
}

impl From<BankRecord> for Bank {
    fn from(record: BankRecord) -> Self {
        let mut bank = Bank::with_id(record.id, record.name);
        for account in record.accounts {
            bank.add_account(account);
        }
        bank
    }
}

fn settle(
    bank: &str,
    source: &mut Account,
    destination: &mut Account,
    amount: &BigDecimal,
) -> DomainResult<()> {
    let span = tracing::info_span!(
        "transfer",
        bank,
        from = %source.owner(),
        to = %destination.owner(),
        %amount
    );
    let _enter = span.enter();

    source.debit(amount)?;
    destination.credit(amount);

    tracing::debug!("transfer settled");
    Ok(())
}

impl Default for Bank {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl Entity for Bank {
    type Id = BankId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::Zero;
    use ledger_core::parse_amount;
    use proptest::prelude::*;

    fn dec(raw: &str) -> BigDecimal {
        parse_amount(raw).unwrap()
    }

    fn test_bank() -> Bank {
        Bank::new("Banco del Estado")
    }

    #[test]
    fn new_bank_is_empty() {
        let bank = test_bank();
        assert_eq!(bank.name(), "Banco del Estado");
        assert!(bank.is_empty());
        assert_eq!(bank.len(), 0);
    }

    #[test]
    fn default_bank_can_be_named_later() {
        let mut bank = Bank::default();
        assert_eq!(bank.name(), "");
        bank.set_name("Banco del Estado");
        assert_eq!(bank.name(), "Banco del Estado");
    }

    #[test]
    fn add_account_sets_back_reference_and_keeps_order() {
        let mut bank = test_bank();
        bank.add_account(Account::new("Jhon Doe", dec("2500")));
        bank.add_account(Account::new("Andrés", dec("1500.8989")));

        assert_eq!(bank.len(), 2);
        assert_eq!(bank.accounts()[0].owner(), "Jhon Doe");
        assert_eq!(bank.accounts()[1].owner(), "Andrés");
        for account in bank.accounts() {
            assert_eq!(account.bank(), Some(bank.id_typed()));
            assert_eq!(account.bank().as_ref(), Some(bank.id()));
        }
    }

    #[test]
    fn with_accounts_registers_each_account() {
        let bank = Bank::with_accounts(
            "Banco del Estado",
            [
                Account::new("Jhon Doe", dec("2500")),
                Account::new("Andrés", dec("1500.8989")),
            ],
        );

        assert_eq!(bank.len(), 2);
        assert!(bank.accounts().iter().all(|a| a.bank() == Some(bank.id_typed())));
    }

    #[test]
    fn with_id_uses_supplied_identifier() {
        let id = BankId::new();
        let bank = Bank::with_id(id, "Banco del Estado");
        assert_eq!(bank.id_typed(), id);
    }

    #[test]
    fn duplicate_registration_is_permitted() {
        let mut bank = test_bank();
        let account = Account::new("Pepa", dec("510"));
        bank.add_account(account.clone());
        bank.add_account(account);
        assert_eq!(bank.len(), 2);
    }

    #[test]
    fn lookups_by_owner() {
        let mut bank = test_bank();
        bank.add_account(Account::new("Jhon Doe", dec("2500")));
        bank.add_account(Account::new("Andrés", dec("1500.8989")));
        bank.add_account(Account::new("Andrés", dec("1")));

        let found = bank.find_by_owner("Andrés").unwrap();
        assert_eq!(*found.balance(), dec("1500.8989"));
        assert!(bank.has_owner("Jhon Doe"));
        assert!(!bank.has_owner("Maria"));
        assert!(bank.find_by_owner("Maria").is_none());
    }

    #[test]
    fn transfer_moves_funds_between_unregistered_accounts() {
        let bank = test_bank();
        let mut jhon = Account::new("Jhon Doe", dec("2500"));
        let mut andres = Account::new("Andrés", dec("1500.8989"));

        bank.transfer(&mut andres, &mut jhon, &dec("500")).unwrap();

        assert_eq!(andres.balance().to_plain_string(), "1000.8989");
        assert_eq!(jhon.balance().to_plain_string(), "3000");
        assert_eq!(andres.bank(), None);
    }

    #[test]
    fn failed_transfer_mutates_neither_account() {
        let bank = test_bank();
        let mut source = Account::new("Lucas", dec("700"));
        let mut destination = Account::new("Luca", dec("750"));

        let err = bank
            .transfer(&mut source, &mut destination, &dec("700.01"))
            .unwrap_err();

        assert_eq!(err, DomainError::InsufficientFunds);
        assert_eq!(source.balance().to_plain_string(), "700");
        assert_eq!(destination.balance().to_plain_string(), "750");
    }

    #[test]
    fn transfer_between_registered_accounts() {
        let mut bank = test_bank();
        bank.add_account(Account::new("Jhon Doe", dec("2500")));
        bank.add_account(Account::new("Andrés", dec("1500.8989")));

        bank.transfer_between(1, 0, &dec("500")).unwrap();
        assert_eq!(bank.accounts()[0].balance().to_plain_string(), "3000");
        assert_eq!(bank.accounts()[1].balance().to_plain_string(), "1000.8989");

        bank.transfer_between(0, 1, &dec("3000")).unwrap();
        assert!(bank.accounts()[0].balance().is_zero());
        assert_eq!(bank.accounts()[1].balance().to_plain_string(), "4000.8989");
    }

    #[test]
    fn transfer_between_propagates_insufficient_funds() {
        let mut bank = test_bank();
        bank.add_account(Account::new("Maria", dec("300")));
        bank.add_account(Account::new("maria", dec("0")));

        let err = bank.transfer_between(0, 1, &dec("301")).unwrap_err();
        assert!(err.is_insufficient_funds());
        assert_eq!(*bank.accounts()[0].balance(), dec("300"));
        assert!(bank.accounts()[1].balance().is_zero());
    }

    #[test]
    fn transfer_between_rejects_bad_indices() {
        let mut bank = test_bank();
        bank.add_account(Account::new("Maria", dec("300")));

        assert!(matches!(
            bank.transfer_between(0, 0, &dec("1")),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            bank.transfer_between(0, 5, &dec("1")),
            Err(DomainError::Validation(_))
        ));
        assert_eq!(*bank.accounts()[0].balance(), dec("300"));
    }

    #[test]
    fn account_mut_edits_registered_account() {
        let mut bank = test_bank();
        bank.add_account(Account::new("Cata", dec("1000")));

        bank.account_mut(0).unwrap().credit(&dec("0.5"));
        assert_eq!(bank.accounts()[0].balance().to_plain_string(), "1000.5");
        assert!(bank.account_mut(1).is_none());
    }

    #[test]
    fn owns_resolves_the_registering_bank() {
        let mut bank = test_bank();
        let other = Bank::new("Banco Central");
        bank.add_account(Account::new("Jhon Doe", dec("2500")));

        let registered = &bank.accounts()[0];
        assert!(bank.owns(registered));
        assert!(!other.owns(registered));
        assert!(!bank.owns(&Account::new("Jhon Doe", dec("2500"))));

        let home = [&bank, &other].into_iter().find(|b| b.owns(registered)).unwrap();
        assert_eq!(home.name(), "Banco del Estado");
    }

    #[test]
    fn transfer_is_exact_beyond_fixed_precision() {
        let bank = test_bank();
        let mut source = Account::new("src", dec("79228162514264337593543950335"));
        let mut destination = Account::new("dst", dec("10000000000000000000"));

        bank.transfer(&mut source, &mut destination, &dec("0.000000000000000000001"))
            .unwrap();

        assert_eq!(
            source.balance().to_plain_string(),
            "79228162514264337593543950334.999999999999999999999"
        );
        assert_eq!(
            destination.balance().to_plain_string(),
            "10000000000000000000.000000000000000000001"
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: a transfer either moves exactly `amount` or moves nothing,
        /// and the combined balance is conserved either way.
        #[test]
        fn transfer_is_all_or_nothing(
            src in "[0-9]{1,36}",
            dst in "[0-9]{1,36}",
            amount in "[0-9]{1,36}",
            scale in 0i64..36,
        ) {
            let at_scale = |digits: &str| dec(&format!("{digits}e-{scale}"));
            let (src, dst, amount) = (at_scale(&src), at_scale(&dst), at_scale(&amount));
            let bank = test_bank();
            let mut source = Account::new("src", src.clone());
            let mut destination = Account::new("dst", dst.clone());

            match bank.transfer(&mut source, &mut destination, &amount) {
                Ok(()) => {
                    prop_assert!(amount <= src);
                    prop_assert_eq!(source.balance(), &(&src - &amount));
                    prop_assert_eq!(destination.balance(), &(&dst + &amount));
                }
                Err(err) => {
                    prop_assert!(amount > src);
                    prop_assert_eq!(err, DomainError::InsufficientFunds);
                    prop_assert_eq!(source.balance(), &src);
                    prop_assert_eq!(destination.balance(), &dst);
                }
            }
            prop_assert_eq!(source.balance() + destination.balance(), &src + &dst);
        }
    }
}

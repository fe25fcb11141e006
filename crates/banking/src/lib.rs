//! Banking domain module: accounts and the bank that mediates transfers.
//!
//! This crate contains the balance rules (debit with overdraft protection,
//! unconditional credit) and the debit-then-credit transfer, implemented purely
//! as deterministic domain logic (no IO, no storage, no locking).

pub mod account;
pub mod bank;

pub use account::Account;
pub use bank::Bank;

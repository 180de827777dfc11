use crate::domain::account::AccountNumber;
use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Failure modes of the ledger.
///
/// The first four variants are the account-level soft failures: they are
/// reported back to the caller, leave no trace in the account history and
/// never abort a processing run.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("the informed amount is invalid")]
    InvalidAmount,
    #[error("insufficient funds")]
    InsufficientFunds,
    #[error("withdrawal amount exceeds the {limit} per-withdrawal limit")]
    WithdrawalLimitExceeded { limit: Decimal },
    #[error("maximum number of withdrawals ({max}) reached")]
    WithdrawalCountExceeded { max: usize },
    #[error("no customer registered under tax id {0}")]
    UnknownCustomer(String),
    #[error("a customer is already registered under tax id {0}")]
    DuplicateCustomer(String),
    #[error("account {0} not found")]
    UnknownAccount(AccountNumber),
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

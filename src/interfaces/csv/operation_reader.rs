use crate::domain::account::AccountNumber;
use crate::error::{LedgerError, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// The operations a ledger script can request.
#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    OpenCustomer,
    OpenAccount,
    Deposit,
    Withdraw,
    Statement,
    ListAccounts,
}

/// One row of an operations script.
///
/// Columns a given operation does not use stay empty; the per-operation
/// `require_*` accessors turn a missing column into an
/// [`LedgerError::InvalidOperation`].
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Operation {
    pub op: OperationKind,
    pub customer: Option<String>,
    pub account: Option<AccountNumber>,
    pub amount: Option<Decimal>,
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub address: Option<String>,
}

impl Operation {
    pub fn require_tax_id(&self) -> Result<&str> {
        self.customer
            .as_deref()
            .ok_or_else(|| LedgerError::InvalidOperation("missing customer tax id".to_string()))
    }

    pub fn require_amount(&self) -> Result<Decimal> {
        self.amount
            .ok_or_else(|| LedgerError::InvalidOperation("missing amount".to_string()))
    }

    pub fn require_name(&self) -> Result<&str> {
        self.name
            .as_deref()
            .ok_or_else(|| LedgerError::InvalidOperation("missing customer name".to_string()))
    }

    pub fn require_birth_date(&self) -> Result<NaiveDate> {
        self.birth_date
            .ok_or_else(|| LedgerError::InvalidOperation("missing birth date".to_string()))
    }

    pub fn require_address(&self) -> Result<&str> {
        self.address
            .as_deref()
            .ok_or_else(|| LedgerError::InvalidOperation("missing address".to_string()))
    }
}

/// Reads operations from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<Operation>`. It handles whitespace trimming and flexible record
/// lengths automatically.
pub struct OperationReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OperationReader<R> {
    /// Creates a new `OperationReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes operations.
    pub fn operations(self) -> impl Iterator<Item = Result<Operation>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(LedgerError::from))
    }
}

use crate::domain::account::Account;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag shared by transactions and the history records they leave behind.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => f.write_str("deposit"),
            TransactionKind::Withdrawal => f.write_str("withdrawal"),
        }
    }
}

/// A single deposit or withdrawal to be applied to an account.
///
/// Transactions are transient command objects: constructed, registered once
/// (`register` consumes the value), then gone. Their effect persists only
/// through the record they append to the account history.
#[derive(Debug, PartialEq, Clone)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Decimal,
}

impl Transaction {
    pub fn deposit(amount: Decimal) -> Self {
        Self {
            kind: TransactionKind::Deposit,
            amount,
        }
    }

    pub fn withdrawal(amount: Decimal) -> Self {
        Self {
            kind: TransactionKind::Withdrawal,
            amount,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Applies the transaction to `account` and, only if the account
    /// operation succeeds, appends the matching record to its history.
    ///
    /// A rejected operation leaves both the balance and the history
    /// untouched: the history never holds a record for a failed operation,
    /// and every successful mutation produces exactly one record.
    pub fn register(self, account: &mut Account) -> Result<()> {
        match self.kind {
            TransactionKind::Deposit => account.deposit(self.amount)?,
            TransactionKind::Withdrawal => account.withdraw(self.amount)?,
        }
        account.history_mut().add(&self);
        Ok(())
    }
}

use crate::domain::history::History;
use crate::domain::transaction::TransactionKind;
use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Identifies an account within a branch.
pub type AccountNumber = u32;

/// Branch code shared by every account; the ledger models a single branch.
pub const DEFAULT_BRANCH: &str = "0001";

/// Per-withdrawal ceiling applied to current accounts.
pub const DEFAULT_WITHDRAWAL_LIMIT: Decimal = dec!(500.00);

/// Number of withdrawals a current account allows per period.
pub const DEFAULT_MAX_WITHDRAWALS: usize = 3;

/// Represents a monetary value held by an account.
///
/// This is a wrapper around `rust_decimal::Decimal` to enforce domain-specific rules
/// and provide type safety for financial calculations.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Balance(Decimal);

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

// Implement basic arithmetic for Balance to make it a usable Value Object
impl Add for Balance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Balance {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Balance {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Balance {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

/// Distinguishes plain accounts from current accounts and carries the
/// policy fields of each kind.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// No withdrawal policy beyond balance sufficiency.
    Basic,
    /// Checking account with a per-withdrawal ceiling and a cap on the
    /// number of withdrawals recorded in the history.
    Current {
        withdrawal_limit: Decimal,
        max_withdrawals: usize,
    },
}

impl AccountKind {
    /// A current account with the default limits.
    pub fn current() -> Self {
        Self::Current {
            withdrawal_limit: DEFAULT_WITHDRAWAL_LIMIT,
            max_withdrawals: DEFAULT_MAX_WITHDRAWALS,
        }
    }
}

/// A balance-holding account owned by a customer.
///
/// All state changes go through [`Account::deposit`] and
/// [`Account::withdraw`]; both validate before mutating, and neither touches
/// the history. Recording is the job of
/// [`Transaction::register`](crate::domain::transaction::Transaction::register),
/// which only appends after the account operation has succeeded.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Account {
    number: AccountNumber,
    branch: String,
    owner: String,
    balance: Balance,
    history: History,
    kind: AccountKind,
}

impl Account {
    pub fn new(number: AccountNumber, owner: impl Into<String>, kind: AccountKind) -> Self {
        Self {
            number,
            branch: DEFAULT_BRANCH.to_string(),
            owner: owner.into(),
            balance: Balance::ZERO,
            history: History::default(),
            kind,
        }
    }

    /// Opens a current account with the default limits, owned by the
    /// customer registered under `owner`.
    pub fn current(number: AccountNumber, owner: impl Into<String>) -> Self {
        Self::new(number, owner, AccountKind::current())
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Tax id of the owning customer.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Balance {
        self.balance
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// Credits `amount` to the balance.
    ///
    /// Fails with [`LedgerError::InvalidAmount`] when `amount` is not
    /// positive, leaving the account untouched.
    pub fn deposit(&mut self, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount);
        }
        self.balance += Balance::new(amount);
        Ok(())
    }

    /// Debits `amount` from the balance.
    ///
    /// Current accounts check their policy first: the per-withdrawal
    /// ceiling, then the number of withdrawals already in the history.
    /// Every kind then validates the amount and balance sufficiency.
    /// All checks precede the mutation, so a rejected withdrawal leaves
    /// the account untouched.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<()> {
        if let AccountKind::Current {
            withdrawal_limit,
            max_withdrawals,
        } = self.kind
        {
            if amount > withdrawal_limit {
                return Err(LedgerError::WithdrawalLimitExceeded {
                    limit: withdrawal_limit,
                });
            }
            if self.history.count(TransactionKind::Withdrawal) >= max_withdrawals {
                return Err(LedgerError::WithdrawalCountExceeded {
                    max: max_withdrawals,
                });
            }
        }
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount);
        }
        if amount > self.balance.value() {
            return Err(LedgerError::InsufficientFunds);
        }
        self.balance -= Balance::new(amount);
        Ok(())
    }

    /// Human-readable account header for listings and statements.
    pub fn summary(&self, holder: &str) -> String {
        format!(
            "branch:  {}\naccount: {}\nholder:  {}",
            self.branch, self.number, holder
        )
    }
}

use crate::domain::account::{Account, AccountNumber};
use crate::domain::transaction::Transaction;
use crate::error::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identity data that varies per customer type.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub enum CustomerKind {
    Individual {
        name: String,
        birth_date: NaiveDate,
        tax_id: String,
    },
}

/// An accountholder.
///
/// The customer owns its list of account numbers; account state itself lives
/// in the account store, so accounts stay addressable by other code. Tax id
/// uniqueness is the registry's invariant, not checked here.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Customer {
    address: String,
    accounts: Vec<AccountNumber>,
    kind: CustomerKind,
}

impl Customer {
    /// Registers an individual customer with no accounts yet.
    pub fn individual(
        name: impl Into<String>,
        birth_date: NaiveDate,
        tax_id: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            accounts: Vec::new(),
            kind: CustomerKind::Individual {
                name: name.into(),
                birth_date,
                tax_id: tax_id.into(),
            },
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn accounts(&self) -> &[AccountNumber] {
        &self.accounts
    }

    pub fn kind(&self) -> &CustomerKind {
        &self.kind
    }

    pub fn tax_id(&self) -> &str {
        match &self.kind {
            CustomerKind::Individual { tax_id, .. } => tax_id,
        }
    }

    pub fn name(&self) -> &str {
        match &self.kind {
            CustomerKind::Individual { name, .. } => name,
        }
    }

    pub fn birth_date(&self) -> NaiveDate {
        match &self.kind {
            CustomerKind::Individual { birth_date, .. } => *birth_date,
        }
    }

    /// Links an account to this customer. Duplicates are the registry's
    /// concern; the list is append-only from the customer's side.
    pub fn add_account(&mut self, number: AccountNumber) {
        self.accounts.push(number);
    }

    /// Executes `transaction` against `account`.
    ///
    /// Currently a plain delegation to [`Transaction::register`]; per-customer
    /// policy (daily caps, say) would slot in here without touching
    /// `Account` or `Transaction`.
    pub fn realize_transaction(&self, account: &mut Account, transaction: Transaction) -> Result<()> {
        transaction.register(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::Balance;
    use crate::error::LedgerError;
    use rust_decimal_macros::dec;

    fn jane() -> Customer {
        Customer::individual(
            "Jane Roe",
            NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            "11122233344",
            "12 Elm St",
        )
    }

    #[test]
    fn test_individual_accessors() {
        let customer = jane();
        assert_eq!(customer.name(), "Jane Roe");
        assert_eq!(customer.tax_id(), "11122233344");
        assert_eq!(customer.address(), "12 Elm St");
        assert_eq!(
            customer.birth_date(),
            NaiveDate::from_ymd_opt(1990, 4, 12).unwrap()
        );
        assert!(customer.accounts().is_empty());
        let CustomerKind::Individual { name, .. } = customer.kind();
        assert_eq!(name, "Jane Roe");
    }

    #[test]
    fn test_add_account_appends_in_order() {
        let mut customer = jane();
        customer.add_account(1);
        customer.add_account(3);
        customer.add_account(3);
        assert_eq!(customer.accounts(), &[1, 3, 3]);
    }

    #[test]
    fn test_realize_transaction_delegates_to_register() {
        let customer = jane();
        let mut account = Account::current(1, customer.tax_id());

        customer
            .realize_transaction(&mut account, Transaction::deposit(dec!(100.0)))
            .unwrap();
        assert_eq!(account.balance(), Balance::new(dec!(100.0)));
        assert_eq!(account.history().len(), 1);

        let result =
            customer.realize_transaction(&mut account, Transaction::withdrawal(dec!(900.0)));
        assert!(matches!(
            result,
            Err(LedgerError::WithdrawalLimitExceeded { .. })
        ));
        assert_eq!(account.history().len(), 1);
    }
}

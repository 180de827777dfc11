use crate::domain::account::{Account, AccountNumber};
use crate::domain::customer::Customer;
use crate::domain::ports::{AccountStoreBox, CustomerStoreBox};
use crate::domain::transaction::Transaction;
use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;

/// The main entry point for every ledger operation.
///
/// `Bank` owns the customer registry and the account store. It ensures
/// sequential consistency by awaiting each operation to completion, so the
/// check-then-mutate-then-record sequence of a withdrawal is never
/// interleaved with another operation on the same account.
pub struct Bank {
    customers: CustomerStoreBox,
    accounts: AccountStoreBox,
}

impl Bank {
    /// Creates a new `Bank` over the given stores.
    ///
    /// # Arguments
    ///
    /// * `customers` - The registry of customers, keyed by tax id.
    /// * `accounts` - The store for account state.
    pub fn new(customers: CustomerStoreBox, accounts: AccountStoreBox) -> Self {
        Self {
            customers,
            accounts,
        }
    }

    /// Registers a customer. Tax ids are unique across the bank.
    pub async fn open_customer(&self, customer: Customer) -> Result<()> {
        let tax_id = customer.tax_id().to_string();
        if self.customers.get(&tax_id).await?.is_some() {
            return Err(LedgerError::DuplicateCustomer(tax_id));
        }
        self.customers.store(customer).await?;
        tracing::info!(%tax_id, "customer registered");
        Ok(())
    }

    /// Opens a current account with the default limits for an existing
    /// customer and links it to them.
    pub async fn open_account(&self, tax_id: &str) -> Result<AccountNumber> {
        let mut customer = self.customer(tax_id).await?;
        let number = self.accounts.next_number().await?;
        customer.add_account(number);
        self.accounts
            .store(Account::current(number, tax_id))
            .await?;
        self.customers.store(customer).await?;
        tracing::info!(tax_id, account = number, "account opened");
        Ok(number)
    }

    pub async fn deposit(
        &self,
        tax_id: &str,
        account: Option<AccountNumber>,
        amount: Decimal,
    ) -> Result<()> {
        self.transact(tax_id, account, Transaction::deposit(amount))
            .await
    }

    pub async fn withdraw(
        &self,
        tax_id: &str,
        account: Option<AccountNumber>,
        amount: Decimal,
    ) -> Result<()> {
        self.transact(tax_id, account, Transaction::withdrawal(amount))
            .await
    }

    /// Runs `transaction` against one of the customer's accounts and
    /// persists the outcome. Nothing is stored when the transaction is
    /// rejected, so a failed operation has no observable effect.
    pub async fn transact(
        &self,
        tax_id: &str,
        account: Option<AccountNumber>,
        transaction: Transaction,
    ) -> Result<()> {
        let customer = self.customer(tax_id).await?;
        let number = select_account(&customer, account)?;
        let mut account = self
            .accounts
            .get(number)
            .await?
            .ok_or(LedgerError::UnknownAccount(number))?;
        customer.realize_transaction(&mut account, transaction)?;
        self.accounts.store(account).await
    }

    /// Snapshot of a customer's account, with its history, for presentation.
    pub async fn statement(
        &self,
        tax_id: &str,
        account: Option<AccountNumber>,
    ) -> Result<(Customer, Account)> {
        let customer = self.customer(tax_id).await?;
        let number = select_account(&customer, account)?;
        let account = self
            .accounts
            .get(number)
            .await?
            .ok_or(LedgerError::UnknownAccount(number))?;
        Ok((customer, account))
    }

    /// Every account paired with its holder, ordered by account number.
    pub async fn accounts_with_holders(&self) -> Result<Vec<(Account, Customer)>> {
        let mut results = Vec::new();
        for account in self.accounts.all().await? {
            let customer = self.customer(account.owner()).await?;
            results.push((account, customer));
        }
        Ok(results)
    }

    /// Consumes the bank and returns the final state of all accounts.
    pub async fn into_results(self) -> Result<Vec<(Account, Customer)>> {
        self.accounts_with_holders().await
    }

    async fn customer(&self, tax_id: &str) -> Result<Customer> {
        self.customers
            .get(tax_id)
            .await?
            .ok_or_else(|| LedgerError::UnknownCustomer(tax_id.to_string()))
    }
}

/// Resolves which of the customer's accounts an operation targets.
///
/// An explicit number must belong to the customer. An omitted number is
/// accepted only when there is exactly one candidate.
fn select_account(customer: &Customer, requested: Option<AccountNumber>) -> Result<AccountNumber> {
    match requested {
        Some(number) if customer.accounts().contains(&number) => Ok(number),
        Some(number) => Err(LedgerError::UnknownAccount(number)),
        None => match customer.accounts() {
            [] => Err(LedgerError::InvalidOperation(
                "customer has no accounts".to_string(),
            )),
            [only] => Ok(*only),
            _ => Err(LedgerError::InvalidOperation(
                "account number required when the customer holds more than one account".to_string(),
            )),
        },
    }
}

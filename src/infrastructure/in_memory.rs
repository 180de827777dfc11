use crate::domain::account::{Account, AccountNumber};
use crate::domain::customer::Customer;
use crate::domain::ports::{AccountStore, CustomerStore};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use tokio::sync::RwLock;

/// A thread-safe in-memory registry of customers, keyed by tax id.
///
/// Uses `Arc<RwLock<HashMap>>` to allow shared concurrent access. The ledger
/// keeps all state in memory for the lifetime of the process.
#[derive(Default, Clone)]
pub struct InMemoryCustomerStore {
    customers: Arc<RwLock<HashMap<String, Customer>>>,
}

impl InMemoryCustomerStore {
    /// Creates a new, empty in-memory customer store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn store(&self, customer: Customer) -> Result<()> {
        let mut customers = self.customers.write().await;
        customers.insert(customer.tax_id().to_string(), customer);
        Ok(())
    }

    async fn get(&self, tax_id: &str) -> Result<Option<Customer>> {
        let customers = self.customers.read().await;
        Ok(customers.get(tax_id).cloned())
    }
}

/// A thread-safe in-memory store for accounts, keyed by account number.
///
/// Account numbers come from an atomic sequence, so concurrent opens cannot
/// hand out the same number.
#[derive(Default, Clone)]
pub struct InMemoryAccountStore {
    accounts: Arc<RwLock<HashMap<AccountNumber, Account>>>,
    sequence: Arc<AtomicU32>,
}

impl InMemoryAccountStore {
    /// Creates a new, empty in-memory account store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn next_number(&self) -> Result<AccountNumber> {
        Ok(self.sequence.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn store(&self, account: Account) -> Result<()> {
        let mut accounts = self.accounts.write().await;
        accounts.insert(account.number(), account);
        Ok(())
    }

    async fn get(&self, number: AccountNumber) -> Result<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&number).cloned())
    }

    async fn all(&self) -> Result<Vec<Account>> {
        let accounts = self.accounts.read().await;
        let mut all: Vec<Account> = accounts.values().cloned().collect();
        all.sort_by_key(|account| account.number());
        Ok(all)
    }
}

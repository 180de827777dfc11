use super::account::{Account, AccountNumber};
use super::customer::Customer;
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait CustomerStore: Send + Sync {
    async fn store(&self, customer: Customer) -> Result<()>;
    async fn get(&self, tax_id: &str) -> Result<Option<Customer>>;
}

#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Reserves the next account number in the branch sequence.
    async fn next_number(&self) -> Result<AccountNumber>;
    async fn store(&self, account: Account) -> Result<()>;
    async fn get(&self, number: AccountNumber) -> Result<Option<Account>>;
    /// All accounts, ordered by account number.
    async fn all(&self) -> Result<Vec<Account>>;
}

pub type CustomerStoreBox = Box<dyn CustomerStore>;
pub type AccountStoreBox = Box<dyn AccountStore>;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use teller::application::bank::Bank;
use teller::domain::account::Account;
use teller::domain::customer::Customer;
use teller::domain::ports::{AccountStoreBox, CustomerStoreBox};
use teller::infrastructure::in_memory::{InMemoryAccountStore, InMemoryCustomerStore};
use teller::interfaces::csv::account_writer::{AccountRow, AccountWriter};
use teller::interfaces::csv::operation_reader::{Operation, OperationKind, OperationReader};
use tracing::warn;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input operations CSV file
    input: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let customers: CustomerStoreBox = Box::new(InMemoryCustomerStore::new());
    let accounts: AccountStoreBox = Box::new(InMemoryAccountStore::new());
    let bank = Bank::new(customers, accounts);

    // Apply the script. Rejected operations are soft failures: warn and
    // keep going.
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = OperationReader::new(file);
    for op_result in reader.operations() {
        match op_result {
            Ok(op) => {
                if let Err(e) = apply(&bank, op).await {
                    warn!("operation rejected: {e}");
                }
            }
            Err(e) => {
                warn!("skipping unreadable row: {e}");
            }
        }
    }

    // Output final state
    let results = bank.into_results().await.into_diagnostic()?;
    let rows = results
        .iter()
        .map(|(account, customer)| AccountRow::new(account, customer))
        .collect();

    let stdout = io::stdout();
    let mut writer = AccountWriter::new(stdout.lock());
    writer.write_accounts(rows).into_diagnostic()?;

    Ok(())
}

async fn apply(bank: &Bank, op: Operation) -> teller::error::Result<()> {
    match op.op {
        OperationKind::OpenCustomer => {
            let customer = Customer::individual(
                op.require_name()?,
                op.require_birth_date()?,
                op.require_tax_id()?,
                op.require_address()?,
            );
            bank.open_customer(customer).await
        }
        OperationKind::OpenAccount => bank.open_account(op.require_tax_id()?).await.map(|_| ()),
        OperationKind::Deposit => {
            bank.deposit(op.require_tax_id()?, op.account, op.require_amount()?)
                .await
        }
        OperationKind::Withdraw => {
            bank.withdraw(op.require_tax_id()?, op.account, op.require_amount()?)
                .await
        }
        OperationKind::Statement => {
            let (customer, account) = bank.statement(op.require_tax_id()?, op.account).await?;
            print!("{}", render_statement(&account, customer.name()));
            Ok(())
        }
        OperationKind::ListAccounts => {
            for (account, customer) in bank.accounts_with_holders().await? {
                println!("{}", "=".repeat(40));
                println!("{}", account.summary(customer.name()));
            }
            Ok(())
        }
    }
}

fn render_statement(account: &Account, holder: &str) -> String {
    let mut out = String::new();
    out.push_str("================ STATEMENT ================\n");
    out.push_str(&account.summary(holder));
    out.push('\n');
    if account.history().is_empty() {
        out.push_str("no transactions recorded\n");
    } else {
        for record in account.history().entries() {
            out.push_str(&format!(
                "{}: {:.2} at {}\n",
                record.kind(),
                record.amount(),
                record.timestamp().format("%d/%m/%Y %H:%M:%S")
            ));
        }
    }
    out.push_str(&format!("balance: {:.2}\n", account.balance().value()));
    out.push_str("===========================================\n");
    out
}

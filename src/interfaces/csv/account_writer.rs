use crate::domain::account::{Account, AccountNumber};
use crate::domain::customer::Customer;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

/// Final per-account summary row.
///
/// Balances are rescaled to two decimal places on the way out, the ledger's
/// display convention.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct AccountRow {
    pub branch: String,
    pub account: AccountNumber,
    pub holder: String,
    pub balance: Decimal,
}

impl AccountRow {
    pub fn new(account: &Account, holder: &Customer) -> Self {
        let mut balance = account.balance().value();
        balance.rescale(2);
        Self {
            branch: account.branch().to_string(),
            account: account.number(),
            holder: holder.name().to_string(),
            balance,
        }
    }
}

/// Writes account summaries as CSV.
pub struct AccountWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> AccountWriter<W> {
    /// Creates a new `AccountWriter` over any `Write` target (e.g., Stdout).
    pub fn new(target: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(target),
        }
    }

    pub fn write_accounts(&mut self, rows: Vec<AccountRow>) -> Result<()> {
        for row in rows {
            self.writer.serialize(row)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_writer_emits_header_and_rows() {
        let customer = Customer::individual(
            "Jane Roe",
            NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            "11122233344",
            "12 Elm St",
        );
        let mut account = Account::current(1, customer.tax_id());
        account.deposit(dec!(250.0)).unwrap();
        account.withdraw(dec!(40.0)).unwrap();

        let mut out = Vec::new();
        let mut writer = AccountWriter::new(&mut out);
        writer
            .write_accounts(vec![AccountRow::new(&account, &customer)])
            .unwrap();
        drop(writer);

        let output = String::from_utf8(out).unwrap();
        assert_eq!(output, "branch,account,holder,balance\n0001,1,Jane Roe,210.00\n");
    }

    #[test]
    fn test_row_rescales_balance_to_two_places() {
        let customer = Customer::individual(
            "Jane Roe",
            NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            "11122233344",
            "12 Elm St",
        );
        let mut account = Account::current(1, customer.tax_id());
        account.deposit(dec!(200)).unwrap();

        let row = AccountRow::new(&account, &customer);
        assert_eq!(row.balance.to_string(), "200.00");
    }
}

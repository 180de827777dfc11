use crate::domain::transaction::{Transaction, TransactionKind};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single executed transaction. Immutable once appended to a history.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct TransactionRecord {
    kind: TransactionKind,
    amount: Decimal,
    timestamp: DateTime<Utc>,
}

impl TransactionRecord {
    fn now(kind: TransactionKind, amount: Decimal) -> Self {
        Self {
            kind,
            amount,
            timestamp: Utc::now(),
        }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Append-only log of the transactions executed against one account.
///
/// Insertion order is chronological order. Records are never mutated or
/// removed, so anything derived from the log (the withdrawal count, say) is
/// computed on read rather than cached.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct History {
    entries: Vec<TransactionRecord>,
}

impl History {
    /// Appends a record derived from `transaction`, stamped with the
    /// current time.
    pub fn add(&mut self, transaction: &Transaction) {
        self.entries
            .push(TransactionRecord::now(transaction.kind(), transaction.amount()));
    }

    pub fn entries(&self) -> &[TransactionRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded transactions of `kind`.
    pub fn count(&self, kind: TransactionKind) -> usize {
        self.entries.iter().filter(|r| r.kind() == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_history_preserves_insertion_order() {
        let mut history = History::default();
        history.add(&Transaction::deposit(dec!(100.0)));
        history.add(&Transaction::withdrawal(dec!(30.0)));

        let entries = history.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind(), TransactionKind::Deposit);
        assert_eq!(entries[0].amount(), dec!(100.0));
        assert_eq!(entries[1].kind(), TransactionKind::Withdrawal);
        assert_eq!(entries[1].amount(), dec!(30.0));
        assert!(entries[0].timestamp() <= entries[1].timestamp());
    }

    #[test]
    fn test_count_filters_by_kind() {
        let mut history = History::default();
        history.add(&Transaction::deposit(dec!(1.0)));
        history.add(&Transaction::withdrawal(dec!(1.0)));
        history.add(&Transaction::withdrawal(dec!(2.0)));

        assert_eq!(history.count(TransactionKind::Deposit), 1);
        assert_eq!(history.count(TransactionKind::Withdrawal), 2);
    }

    #[test]
    fn test_new_history_is_empty() {
        let history = History::default();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert_eq!(history.count(TransactionKind::Withdrawal), 0);
    }
}

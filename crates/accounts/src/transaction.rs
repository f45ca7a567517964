use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ledgerbank_core::{Money, ValueObject};

/// One ledger entry (immutable).
///
/// Positive amounts are deposits, negative amounts are withdrawals. The
/// constructor performs no validation: sign and positivity rules belong to
/// the [`crate::Account`] recording the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    amount: Money,
    occurred_at: DateTime<Utc>,
    note: String,
}

impl Transaction {
    pub fn new(amount: Money, occurred_at: DateTime<Utc>, note: impl Into<String>) -> Self {
        Self {
            amount,
            occurred_at,
            note: note.into(),
        }
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    pub fn note(&self) -> &str {
        &self.note
    }
}

impl ValueObject for Transaction {}

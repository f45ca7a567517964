//! Domain error model.

use thiserror::Error;

use crate::money::Money;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Every
/// operation that fails with one of these has had no side effect on the
/// account it was called on.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// A deposit or withdrawal was requested with a zero or negative amount.
    #[error("amount must be positive, got {amount}")]
    InvalidAmount { amount: Money },

    /// A withdrawal would push the balance below the account's floor and the
    /// active withdrawal policy rejected it.
    #[error(
        "insufficient funds: withdrawing {requested} from {available} would breach the {minimum} floor"
    )]
    InsufficientFunds {
        requested: Money,
        available: Money,
        minimum: Money,
    },
}

impl DomainError {
    pub fn invalid_amount(amount: Money) -> Self {
        Self::InvalidAmount { amount }
    }

    pub fn insufficient_funds(requested: Money, available: Money, minimum: Money) -> Self {
        Self::InsufficientFunds {
            requested,
            available,
            minimum,
        }
    }
}

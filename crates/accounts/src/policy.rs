use core::fmt;

use chrono::{DateTime, Utc};

use ledgerbank_core::{DomainError, DomainResult, Money};

use crate::transaction::Transaction;

/// Facts available to a withdrawal-limit check.
///
/// `available` is the balance read *before* anything is appended; the check
/// runs first and the withdrawal is recorded only if it passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalReview {
    pub requested: Money,
    pub available: Money,
    pub minimum: Money,
    pub occurred_at: DateTime<Utc>,
}

impl WithdrawalReview {
    /// Whether recording the withdrawal would push the balance below the floor.
    pub fn would_be_overdrawn(&self) -> bool {
        self.available - self.requested < self.minimum
    }
}

/// Withdrawal-limit check.
///
/// The single polymorphic point of the account model. A policy decides
/// whether a withdrawal may proceed, and may hand back one synthetic
/// transaction (a fee, interest, ...) to be recorded in the same step as the
/// withdrawal itself. Rejections carry [`DomainError::InsufficientFunds`]
/// and leave the ledger untouched.
pub trait WithdrawalPolicy: fmt::Debug + Send + Sync {
    fn review(&self, review: &WithdrawalReview) -> DomainResult<Option<Transaction>>;
}

/// Default policy: reject any withdrawal that would breach the floor.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinimumBalanceFloor;

impl WithdrawalPolicy for MinimumBalanceFloor {
    fn review(&self, review: &WithdrawalReview) -> DomainResult<Option<Transaction>> {
        if review.would_be_overdrawn() {
            return Err(DomainError::insufficient_funds(
                review.requested,
                review.available,
                review.minimum,
            ));
        }
        Ok(None)
    }
}

/// Overdraft-tolerant policy backing a line of credit.
///
/// A draw past the floor is accepted and a fee is recorded right after the
/// withdrawal instead of rejecting it.
#[derive(Debug, Clone, Copy)]
pub struct OverdraftWithFee {
    pub fee: Money,
}

impl WithdrawalPolicy for OverdraftWithFee {
    fn review(&self, review: &WithdrawalReview) -> DomainResult<Option<Transaction>> {
        if review.would_be_overdrawn() {
            return Ok(Some(Transaction::new(
                -self.fee,
                review.occurred_at,
                "Apply overdraft fee",
            )));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(available: i64, requested: i64, minimum: i64) -> WithdrawalReview {
        WithdrawalReview {
            requested: Money::from_cents(requested),
            available: Money::from_cents(available),
            minimum: Money::from_cents(minimum),
            occurred_at: Utc::now(),
        }
    }

    #[test]
    fn floor_rejects_only_below_the_minimum() {
        // Draining to exactly the floor is allowed.
        let at_floor = review(500, 500, 0);
        assert!(!at_floor.would_be_overdrawn());
        assert_eq!(MinimumBalanceFloor.review(&at_floor).unwrap(), None);

        let below_floor = review(500, 501, 0);
        assert!(below_floor.would_be_overdrawn());
        let err = MinimumBalanceFloor.review(&below_floor).unwrap_err();
        assert_eq!(
            err,
            DomainError::insufficient_funds(
                Money::from_cents(501),
                Money::from_cents(500),
                Money::ZERO,
            )
        );
    }

    #[test]
    fn floor_respects_a_nonzero_minimum() {
        assert!(review(500, 300, 250).would_be_overdrawn());
        assert!(!review(500, 250, 250).would_be_overdrawn());
    }

    #[test]
    fn overdraft_policy_charges_instead_of_rejecting() {
        let policy = OverdraftWithFee {
            fee: Money::from_units(20),
        };

        let fine = policy.review(&review(500, 100, 0)).unwrap();
        assert_eq!(fine, None);

        let charged = policy.review(&review(500, 600, 0)).unwrap().unwrap();
        assert_eq!(charged.amount(), Money::from_units(-20));
        assert_eq!(charged.note(), "Apply overdraft fee");
    }
}

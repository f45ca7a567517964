//! Account variants, assembled from the two extension points.
//!
//! A variant is a plain [`Account`] with a withdrawal policy and/or
//! month-end action attached at opening time.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use ledgerbank_core::{AccountNumbers, DomainResult, Money};

use crate::account::{Account, MonthEndAction, OpenAccount};
use crate::policy::OverdraftWithFee;

/// Month-end action that deposits a fixed amount, dated at invocation time.
#[derive(Debug, Clone, Copy)]
pub struct ScheduledDeposit {
    pub amount: Money,
}

impl MonthEndAction for ScheduledDeposit {
    fn run(&self, account: &mut Account, now: DateTime<Utc>) -> DomainResult<()> {
        if self.amount.is_zero() {
            return Ok(());
        }
        account.deposit(self.amount, now, "Add monthly deposit")
    }
}

/// Open a gift-card account: no balance floor, a fixed monthly top-up.
pub fn gift_card(
    numbers: &AccountNumbers,
    owner: impl Into<String>,
    initial_balance: Money,
    monthly_deposit: Money,
    opened_at: DateTime<Utc>,
) -> Account {
    let mut cmd = OpenAccount::new(owner, initial_balance, opened_at);
    cmd.month_end = Some(Arc::new(ScheduledDeposit {
        amount: monthly_deposit,
    }));
    Account::open(numbers, cmd)
}

/// Open a line-of-credit account.
///
/// The floor sits at `-credit_limit`, so withdrawals may take the balance
/// negative down to the line; drawing past it records an overdraft fee
/// instead of failing.
pub fn line_of_credit(
    numbers: &AccountNumbers,
    owner: impl Into<String>,
    initial_balance: Money,
    credit_limit: Money,
    overdraft_fee: Money,
    opened_at: DateTime<Utc>,
) -> Account {
    let mut cmd = OpenAccount::new(owner, initial_balance, opened_at);
    cmd.minimum_balance = -credit_limit;
    cmd.withdrawal_policy = Some(Arc::new(OverdraftWithFee { fee: overdraft_fee }));
    Account::open(numbers, cmd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::Transaction;

    fn test_time() -> DateTime<Utc> {
        "2026-01-31T18:00:00Z".parse().unwrap()
    }

    #[test]
    fn gift_card_deposits_every_month_end() {
        let numbers = AccountNumbers::starting_at(100);
        let mut card = gift_card(
            &numbers,
            "Card Holder",
            Money::ZERO,
            Money::from_units(10),
            test_time(),
        );

        for _ in 0..3 {
            card.on_month_end(test_time()).unwrap();
        }

        assert_eq!(card.balance(), Money::from_units(30));
        assert_eq!(card.ledger().len(), 3);
        for txn in card.ledger() {
            assert_eq!(txn.amount(), Money::from_units(10));
            assert_eq!(txn.note(), "Add monthly deposit");
        }
    }

    #[test]
    fn gift_card_with_zero_monthly_amount_does_nothing() {
        let numbers = AccountNumbers::starting_at(100);
        let mut card = gift_card(&numbers, "Card Holder", Money::ZERO, Money::ZERO, test_time());

        card.on_month_end(test_time()).unwrap();

        assert!(card.ledger().is_empty());
        assert_eq!(card.balance(), Money::ZERO);
    }

    #[test]
    fn line_of_credit_allows_drawing_into_the_line() {
        let numbers = AccountNumbers::starting_at(100);
        let mut credit = line_of_credit(
            &numbers,
            "Borrower",
            Money::ZERO,
            Money::from_units(100),
            Money::from_units(20),
            test_time(),
        );

        credit
            .withdraw(Money::from_units(50), test_time(), "Draw")
            .unwrap();

        assert_eq!(credit.balance(), Money::from_units(-50));
        assert_eq!(credit.ledger().len(), 1);
    }

    #[test]
    fn drawing_past_the_line_records_an_overdraft_fee() {
        let numbers = AccountNumbers::starting_at(100);
        let mut credit = line_of_credit(
            &numbers,
            "Borrower",
            Money::ZERO,
            Money::from_units(100),
            Money::from_units(20),
            test_time(),
        );

        credit
            .withdraw(Money::from_units(50), test_time(), "Draw")
            .unwrap();
        credit
            .withdraw(Money::from_units(60), test_time(), "Draw again")
            .unwrap();

        let amounts: Vec<Money> = credit.ledger().iter().map(Transaction::amount).collect();
        assert_eq!(
            amounts,
            vec![
                Money::from_units(-50),
                Money::from_units(-60),
                Money::from_units(-20),
            ]
        );
        assert_eq!(credit.ledger()[2].note(), "Apply overdraft fee");
        assert_eq!(credit.balance(), Money::from_units(-130));
    }
}

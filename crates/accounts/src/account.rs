use core::fmt;
use core::fmt::Write as _;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use ledgerbank_core::{AccountNumber, AccountNumbers, DomainError, DomainResult, Entity, Money};

use crate::policy::{MinimumBalanceFloor, WithdrawalPolicy, WithdrawalReview};
use crate::transaction::Transaction;

/// Month-end processing hook.
///
/// The base account does nothing at month end; variants attach an action
/// (e.g. [`crate::variants::ScheduledDeposit`]) that records scheduled
/// transactions through the normal deposit/withdraw path.
pub trait MonthEndAction: fmt::Debug + Send + Sync {
    fn run(&self, account: &mut Account, now: DateTime<Utc>) -> DomainResult<()>;
}

/// How an account should be opened.
///
/// `minimum_balance` defaults to zero; the two capability slots default to
/// "base account" behavior (floor-enforcing withdrawals, no month-end work).
#[derive(Debug, Clone)]
pub struct OpenAccount {
    pub owner: String,
    pub initial_balance: Money,
    pub minimum_balance: Money,
    pub withdrawal_policy: Option<Arc<dyn WithdrawalPolicy>>,
    pub month_end: Option<Arc<dyn MonthEndAction>>,
    pub opened_at: DateTime<Utc>,
}

impl OpenAccount {
    pub fn new(owner: impl Into<String>, initial_balance: Money, opened_at: DateTime<Utc>) -> Self {
        Self {
            owner: owner.into(),
            initial_balance,
            minimum_balance: Money::ZERO,
            withdrawal_policy: None,
            month_end: None,
            opened_at,
        }
    }
}

/// A customer account and the ledger of transactions made against it.
///
/// The ledger is append-only and is the sole source of truth: the balance is
/// derived by summation, never stored. Not internally synchronized; a
/// concurrent caller must wrap each account in its own lock.
#[derive(Debug, Clone)]
pub struct Account {
    number: AccountNumber,
    owner: String,
    minimum_balance: Money,
    ledger: Vec<Transaction>,
    withdrawal_policy: Option<Arc<dyn WithdrawalPolicy>>,
    month_end: Option<Arc<dyn MonthEndAction>>,
}

impl Account {
    /// Open an account, drawing its number from `numbers`.
    ///
    /// An initial balance > 0 seeds the ledger with a deposit dated at
    /// opening time.
    pub fn open(numbers: &AccountNumbers, cmd: OpenAccount) -> Self {
        let mut account = Self {
            number: numbers.issue(),
            owner: cmd.owner,
            minimum_balance: cmd.minimum_balance,
            ledger: Vec::new(),
            withdrawal_policy: cmd.withdrawal_policy,
            month_end: cmd.month_end,
        };
        if cmd.initial_balance.is_positive() {
            account.record(Transaction::new(
                cmd.initial_balance,
                cmd.opened_at,
                "Initial balance",
            ));
        }
        account
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Rename the owner. The account number, ledger, and balance are untouched.
    pub fn set_owner(&mut self, owner: impl Into<String>) {
        self.owner = owner.into();
    }

    pub fn minimum_balance(&self) -> Money {
        self.minimum_balance
    }

    pub fn ledger(&self) -> &[Transaction] {
        &self.ledger
    }

    /// Current balance: sum of all ledger amounts in insertion order.
    ///
    /// Recomputed on every read, O(ledger length); nothing is cached.
    pub fn balance(&self) -> Money {
        self.ledger.iter().map(Transaction::amount).sum()
    }

    /// Record a deposit of `amount` (must be positive).
    pub fn deposit(
        &mut self,
        amount: Money,
        occurred_at: DateTime<Utc>,
        note: impl Into<String>,
    ) -> DomainResult<()> {
        if !amount.is_positive() {
            return Err(DomainError::invalid_amount(amount));
        }
        self.record(Transaction::new(amount, occurred_at, note));
        Ok(())
    }

    /// Record a withdrawal of `amount` (must be positive).
    ///
    /// The withdrawal-limit check runs against the balance as it stands
    /// before anything is appended. If it rejects, the ledger is left
    /// unchanged. If it accepts, the negated withdrawal is appended,
    /// followed by any synthetic transaction the policy produced.
    pub fn withdraw(
        &mut self,
        amount: Money,
        occurred_at: DateTime<Utc>,
        note: impl Into<String>,
    ) -> DomainResult<()> {
        if !amount.is_positive() {
            return Err(DomainError::invalid_amount(amount));
        }

        let review = WithdrawalReview {
            requested: amount,
            available: self.balance(),
            minimum: self.minimum_balance,
            occurred_at,
        };
        let surcharge = match &self.withdrawal_policy {
            Some(policy) => policy.review(&review),
            None => MinimumBalanceFloor.review(&review),
        }
        .inspect_err(|err| {
            tracing::warn!(account = %self.number, %err, "withdrawal rejected");
        })?;

        self.record(Transaction::new(-amount, occurred_at, note));
        if let Some(txn) = surcharge {
            self.record(txn);
        }
        Ok(())
    }

    /// Run the month-end hook, if one is attached.
    pub fn on_month_end(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        if let Some(action) = self.month_end.clone() {
            action.run(self, now)?;
        }
        Ok(())
    }

    /// Account-history report: a tab-delimited table with one row per
    /// transaction in insertion order, showing date, signed amount, running
    /// balance after that transaction, and note. An empty ledger yields just
    /// the header line.
    pub fn history(&self) -> String {
        let mut report = String::new();
        let _ = writeln!(report, "Date\tAmount\tBalance\tNote");

        let mut running = Money::ZERO;
        for txn in &self.ledger {
            running += txn.amount();
            let _ = writeln!(
                report,
                "{}\t{}\t{}\t{}",
                txn.occurred_at().format("%Y-%m-%d"),
                txn.amount(),
                running,
                txn.note()
            );
        }
        report
    }

    fn record(&mut self, txn: Transaction) {
        tracing::debug!(
            account = %self.number,
            amount = %txn.amount(),
            note = txn.note(),
            "transaction recorded"
        );
        self.ledger.push(txn);
    }
}

impl Entity for Account {
    type Id = AccountNumber;

    fn id(&self) -> &AccountNumber {
        &self.number
    }
}

//! Customer accounts domain module.
//!
//! This crate contains the account/ledger model: immutable transactions, the
//! account entity that owns them, the pluggable withdrawal-limit check, and
//! the month-end hook. Pure domain logic only: no IO, no HTTP, no
//! persistence concerns.

pub mod account;
pub mod policy;
pub mod transaction;
pub mod variants;

pub use account::{Account, MonthEndAction, OpenAccount};
pub use policy::{MinimumBalanceFloor, OverdraftWithFee, WithdrawalPolicy, WithdrawalReview};
pub use transaction::Transaction;
pub use variants::{ScheduledDeposit, gift_card, line_of_credit};

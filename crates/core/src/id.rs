//! Account numbering.

use core::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// First number handed out by a freshly constructed [`AccountNumbers`].
const ACCOUNT_NUMBER_SEED: u64 = 1_234_567_890;

/// Account identifier.
///
/// Numbers are issued by [`AccountNumbers`] in strictly increasing order, so
/// they double as a creation-order key.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(u64);

impl AccountNumber {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for AccountNumber {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Issuer of account numbers.
///
/// One issuer per process (or per test) owns the counter; accounts receive
/// their number at opening time. The counter is atomic so a single issuer
/// can be shared across threads without handing out duplicates.
#[derive(Debug)]
pub struct AccountNumbers {
    next: AtomicU64,
}

impl AccountNumbers {
    pub fn new() -> Self {
        Self::starting_at(ACCOUNT_NUMBER_SEED)
    }

    /// Issuer with an explicit first number. Prefer this in tests for
    /// deterministic, isolated numbering.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Hand out the next number.
    pub fn issue(&self) -> AccountNumber {
        AccountNumber(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for AccountNumbers {
    fn default() -> Self {
        Self::new()
    }
}

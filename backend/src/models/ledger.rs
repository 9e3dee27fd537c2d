//! Payment ledger
//!
//! Every payment the simulator makes is recorded as a [`LedgerEntry`].
//! Entries are appended in period order and, within a period, in the run's
//! priority order. The ledger enables:
//! - Reproducing a run entry by entry in tests
//! - Rendering payment tables and balance charts
//! - Auditing which debt received the extra payment each month
//!
//! # Example
//!
//! ```rust
//! use debt_payoff_core_rs::models::{Ledger, LedgerEntry};
//! use rust_decimal::Decimal;
//!
//! let mut ledger = Ledger::new();
//! ledger.record(LedgerEntry {
//!     period: 1,
//!     debt_id: "card".to_string(),
//!     payment_applied: Decimal::from(250),
//!     interest_charged: Decimal::from(15),
//!     balance_after: Decimal::from(765),
//! });
//!
//! assert_eq!(ledger.len(), 1);
//! assert_eq!(ledger.entries_in_period(1).len(), 1);
//! ```

use crate::core::money::{self, Money};
use serde::{Deserialize, Serialize};

/// One debt's payment in one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Period number (1-based)
    pub period: u32,
    pub debt_id: String,
    /// Full payment made this period (minimum plus any extra)
    pub payment_applied: Money,
    /// Interest accrued before the payment
    pub interest_charged: Money,
    /// Working balance after the payment
    pub balance_after: Money,
}

/// Append-only ordered list of ledger entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    /// Create a new empty ledger
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry
    pub fn record(&mut self, entry: LedgerEntry) {
        debug_assert!(
            self.entries
                .last()
                .map_or(true, |last| last.period <= entry.period),
            "ledger entries must be appended in period order"
        );
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get all entries
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Get entries for a specific period
    pub fn entries_in_period(&self, period: u32) -> Vec<&LedgerEntry> {
        self.entries.iter().filter(|e| e.period == period).collect()
    }

    /// Get entries for a specific debt
    pub fn entries_for_debt(&self, debt_id: &str) -> Vec<&LedgerEntry> {
        self.entries.iter().filter(|e| e.debt_id == debt_id).collect()
    }

    /// Total paid across all entries (`None` on overflow)
    pub fn total_paid(&self) -> Option<Money> {
        money::checked_sum(self.entries.iter().map(|e| e.payment_applied))
    }

    /// Last period with an entry (0 if empty)
    pub fn last_period(&self) -> u32 {
        self.entries.last().map_or(0, |e| e.period)
    }
}

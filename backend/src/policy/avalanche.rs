//! Avalanche (Highest Rate First) Policy
//!
//! Targets the debt with the highest annual interest rate first.
//!
//! # Behavior
//!
//! - Ranks debts descending by annual rate
//! - Equal rates keep input order
//! - Ignores balances entirely

use super::PayoffOrdering;
use crate::models::debt::Debt;
use std::cmp::Ordering;

/// Avalanche ordering: descending annual rate
#[derive(Debug, Clone, Copy, Default)]
pub struct HighestRateFirst;

impl PayoffOrdering for HighestRateFirst {
    fn name(&self) -> &'static str {
        "highest_rate_first"
    }

    fn compare(&self, a: &Debt, b: &Debt) -> Ordering {
        b.annual_rate_percent().cmp(&a.annual_rate_percent())
    }
}

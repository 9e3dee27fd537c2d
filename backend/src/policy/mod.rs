//! Payoff Ordering Policy Module
//!
//! This module decides **which debt receives the extra payment** each month.
//!
//! # Overview
//!
//! Every period each outstanding debt gets its minimum payment. The extra
//! payment goes, in full, to the highest-priority debt that still owes money.
//! A policy fixes that priority order once, from the starting balances and
//! rates, and the order never changes during a run.
//!
//! Available policies:
//! 1. **SmallestBalanceFirst** ("snowball"): smallest starting balance first
//! 2. **HighestRateFirst** ("avalanche"): highest annual rate first
//!
//! Ties keep input order (stable sort).
//!
//! # Policy Interface
//!
//! Both orderings implement the `PayoffOrdering` trait:
//! ```rust
//! use debt_payoff_core_rs::policy::PayoffOrdering;
//! use debt_payoff_core_rs::Debt;
//! use std::cmp::Ordering;
//!
//! struct LargestBalanceFirst;
//!
//! impl PayoffOrdering for LargestBalanceFirst {
//!     fn name(&self) -> &'static str {
//!         "largest_balance_first"
//!     }
//!
//!     fn compare(&self, a: &Debt, b: &Debt) -> Ordering {
//!         b.balance().cmp(&a.balance())
//!     }
//! }
//! ```

use crate::models::debt::Debt;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

pub mod avalanche;
pub mod snowball;

pub use avalanche::HighestRateFirst;
pub use snowball::SmallestBalanceFirst;

/// Rule that ranks debts for the payment waterfall
pub trait PayoffOrdering: Send + Sync {
    /// Short machine-readable name
    fn name(&self) -> &'static str;

    /// `Ordering::Less` means `a` is paid before `b`
    fn compare(&self, a: &Debt, b: &Debt) -> Ordering;

    /// Indices into `debts`, highest priority first
    ///
    /// Uses a stable sort so that equal debts keep their input order.
    fn priority_order(&self, debts: &[Debt]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..debts.len()).collect();
        order.sort_by(|&a, &b| self.compare(&debts[a], &debts[b]));
        order
    }
}

/// Policy selection for a simulation run
///
/// # Example
///
/// ```rust
/// use debt_payoff_core_rs::{Debt, Policy};
/// use rust_decimal::Decimal;
///
/// let debts = vec![
///     Debt::new("Big, cheap".into(), Decimal::from(9000), Decimal::from(8), Decimal::from(300)),
///     Debt::new("Small, pricey".into(), Decimal::from(800), Decimal::from(30), Decimal::from(60)),
/// ];
///
/// assert_eq!(Policy::SmallestBalanceFirst.priority_order(&debts), vec![1, 0]);
/// assert_eq!(Policy::HighestRateFirst.priority_order(&debts), vec![1, 0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Snowball: smallest balance first
    #[serde(alias = "snowball")]
    SmallestBalanceFirst,

    /// Avalanche: highest interest rate first
    #[serde(alias = "avalanche")]
    HighestRateFirst,
}

impl Policy {
    /// Both policies, snowball first
    pub const ALL: [Policy; 2] = [Policy::SmallestBalanceFirst, Policy::HighestRateFirst];

    /// The ordering rule behind this policy
    pub fn ordering(&self) -> &'static dyn PayoffOrdering {
        match self {
            Policy::SmallestBalanceFirst => &SmallestBalanceFirst,
            Policy::HighestRateFirst => &HighestRateFirst,
        }
    }

    /// Indices into `debts`, highest priority first
    pub fn priority_order(&self, debts: &[Debt]) -> Vec<usize> {
        self.ordering().priority_order(debts)
    }

    /// Common name of the method
    pub fn method_name(&self) -> &'static str {
        match self {
            Policy::SmallestBalanceFirst => "snowball",
            Policy::HighestRateFirst => "avalanche",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ordering().name())
    }
}

/// Error for unrecognised policy names
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown policy '{0}' (expected snowball or avalanche)")]
pub struct UnknownPolicy(pub String);

impl FromStr for Policy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "snowball" | "smallest_balance_first" => Ok(Policy::SmallestBalanceFirst),
            "avalanche" | "highest_rate_first" => Ok(Policy::HighestRateFirst),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

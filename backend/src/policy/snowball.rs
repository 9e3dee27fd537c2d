//! Snowball (Smallest Balance First) Policy
//!
//! Targets the debt with the smallest starting balance first.
//!
//! # Behavior
//!
//! - Ranks debts ascending by balance at simulation start
//! - Equal balances keep input order
//! - Ignores interest rates entirely
//!
//! # Use Case
//!
//! - Fastest first payoff (early wins keep people motivated)
//! - Usually costs more interest than avalanche when rates differ

use super::PayoffOrdering;
use crate::models::debt::Debt;
use std::cmp::Ordering;

/// Snowball ordering: ascending balance
///
/// # Example
///
/// ```
/// use debt_payoff_core_rs::policy::{PayoffOrdering, SmallestBalanceFirst};
/// use debt_payoff_core_rs::Debt;
/// use rust_decimal::Decimal;
///
/// let debts = vec![
///     Debt::new("A".into(), Decimal::from(3000), Decimal::from(5), Decimal::from(100)),
///     Debt::new("B".into(), Decimal::from(500), Decimal::from(25), Decimal::from(50)),
///     Debt::new("C".into(), Decimal::from(1500), Decimal::from(15), Decimal::from(75)),
/// ];
///
/// assert_eq!(SmallestBalanceFirst.priority_order(&debts), vec![1, 2, 0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SmallestBalanceFirst;

impl PayoffOrdering for SmallestBalanceFirst {
    fn name(&self) -> &'static str {
        "smallest_balance_first"
    }

    fn compare(&self, a: &Debt, b: &Debt) -> Ordering {
        a.balance().cmp(&b.balance())
    }
}

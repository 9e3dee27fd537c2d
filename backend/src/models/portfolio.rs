//! Portfolio summary
//!
//! Aggregate figures over the input debts, shown next to the payoff plans.

use crate::core::money::Money;
use crate::models::debt::Debt;
use crate::simulator::SimulationError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Totals and averages across a set of debts
///
/// # Example
/// ```
/// use debt_payoff_core_rs::{Debt, PortfolioSummary};
/// use rust_decimal::Decimal;
///
/// let debts = vec![
///     Debt::new("A".into(), Decimal::from(1000), Decimal::from(10), Decimal::from(100)),
///     Debt::new("B".into(), Decimal::from(3000), Decimal::from(20), Decimal::from(200)),
/// ];
/// let summary = PortfolioSummary::from_debts(&debts, Decimal::from(50)).unwrap();
///
/// assert_eq!(summary.total_balance, Decimal::from(4000));
/// assert_eq!(summary.total_monthly_outlay, Decimal::from(350));
/// assert_eq!(summary.average_rate_percent, Decimal::from(15));
/// assert_eq!(summary.weighted_rate_percent, Decimal::new(175, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub debt_count: usize,
    pub total_balance: Money,
    pub total_minimum_payment: Money,
    /// Minimums plus the extra payment
    pub total_monthly_outlay: Money,
    /// Simple mean of annual rates (0 with no debts)
    pub average_rate_percent: Decimal,
    /// Balance-weighted annual rate (0 when nothing is owed)
    pub weighted_rate_percent: Decimal,
}

impl PortfolioSummary {
    /// Aggregate `debts` with `extra_payment` on top of the minimums
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` (period 0) naming the debt whose figures
    /// pushed a total past the decimal range.
    pub fn from_debts(debts: &[Debt], extra_payment: Money) -> Result<Self, SimulationError> {
        let mut total_balance = Decimal::ZERO;
        let mut total_minimum_payment = Decimal::ZERO;
        let mut rate_sum = Decimal::ZERO;

        for debt in debts {
            let overflow = || totals_overflow(debt.id());
            total_balance = total_balance
                .checked_add(debt.balance())
                .ok_or_else(overflow)?;
            total_minimum_payment = total_minimum_payment
                .checked_add(debt.minimum_payment())
                .ok_or_else(overflow)?;
            rate_sum = rate_sum
                .checked_add(debt.annual_rate_percent())
                .ok_or_else(overflow)?;
        }

        let average_rate_percent = if debts.is_empty() {
            Decimal::ZERO
        } else {
            rate_sum / Decimal::from(debts.len())
        };

        // Sum of rate * balance share; each term is bounded by its rate
        let mut weighted_rate_percent = Decimal::ZERO;
        if !total_balance.is_zero() {
            for debt in debts {
                let term = debt
                    .balance()
                    .checked_div(total_balance)
                    .and_then(|share| share.checked_mul(debt.annual_rate_percent()))
                    .ok_or_else(|| totals_overflow(debt.id()))?;
                weighted_rate_percent = weighted_rate_percent
                    .checked_add(term)
                    .ok_or_else(|| totals_overflow(debt.id()))?;
            }
        }

        let total_monthly_outlay = total_minimum_payment
            .checked_add(extra_payment)
            .ok_or_else(|| totals_overflow("extra_payment"))?;

        Ok(Self {
            debt_count: debts.len(),
            total_balance,
            total_minimum_payment,
            total_monthly_outlay,
            average_rate_percent,
            weighted_rate_percent,
        })
    }
}

fn totals_overflow(debt_id: &str) -> SimulationError {
    SimulationError::ArithmeticOverflow {
        period: 0,
        debt_id: debt_id.to_string(),
    }
}

//! Amortization Engine
//!
//! Runs one month-by-month payoff simulation for a set of debts under a
//! single ordering policy.
//!
//! # Period Loop
//!
//! Each period (1, 2, 3, ...) walks the debts in the run's fixed priority
//! order:
//! 1. Skip debts already at zero
//! 2. Accrue one month of interest on the working balance
//! 3. Pay the minimum; the first debt that owed money at the start of the
//!    period also receives the whole extra payment
//! 4. Reduce the balance by `payment - interest`, clamped at zero
//! 5. Record a ledger entry
//!
//! The loop stops when every balance is zero or the period cap is reached.
//! Hitting the cap with money still owed is reported through
//! [`PayoffOutcome::CapReached`].
//!
//! # Example
//!
//! ```rust
//! use debt_payoff_core_rs::{AmortizationSimulator, Debt, Policy, SimulationConfig};
//! use rust_decimal::Decimal;
//!
//! let debts = vec![Debt::with_id(
//!     "loan".into(),
//!     "Personal Loan".into(),
//!     Decimal::from(1200),
//!     Decimal::from(12),
//!     Decimal::from(200),
//! )];
//!
//! let simulator = AmortizationSimulator::new(SimulationConfig::default()).unwrap();
//! let result = simulator
//!     .simulate(&debts, Decimal::ZERO, Policy::SmallestBalanceFirst)
//!     .unwrap();
//!
//! assert!(result.is_paid_off());
//! assert_eq!(result.months, 7);
//! ```

use crate::core::money::{self, Money};
use crate::core::time::{PeriodClock, DEFAULT_PERIOD_CAP, PERIODS_PER_YEAR};
use crate::models::debt::{validate_inputs, Debt, InputError};
use crate::models::ledger::{Ledger, LedgerEntry};
use crate::models::state::SimulationState;
use crate::policy::Policy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Configuration
// ============================================================================

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Maximum number of periods to simulate (default 360 = 30 years)
    pub period_cap: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            period_cap: DEFAULT_PERIOD_CAP,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.period_cap == 0 {
            return Err(SimulationError::InvalidConfig(
                "period_cap must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Errors that prevent a simulation from producing a result
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Arithmetic overflow in period {period} for debt {debt_id}")]
    ArithmeticOverflow { period: u32, debt_id: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

fn overflow_at(period: u32, debt_id: &str) -> SimulationError {
    SimulationError::ArithmeticOverflow {
        period,
        debt_id: debt_id.to_string(),
    }
}

// ============================================================================
// Results
// ============================================================================

/// How a run ended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PayoffOutcome {
    /// Every balance reached zero
    PaidOff,

    /// The period cap was hit with money still owed
    CapReached {
        /// Sum of working balances after the last period
        remaining_balance: Money,
    },
}

/// Per-debt summary of a run, in priority order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtPayoff {
    /// 1-based position in the payoff order
    pub rank: usize,
    pub debt_id: String,
    pub name: String,
    pub starting_balance: Money,
    /// Period the balance reached zero (0 if it started at zero, None if never)
    pub payoff_period: Option<u32>,
    pub interest_paid: Money,
    pub ending_balance: Money,
}

/// Output of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub policy: Policy,
    pub extra_payment: Money,
    /// Periods simulated: payoff period, or the cap if not paid off
    pub months: u32,
    pub total_interest_paid: Money,
    pub outcome: PayoffOutcome,
    /// Debts whose minimum payment did not exceed their first month's interest
    pub non_convergent_debts: Vec<String>,
    pub payoff_schedule: Vec<DebtPayoff>,
    pub ledger: Ledger,
}

impl SimulationResult {
    pub fn is_paid_off(&self) -> bool {
        matches!(self.outcome, PayoffOutcome::PaidOff)
    }

    /// Balance still owed when the run stopped
    pub fn remaining_balance(&self) -> Money {
        match &self.outcome {
            PayoffOutcome::PaidOff => Decimal::ZERO,
            PayoffOutcome::CapReached { remaining_balance } => *remaining_balance,
        }
    }

    /// `months / 12`, exact
    pub fn years(&self) -> Decimal {
        Decimal::from(self.months) / Decimal::from(PERIODS_PER_YEAR)
    }

    /// Everything paid across the run (`None` on overflow)
    pub fn total_paid(&self) -> Option<Money> {
        self.ledger.total_paid()
    }

    /// Total remaining balance after each period
    ///
    /// Debts skipped in a period are already at zero, so the sum of that
    /// period's `balance_after` values is the whole outstanding balance.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if a period's total leaves the decimal range.
    pub fn remaining_balance_by_period(&self) -> Result<Vec<(u32, Money)>, SimulationError> {
        let mut series: Vec<(u32, Money)> = Vec::with_capacity(self.months as usize);
        for entry in self.ledger.entries() {
            match series.last_mut() {
                Some((period, total)) if *period == entry.period => {
                    *total = total
                        .checked_add(entry.balance_after)
                        .ok_or_else(|| overflow_at(entry.period, &entry.debt_id))?;
                }
                _ => series.push((entry.period, entry.balance_after)),
            }
        }
        Ok(series)
    }

    /// Payoff summary for one debt
    pub fn payoff_for(&self, debt_id: &str) -> Option<&DebtPayoff> {
        self.payoff_schedule.iter().find(|p| p.debt_id == debt_id)
    }
}

// ============================================================================
// Simulator
// ============================================================================

/// Month-by-month payoff simulator
///
/// Holds only configuration; every call to [`AmortizationSimulator::simulate`]
/// builds its own working state, so one simulator can serve many runs.
#[derive(Debug, Clone, Default)]
pub struct AmortizationSimulator {
    config: SimulationConfig,
}

impl AmortizationSimulator {
    /// Create a simulator
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the period cap is zero.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulate paying off `debts` under `policy`
    ///
    /// # Errors
    ///
    /// - `InvalidInput` for a non-positive minimum payment, a negative balance
    ///   or rate, a negative extra payment, or duplicate ids
    /// - `ArithmeticOverflow` if balances grow past the decimal range
    pub fn simulate(
        &self,
        debts: &[Debt],
        extra_payment: Money,
        policy: Policy,
    ) -> Result<SimulationResult, SimulationError> {
        validate_inputs(debts, extra_payment)?;

        let order = policy.priority_order(debts);
        let non_convergent_debts: Vec<String> = order
            .iter()
            .map(|&index| &debts[index])
            .filter(|debt| debt.is_non_convergent())
            .map(|debt| debt.id().to_string())
            .collect();

        tracing::debug!(
            %policy,
            debts = debts.len(),
            %extra_payment,
            period_cap = self.config.period_cap,
            "starting amortization run"
        );
        for debt_id in &non_convergent_debts {
            tracing::warn!(
                %policy,
                debt_id = %debt_id,
                "minimum payment does not cover monthly interest"
            );
        }

        let mut state = SimulationState::new(debts, &order);
        let mut clock = PeriodClock::new(self.config.period_cap);
        let mut ledger = Ledger::new();
        let mut total_interest_paid = Decimal::ZERO;

        while !state.all_paid() {
            let Some(period) = clock.advance() else {
                break;
            };
            run_period(
                &mut state,
                period,
                extra_payment,
                &mut ledger,
                &mut total_interest_paid,
            )?;
        }

        let months = clock.current_period();
        let outcome = if state.all_paid() {
            PayoffOutcome::PaidOff
        } else {
            let remaining_balance = state
                .total_balance()
                .map_err(|debt_id| overflow_at(months, debt_id))?;
            tracing::warn!(
                %policy,
                months,
                %remaining_balance,
                "period cap reached with balance outstanding"
            );
            PayoffOutcome::CapReached { remaining_balance }
        };

        let payoff_schedule = state
            .into_slots()
            .into_iter()
            .enumerate()
            .map(|(position, slot)| DebtPayoff {
                rank: position + 1,
                payoff_period: if slot.starting_balance.is_zero() {
                    Some(0)
                } else {
                    slot.paid_off_in
                },
                debt_id: slot.debt_id,
                name: slot.name,
                starting_balance: slot.starting_balance,
                interest_paid: slot.interest_paid,
                ending_balance: slot.balance,
            })
            .collect();

        tracing::debug!(
            %policy,
            months,
            %total_interest_paid,
            entries = ledger.len(),
            "amortization run finished"
        );

        Ok(SimulationResult {
            policy,
            extra_payment,
            months,
            total_interest_paid,
            outcome,
            non_convergent_debts,
            payoff_schedule,
            ledger,
        })
    }
}

/// Process one period across every debt in priority order
fn run_period(
    state: &mut SimulationState,
    period: u32,
    extra_payment: Money,
    ledger: &mut Ledger,
    total_interest_paid: &mut Money,
) -> Result<(), SimulationError> {
    // Decided once per period: the extra never moves to a second debt
    let extra_target = state.first_outstanding();

    for (position, slot) in state.slots_mut().iter_mut().enumerate() {
        if slot.balance.is_zero() {
            continue;
        }

        let interest = money::monthly_interest(slot.balance, slot.annual_rate_percent)
            .ok_or_else(|| overflow_at(period, &slot.debt_id))?;
        *total_interest_paid = total_interest_paid
            .checked_add(interest)
            .ok_or_else(|| overflow_at(period, &slot.debt_id))?;
        slot.interest_paid = slot
            .interest_paid
            .checked_add(interest)
            .ok_or_else(|| overflow_at(period, &slot.debt_id))?;

        let mut payment = slot.minimum_payment;
        if extra_target == Some(position) {
            payment = payment
                .checked_add(extra_payment)
                .ok_or_else(|| overflow_at(period, &slot.debt_id))?;
        }

        let balance_after = money::apply_payment(slot.balance, payment, interest)
            .ok_or_else(|| overflow_at(period, &slot.debt_id))?;
        slot.balance = balance_after;
        if balance_after.is_zero() {
            slot.paid_off_in = Some(period);
        }

        ledger.record(LedgerEntry {
            period,
            debt_id: slot.debt_id.clone(),
            payment_applied: payment,
            interest_charged: interest,
            balance_after,
        });
    }

    Ok(())
}

/// Simulate with the default configuration (360-period cap)
pub fn simulate(
    debts: &[Debt],
    extra_payment: Money,
    policy: Policy,
) -> Result<SimulationResult, SimulationError> {
    AmortizationSimulator::default().simulate(debts, extra_payment, policy)
}

//! Policy Comparison
//!
//! Runs the snowball and avalanche simulations on the same input and derives
//! the figures people actually decide on: how many months and how much
//! interest one method saves over the other.
//!
//! # Determinism
//!
//! The two runs share nothing but the read-only input. With
//! `ComparatorConfig::parallel` set they run on separate scoped threads; the
//! results are identical to a sequential comparison either way.
//!
//! # Example
//!
//! ```rust
//! use debt_payoff_core_rs::{compare, Debt, Policy, PolicyVerdict};
//! use rust_decimal::Decimal;
//!
//! let debts = vec![
//!     Debt::new("Store card".into(), Decimal::from(600), Decimal::from(10), Decimal::from(50)),
//!     Debt::new("Credit card".into(), Decimal::from(5000), Decimal::from(30), Decimal::from(200)),
//! ];
//!
//! let comparison = compare(&debts, Decimal::from(300)).unwrap();
//! assert_eq!(comparison.cheaper_policy, PolicyVerdict::Prefers(Policy::HighestRateFirst));
//! assert!(comparison.interest_saved > Decimal::ZERO);
//! ```

use crate::core::money::{self, Money};
use crate::models::debt::{validate_inputs, Debt};
use crate::models::portfolio::PortfolioSummary;
use crate::policy::Policy;
use crate::simulator::{AmortizationSimulator, SimulationConfig, SimulationError, SimulationResult};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Comparator configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparatorConfig {
    /// Settings shared by both simulations
    pub simulation: SimulationConfig,

    /// Run the two simulations on separate threads
    pub parallel: bool,
}

/// Which policy came out ahead on a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyVerdict {
    /// Strictly better on the metric
    Prefers(Policy),

    /// Both policies produced the same figure
    Tie,
}

impl PolicyVerdict {
    /// Build a verdict from snowball and avalanche figures (lower wins)
    fn lower_wins<T: Ord>(snowball: T, avalanche: T) -> Self {
        match snowball.cmp(&avalanche) {
            Ordering::Less => PolicyVerdict::Prefers(Policy::SmallestBalanceFirst),
            Ordering::Greater => PolicyVerdict::Prefers(Policy::HighestRateFirst),
            Ordering::Equal => PolicyVerdict::Tie,
        }
    }

    /// The winning policy, if there is one
    pub fn policy(&self) -> Option<Policy> {
        match self {
            PolicyVerdict::Prefers(policy) => Some(*policy),
            PolicyVerdict::Tie => None,
        }
    }

    pub fn is_tie(&self) -> bool {
        matches!(self, PolicyVerdict::Tie)
    }
}

/// Snowball and avalanche results side by side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub snowball: SimulationResult,
    pub avalanche: SimulationResult,
    /// `|snowball.months - avalanche.months|`
    pub months_saved: u32,
    /// `|snowball.total_interest_paid - avalanche.total_interest_paid|`
    pub interest_saved: Money,
    /// Policy with strictly lower total interest
    pub cheaper_policy: PolicyVerdict,
    /// Policy with strictly fewer months
    pub faster_policy: PolicyVerdict,
    pub portfolio: PortfolioSummary,
}

impl Comparison {
    /// Derive comparative metrics from the two runs
    pub fn from_results(
        snowball: SimulationResult,
        avalanche: SimulationResult,
        portfolio: PortfolioSummary,
    ) -> Self {
        let interest_saved =
            money::abs_diff(snowball.total_interest_paid, avalanche.total_interest_paid);
        let months_saved = snowball.months.abs_diff(avalanche.months);
        let cheaper_policy =
            PolicyVerdict::lower_wins(snowball.total_interest_paid, avalanche.total_interest_paid);
        let faster_policy = PolicyVerdict::lower_wins(snowball.months, avalanche.months);

        Self {
            snowball,
            avalanche,
            months_saved,
            interest_saved,
            cheaper_policy,
            faster_policy,
            portfolio,
        }
    }

    /// Result for one policy
    pub fn result_for(&self, policy: Policy) -> &SimulationResult {
        match policy {
            Policy::SmallestBalanceFirst => &self.snowball,
            Policy::HighestRateFirst => &self.avalanche,
        }
    }

    /// Whether both runs cleared every debt within the cap
    pub fn both_paid_off(&self) -> bool {
        self.snowball.is_paid_off() && self.avalanche.is_paid_off()
    }
}

/// Runs both policies and compares them
#[derive(Debug, Clone, Default)]
pub struct PolicyComparator {
    simulator: AmortizationSimulator,
    parallel: bool,
}

impl PolicyComparator {
    /// Create a comparator
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the simulation config is invalid.
    pub fn new(config: ComparatorConfig) -> Result<Self, SimulationError> {
        Ok(Self {
            simulator: AmortizationSimulator::new(config.simulation)?,
            parallel: config.parallel,
        })
    }

    /// Simulate both policies on the same input and compare them
    ///
    /// # Errors
    ///
    /// Input errors are reported before either simulation starts.
    pub fn compare(&self, debts: &[Debt], extra_payment: Money) -> Result<Comparison, SimulationError> {
        validate_inputs(debts, extra_payment)?;

        let (snowball, avalanche) = if self.parallel {
            self.run_parallel(debts, extra_payment)?
        } else {
            (
                self.simulator
                    .simulate(debts, extra_payment, Policy::SmallestBalanceFirst)?,
                self.simulator
                    .simulate(debts, extra_payment, Policy::HighestRateFirst)?,
            )
        };

        let portfolio = PortfolioSummary::from_debts(debts, extra_payment)?;
        let comparison = Comparison::from_results(snowball, avalanche, portfolio);

        tracing::info!(
            snowball_months = comparison.snowball.months,
            avalanche_months = comparison.avalanche.months,
            months_saved = comparison.months_saved,
            interest_saved = %comparison.interest_saved,
            cheaper = ?comparison.cheaper_policy,
            "policy comparison complete"
        );

        Ok(comparison)
    }

    fn run_parallel(
        &self,
        debts: &[Debt],
        extra_payment: Money,
    ) -> Result<(SimulationResult, SimulationResult), SimulationError> {
        let simulator = &self.simulator;
        std::thread::scope(|scope| {
            let avalanche = scope
                .spawn(move || simulator.simulate(debts, extra_payment, Policy::HighestRateFirst));
            let snowball = simulator.simulate(debts, extra_payment, Policy::SmallestBalanceFirst);
            let avalanche = match avalanche.join() {
                Ok(result) => result,
                Err(panic) => std::panic::resume_unwind(panic),
            };
            Ok((snowball?, avalanche?))
        })
    }
}

/// Compare both policies with the default configuration
pub fn compare(debts: &[Debt], extra_payment: Money) -> Result<Comparison, SimulationError> {
    PolicyComparator::default().compare(debts, extra_payment)
}

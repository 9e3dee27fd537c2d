//! Debt Payoff Core - Rust Engine
//!
//! Month-by-month debt payoff simulator comparing the snowball and avalanche
//! methods with deterministic, exact arithmetic.
//!
//! # Architecture
//!
//! - **core**: Period counting and monetary arithmetic
//! - **models**: Domain types (Debt, SimulationState, Ledger, PortfolioSummary)
//! - **policy**: Payoff orderings (smallest balance first, highest rate first)
//! - **simulator**: Amortization loop and result fingerprints
//! - **comparison**: Runs both policies and derives savings
//!
//! # Critical Invariants
//!
//! 1. All money values are exact decimals; nothing is rounded
//! 2. Caller input is never mutated; every run owns its working balances
//! 3. Every run terminates within the period cap (default 360)

// Module declarations
pub mod comparison;
pub mod core;
pub mod models;
pub mod policy;
pub mod simulator;

// Re-exports for convenience
pub use comparison::{compare, ComparatorConfig, Comparison, PolicyComparator, PolicyVerdict};
pub use core::money::Money;
pub use core::time::{PeriodClock, DEFAULT_PERIOD_CAP};
pub use models::{
    debt::{Debt, InputError},
    ledger::{Ledger, LedgerEntry},
    portfolio::PortfolioSummary,
    state::SimulationState,
};
pub use policy::{PayoffOrdering, Policy};
pub use simulator::{
    simulate, AmortizationSimulator, DebtPayoff, PayoffOutcome, SimulationConfig,
    SimulationError, SimulationResult,
};

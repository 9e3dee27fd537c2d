//! Simulator module - runs one payoff simulation per policy

pub mod engine;
pub mod fingerprint;

pub use engine::{
    simulate, AmortizationSimulator, DebtPayoff, PayoffOutcome, SimulationConfig,
    SimulationError, SimulationResult,
};
pub use fingerprint::fingerprint;

impl SimulationResult {
    /// Canonical SHA-256 of this result, ledger included
    pub fn fingerprint(&self) -> Result<String, SimulationError> {
        fingerprint::fingerprint(self)
    }
}

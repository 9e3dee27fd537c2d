//! Result fingerprints
//!
//! A fingerprint is the SHA-256 of a value's canonical JSON (object keys
//! sorted recursively). Two results with the same fingerprint are identical
//! down to the last ledger entry, which makes it cheap to check that a run
//! is reproducible.
//!
//! Decimals serialize with the scale they carry, so `100` and `100.00` hash
//! differently. A fingerprint identifies a run on exactly the same input
//! text; it is not a value comparison between runs on rescaled inputs.

use super::engine::SimulationError;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Compute the canonical SHA-256 hex digest of any serializable value
pub fn fingerprint<T: Serialize>(value: &T) -> Result<String, SimulationError> {
    use serde_json::Value;
    use std::collections::BTreeMap;

    let value = serde_json::to_value(value).map_err(|e| {
        SimulationError::SerializationError(format!("Fingerprint serialization failed: {}", e))
    })?;

    fn canonicalize(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let sorted: BTreeMap<String, Value> =
                    map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
                Value::Object(sorted.into_iter().collect())
            }
            Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
            other => other,
        }
    }

    let json = serde_json::to_string(&canonicalize(value)).map_err(|e| {
        SimulationError::SerializationError(format!("Fingerprint serialization failed: {}", e))
    })?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{simulate, Debt, Policy};
    use rust_decimal_macros::dec;

    fn debts() -> Vec<Debt> {
        vec![
            Debt::with_id("a".into(), "A".into(), dec!(2500), dec!(19.99), dec!(75)),
            Debt::with_id("b".into(), "B".into(), dec!(900), dec!(7.5), dec!(40)),
        ]
    }

    #[test]
    fn test_same_run_same_fingerprint() {
        let first = simulate(&debts(), dec!(100), Policy::HighestRateFirst).unwrap();
        let second = simulate(&debts(), dec!(100), Policy::HighestRateFirst).unwrap();
        assert_eq!(fingerprint(&first).unwrap(), fingerprint(&second).unwrap());
    }

    #[test]
    fn test_different_policy_different_fingerprint() {
        let snowball = simulate(&debts(), dec!(100), Policy::SmallestBalanceFirst).unwrap();
        let avalanche = simulate(&debts(), dec!(100), Policy::HighestRateFirst).unwrap();
        assert_ne!(fingerprint(&snowball).unwrap(), fingerprint(&avalanche).unwrap());
    }

    #[test]
    fn test_input_scale_is_part_of_fingerprint() {
        let whole = vec![Debt::with_id("a".into(), "A".into(), dec!(100), dec!(0), dec!(50))];
        let cents = vec![Debt::with_id("a".into(), "A".into(), dec!(100.00), dec!(0), dec!(50))];
        let whole = simulate(&whole, dec!(0), Policy::SmallestBalanceFirst).unwrap();
        let cents = simulate(&cents, dec!(0), Policy::SmallestBalanceFirst).unwrap();

        assert_eq!(whole, cents);
        assert_ne!(fingerprint(&whole).unwrap(), fingerprint(&cents).unwrap());
    }

    #[test]
    fn test_digest_is_hex_sha256() {
        let digest = fingerprint(&serde_json::json!({"b": 1, "a": 2})).unwrap();
        assert_eq!(digest.len(), 64);
        assert_eq!(digest, fingerprint(&serde_json::json!({"a": 2, "b": 1})).unwrap());
    }
}

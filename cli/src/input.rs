//! Loading debt records from JSON

use anyhow::{Context, Result};
use debt_payoff_core_rs::Debt;
use std::io::Read;
use std::path::Path;

/// Read debts from a file, or from stdin when the path is "-"
pub fn load_debts(path: &Path) -> Result<Vec<Debt>> {
    let raw = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read debts from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read debts file {}", path.display()))?
    };

    let debts = parse_debts(&raw)
        .with_context(|| format!("Invalid debt records in {}", path.display()))?;
    tracing::debug!(count = debts.len(), path = %path.display(), "loaded debts");
    Ok(debts)
}

/// Parse either a bare array of debts or an object with a "debts" array
pub fn parse_debts(raw: &str) -> Result<Vec<Debt>> {
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum DebtFile {
        List(Vec<Debt>),
        Wrapped { debts: Vec<Debt> },
    }

    let file: DebtFile = serde_json::from_str(raw)?;
    Ok(match file {
        DebtFile::List(debts) | DebtFile::Wrapped { debts } => debts,
    })
}

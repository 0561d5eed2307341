pub mod check;
pub mod generate;

use std::path::Path;

use anyhow::Context;
use bitforge::{cases::CaseTable, serde::CaseTableDef};

/// Loads a case table from a JSON config, or the built-in BaseXML table when
/// no config is given.
pub fn load_table(config: Option<&Path>) -> anyhow::Result<CaseTable> {
    match config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let def: CaseTableDef = serde_json::from_str(&text)
                .with_context(|| format!("parsing {}", path.display()))?;
            CaseTable::try_from(def).context("invalid case table")
        }
        None => Ok(CaseTable::basexml()),
    }
}

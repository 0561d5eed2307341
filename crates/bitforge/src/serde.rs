//! JSON-deserializable case-table description.
//!
//! These types describe the generator's configuration: a shared reference
//! layout and the ordered list of named layout pairs. They are intended to be
//! read from a JSON file and then converted into core `bitforge` types.

use serde::{Deserialize, Serialize};

use crate::{
    cases::{Case, CaseTable},
    errors::LayoutError,
    layout::{BitLayout, LayoutPair},
};

/// Top-level configuration: suppression reference plus ordered cases.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CaseTableDef {
    /// Layout whose don't-care positions are dropped from every guard.
    pub reference: String,
    /// Branches in first-match-wins order; the last one becomes the
    /// unconditional default.
    pub cases: Vec<CaseDef>,
}

/// Description of a single branch.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CaseDef {
    /// Human-readable branch name, reproduced in the generated comments.
    pub name: String,
    /// Layout of the word before the transformation.
    pub input: String,
    /// Layout of the word after the transformation.
    pub output: String,
    /// Patterns that must not match for the branch to apply.
    #[serde(default)]
    pub excludes: Vec<String>,
}

impl TryFrom<CaseTableDef> for CaseTable {
    type Error = LayoutError;

    fn try_from(def: CaseTableDef) -> Result<Self, Self::Error> {
        let reference = BitLayout::parse(&def.reference)?;

        let mut cases = Vec::with_capacity(def.cases.len());
        for case in def.cases {
            let pair = LayoutPair::new(
                BitLayout::parse(&case.input)?,
                BitLayout::parse(&case.output)?,
            )?;
            let mut excludes = Vec::with_capacity(case.excludes.len());
            for text in &case.excludes {
                excludes.push(BitLayout::parse(text)?);
            }
            cases.push(Case {
                name: case.name,
                pair,
                excludes,
            });
        }

        CaseTable::new(reference, cases)
    }
}

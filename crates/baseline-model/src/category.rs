use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One thematic grouping of baseline requirements, stored one per
/// `OSPS-<CODE>.yaml` file.
///
/// Unknown input fields are rejected during decode. That is a correctness
/// contract: a typo in a source document must fail the load, not vanish
/// silently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Category {
    /// Display name (e.g. "Access Control").
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub criteria: Vec<Criterion>,
}

/// A single requirement within a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Criterion {
    /// Identifier of the form `OSPS-<CODE>-NN`.
    pub id: String,
    pub maturity_level: u8,
    /// The requirement text itself.
    pub criterion: String,
    pub rationale: Option<String>,
    pub details: Option<String>,
    /// Control framework name mapped to the control identifiers it covers.
    #[serde(default)]
    pub control_mappings: BTreeMap<String, Vec<String>>,
    pub security_insights_value: Option<String>,
}

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::ValidationError;
use crate::lexicon::LexiconEntry;

/// The aggregate result of loading a baseline data directory: the full
/// lexicon plus every category keyed by its code.
///
/// A `Baseline` is constructed fully populated or not at all; the loader
/// never hands out a partial one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub lexicon: Vec<LexiconEntry>,
    pub categories: BTreeMap<String, Category>,
}

impl Baseline {
    /// Look up a category by its code.
    pub fn category(&self, code: &str) -> Option<&Category> {
        self.categories.get(code)
    }

    /// Semantic checks over an already-decoded baseline.
    ///
    /// This is an opt-in hook: loading performs schema-shape checking
    /// only, and callers decide whether to validate on top of that.
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut seen_ids: BTreeSet<&str> = BTreeSet::new();
        for (code, category) in &self.categories {
            for criterion in &category.criteria {
                if !criterion_id_matches(&criterion.id, code) {
                    return Err(ValidationError::MalformedCriterionId {
                        code: code.clone(),
                        id: criterion.id.clone(),
                    });
                }
                if !seen_ids.insert(criterion.id.as_str()) {
                    return Err(ValidationError::DuplicateCriterionId {
                        id: criterion.id.clone(),
                    });
                }
                if !(1..=3).contains(&criterion.maturity_level) {
                    return Err(ValidationError::MaturityLevelOutOfRange {
                        id: criterion.id.clone(),
                        level: criterion.maturity_level,
                    });
                }
            }
        }

        let mut seen_terms: BTreeSet<&str> = BTreeSet::new();
        for entry in &self.lexicon {
            if !seen_terms.insert(entry.term.as_str()) {
                return Err(ValidationError::DuplicateTerm {
                    term: entry.term.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Criterion ids take the form `OSPS-<CODE>-NN`, where `NN` is one or more
/// digits (sub-criteria append `.NN`).
fn criterion_id_matches(id: &str, code: &str) -> bool {
    let Some(rest) = id
        .strip_prefix("OSPS-")
        .and_then(|r| r.strip_prefix(code))
        .and_then(|r| r.strip_prefix('-'))
    else {
        return false;
    };
    !rest.is_empty()
        && rest.chars().all(|c| c.is_ascii_digit() || c == '.')
        && !rest.starts_with('.')
        && !rest.ends_with('.')
}

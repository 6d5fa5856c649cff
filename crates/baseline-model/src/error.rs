use thiserror::Error;

/// Semantic problems found by [`crate::Baseline::validate`].
///
/// These are deliberately distinct from decode failures: a baseline that
/// fails validation still decoded cleanly against the schema.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("criterion {id:?} in category {code} does not match OSPS-{code}-NN")]
    MalformedCriterionId { code: String, id: String },

    #[error("duplicate criterion id: {id}")]
    DuplicateCriterionId { id: String },

    #[error("criterion {id} has maturity level {level}, expected 1..=3")]
    MaturityLevelOutOfRange { id: String, level: u8 },

    #[error("duplicate lexicon term: {term}")]
    DuplicateTerm { term: String },
}

use serde::{Deserialize, Serialize};

/// One vocabulary term defined by the baseline lexicon.
///
/// Entries are kept in the order they appear in `lexicon.yaml`; the file
/// is an ordered list, not a set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LexiconEntry {
    pub term: String,
    pub definition: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub references: Vec<String>,
}

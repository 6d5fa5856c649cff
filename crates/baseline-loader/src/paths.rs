//! Baseline data directory path resolution.

use std::path::PathBuf;

/// Filename of the lexicon document within the data directory.
pub const LEXICON_FILENAME: &str = "lexicon.yaml";

/// Environment variable for overriding the baseline data directory.
pub const BASELINE_ENV_VAR: &str = "OSPS_BASELINE_DIR";

/// Filename of a category's definition document.
pub fn category_filename(code: &str) -> String {
    format!("OSPS-{code}.yaml")
}

/// Get the baseline data root directory.
///
/// Resolution order:
/// 1. `OSPS_BASELINE_DIR` environment variable
/// 2. `baseline/` directory relative to workspace root
pub fn default_data_root() -> PathBuf {
    if let Ok(root) = std::env::var(BASELINE_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../baseline")
}

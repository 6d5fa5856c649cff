//! Registry of known baseline category codes.

/// The fixed, ordered list of category codes the baseline defines.
///
/// Each code corresponds to one `OSPS-<CODE>.yaml` definition file. The
/// loader consumes this list but does not own it; tests substitute a
/// shorter list of their own.
pub const CATEGORY_CODES: &[&str] = &["AC", "BR", "DO", "GV", "LE", "QA", "SA", "VM"];

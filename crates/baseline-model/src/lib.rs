pub mod baseline;
pub mod category;
pub mod error;
pub mod lexicon;
pub mod registry;

pub use baseline::Baseline;
pub use category::{Category, Criterion};
pub use error::ValidationError;
pub use lexicon::LexiconEntry;
pub use registry::CATEGORY_CODES;

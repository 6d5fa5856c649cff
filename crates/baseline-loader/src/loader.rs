#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use tracing::{debug, info};

use baseline_model::{Baseline, CATEGORY_CODES, Category, LexiconEntry};

use crate::error::LoadError;
use crate::paths;

/// Reads the baseline data directory into a [`Baseline`].
///
/// Holds only the base directory and the category codes to load; each
/// [`Loader::load`] call is independent, so one loader can be reused.
#[derive(Debug, Clone)]
pub struct Loader {
    data_path: PathBuf,
    category_codes: Vec<String>,
}

impl Loader {
    /// Loader over the known category codes from the registry.
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self::with_category_codes(data_path, CATEGORY_CODES)
    }

    /// Loader over an explicit category code list. The codes are loaded
    /// in the order given.
    pub fn with_category_codes<S: AsRef<str>>(data_path: impl Into<PathBuf>, codes: &[S]) -> Self {
        Self {
            data_path: data_path.into(),
            category_codes: codes.iter().map(|c| c.as_ref().to_string()).collect(),
        }
    }

    /// Read and decode the lexicon plus every configured category.
    ///
    /// The lexicon is read first; the first failure at any step aborts
    /// the whole load, so no partial [`Baseline`] is ever returned and
    /// categories after a failing one are never opened.
    pub fn load(&self) -> Result<Baseline, LoadError> {
        let lexicon = self.load_lexicon().map_err(|e| LoadError::Lexicon {
            source: Box::new(e),
        })?;

        let mut categories = BTreeMap::new();
        for code in &self.category_codes {
            let category = self
                .load_category(code)
                .map_err(|e| LoadError::Category {
                    code: code.clone(),
                    source: Box::new(e),
                })?;
            categories.insert(code.clone(), category);
        }

        info!(
            lexicon_entries = lexicon.len(),
            categories = categories.len(),
            "loaded baseline"
        );
        Ok(Baseline {
            lexicon,
            categories,
        })
    }

    fn load_lexicon(&self) -> Result<Vec<LexiconEntry>, LoadError> {
        let path = self.data_path.join(paths::LEXICON_FILENAME);
        let file = File::open(&path).map_err(|e| LoadError::open(&path, e))?;
        let lexicon: Vec<LexiconEntry> = serde_yaml::from_reader(BufReader::new(file))
            .map_err(|e| LoadError::decode(&path, e))?;
        debug!(path = %path.display(), entries = lexicon.len(), "loaded lexicon");
        Ok(lexicon)
    }

    fn load_category(&self, code: &str) -> Result<Category, LoadError> {
        let path = self.data_path.join(paths::category_filename(code));
        let file = File::open(&path).map_err(|e| LoadError::open(&path, e))?;
        let category: Category = serde_yaml::from_reader(BufReader::new(file))
            .map_err(|e| LoadError::decode(&path, e))?;
        debug!(path = %path.display(), code, "loaded category");
        Ok(category)
    }
}

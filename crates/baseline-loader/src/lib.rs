#![deny(unsafe_code)]

pub mod error;
pub mod loader;
pub mod paths;

pub use crate::error::LoadError;
pub use crate::loader::Loader;

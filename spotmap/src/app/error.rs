use std::path::PathBuf;

use spotmap_core::model::{dataset::DatasetError, locator::LocatorError};

#[derive(thiserror::Error, Debug)]
pub enum SpotmapAppError {
    #[error("Invalid input: {0}")]
    InvalidUserInput(String),
    #[error("Failed to load listings: {0}")]
    Dataset(#[from] DatasetError),
    #[error("Search failed, {0}")]
    Locator(#[from] LocatorError),
    #[error("Failed to read configuration from '{path}': {message}")]
    Configuration { path: PathBuf, message: String },
    #[error("Error writing to '{path}': {message}")]
    WriteError { path: PathBuf, message: String },
    #[error("Serializing output failed: {0}")]
    SerializationError(String),
}

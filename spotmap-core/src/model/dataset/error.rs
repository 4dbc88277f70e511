use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    #[error("failure reading file from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to deserialize listing at row {row}: {message}")]
    Deserialize { row: usize, message: String },
    #[error("listing dataset is unusable: {0}")]
    MissingData(String),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LocatorError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("not found: {0}")]
    NotFound(String),
}

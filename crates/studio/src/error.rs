use thiserror::Error;

/// Errors surfaced by the styling runtime.
///
/// Parsing and CSS transformation never error (they skip and continue);
/// what remains is the store boundary and the style-element boundary.
#[derive(Error, Debug)]
pub enum StudioError {
    #[error("stylesheet not found: {0}")]
    NotFound(String),

    #[error("stylesheet store error: {0}")]
    Store(String),

    #[error("style injection failed: {0}")]
    Injection(String),
}

pub type Result<T> = std::result::Result<T, StudioError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LineupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl LineupError {
    /// Errors caused by the caller's input rather than the data files.
    pub fn is_user_error(&self) -> bool {
        match self {
            LineupError::InvalidRequest(_) => true,
            LineupError::Json(err) => err.is_syntax() || err.is_data(),
            LineupError::Io(_) | LineupError::InvalidCatalog(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, LineupError>;

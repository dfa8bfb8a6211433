use thiserror::Error;

/// Errors that can occur while reading the color theme
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Failed to read theme file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse theme file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid color for '{token}': {value:?}")]
    InvalidColor { token: &'static str, value: String },
}

pub type ThemeResult<T> = Result<T, ThemeError>;

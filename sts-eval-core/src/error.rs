use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The computation has no defined value for these inputs.
    #[error("Undefined: {0}")]
    Undefined(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CoreError {
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        CoreError::Parse {
            line,
            reason: reason.into(),
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, CoreError::Undefined(_))
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;


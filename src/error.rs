use std::fmt;

/// Result type for Chiron operations
pub type Result<T> = std::result::Result<T, ChironError>;

/// Main error type for the Chiron library
#[derive(Debug, Clone)]
pub enum ChironError {
    /// Invalid parameter value
    InvalidParameter {
        name: String,
        reason: String,
    },

    /// Action index outside the environment's action space
    InvalidAction {
        action: usize,
        num_actions: usize,
    },

    /// IO errors (file operations)
    IoError(String),

    /// Serialization/deserialization errors
    SerializationError(String),

    /// Numerical computation errors
    NumericalError(String),
}

impl fmt::Display for ChironError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChironError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            ChironError::InvalidAction { action, num_actions } => {
                write!(f, "Invalid action {}: must be less than {}", action, num_actions)
            }
            ChironError::IoError(msg) => write!(f, "IO error: {}", msg),
            ChironError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            ChironError::NumericalError(msg) => write!(f, "Numerical error: {}", msg),
        }
    }
}

impl std::error::Error for ChironError {}

impl From<std::io::Error> for ChironError {
    fn from(err: std::io::Error) -> Self {
        ChironError::IoError(err.to_string())
    }
}

impl From<bincode::Error> for ChironError {
    fn from(err: bincode::Error) -> Self {
        ChironError::SerializationError(err.to_string())
    }
}

impl From<serde_json::Error> for ChironError {
    fn from(err: serde_json::Error) -> Self {
        ChironError::SerializationError(err.to_string())
    }
}

impl ChironError {
    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        ChironError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

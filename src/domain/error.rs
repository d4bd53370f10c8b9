use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Validation { message: String },

    #[error("Invalid ID format: {message}")]
    InvalidId { message: String },

    #[error("{message}")]
    Conflict { message: String },

    #[error("{message}")]
    Internal { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn invalid_id(message: impl Into<String>) -> Self {
        Self::InvalidId {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Failure reason without the category prefix
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound { message }
            | Self::Validation { message }
            | Self::InvalidId { message }
            | Self::Conflict { message }
            | Self::Internal { message }
            | Self::Storage { message } => message,
        }
    }
}

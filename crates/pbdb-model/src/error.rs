use thiserror::Error;

/// Coarse classification of [`DictionaryError`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed a value outside the accepted set.
    InvalidArgument,
    /// A lookup key is not present in the dictionary.
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("direction must be 'compact_to_verbose' or 'verbose_to_compact', got '{value}'")]
    InvalidDirection { value: String },

    #[error("unknown analysis type '{name}'. Available: {}", .available.join(", "))]
    UnknownAnalysis {
        name: String,
        available: Vec<String>,
    },

    #[error("field '{name}' not found in dictionary")]
    UnknownField { name: String },
}

impl DictionaryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDirection { .. } => ErrorKind::InvalidArgument,
            Self::UnknownAnalysis { .. } | Self::UnknownField { .. } => ErrorKind::NotFound,
        }
    }

    /// Valid analysis names carried by an [`DictionaryError::UnknownAnalysis`].
    pub fn available_analyses(&self) -> &[String] {
        match self {
            Self::UnknownAnalysis { available, .. } => available,
            _ => &[],
        }
    }
}

pub type Result<T> = std::result::Result<T, DictionaryError>;

use crate::config::ConfigError;
use crate::form::ValidationError;
use crate::output::OutputError;
use crate::suggestions::SuggestionError;
use thiserror::Error;

/// User-facing error classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Configuration,
    Remote,
    Output,
}

#[derive(Debug, Error)]
pub enum PostforgeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Suggestion(#[from] SuggestionError),
    #[error(transparent)]
    Output(#[from] OutputError),
}

impl PostforgeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Config(_) | Self::Suggestion(SuggestionError::MissingEndpoint) => {
                ErrorKind::Configuration
            }
            Self::Suggestion(SuggestionError::EmptyQuery) => ErrorKind::Validation,
            Self::Suggestion(_) => ErrorKind::Remote,
            Self::Output(_) => ErrorKind::Output,
        }
    }
}

pub type Result<T> = std::result::Result<T, PostforgeError>;

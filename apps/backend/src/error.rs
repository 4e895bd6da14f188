use thiserror::Error;
use tokio_util::codec::LinesCodecError;

use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;

/// Application-level error for the server binary and services.
///
/// Domain rejections travel inside `Domain`; everything else is an
/// operational failure of the process around the engine.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Connection error: {0}")]
    Codec(#[from] LinesCodecError),
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Helper method to extract error code from any error variant
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Domain(err) => err.code(),
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Io(_) | AppError::Codec(_) => ErrorCode::InternalError,
            AppError::Internal { .. } => ErrorCode::InternalError,
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    /// True when the error is a player-correctable rejection.
    pub fn is_rejection(&self) -> bool {
        matches!(self, AppError::Domain(DomainError::Validation(..)))
    }
}

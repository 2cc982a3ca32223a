use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    UnknownLabel,
    Validation,
}

/// Failure raised by the selection store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("unknown option label '{0}'")]
    UnknownLabel(String),
}

impl SelectionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownLabel(_) => ErrorCode::UnknownLabel,
        }
    }
}

/// Serializable error handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormError {
    pub code: ErrorCode,
    pub message: String,
}

impl FormError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Validation, message)
    }
}

impl From<SelectionError> for FormError {
    fn from(value: SelectionError) -> Self {
        Self {
            code: value.code(),
            message: value.to_string(),
        }
    }
}

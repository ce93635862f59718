use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A parse failure and the position of the token that caused it.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The diagnostic text without the offending token.
    pub fn message(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { message, .. } => message.as_str(),
            ErrorImpl::UnexpectedEOF { message } => message.as_str(),
            ErrorImpl::UnknownPrimary { .. } => "unknown token when expecting an expression",
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEOF { .. } => "UnexpectedEOF",
            ErrorImpl::UnknownPrimary { .. } => "UnknownPrimary",
        }
    }

    pub fn get_category(&self) -> ErrorCategory {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } | ErrorImpl::UnexpectedEOF { .. } => {
                ErrorCategory::SyntaxError
            }
            ErrorImpl::UnknownPrimary { .. } => ErrorCategory::UnknownPrimary,
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::UnexpectedEOF { message } => {
                ErrorTip::Suggestion(format!("Input ended early, {}", message))
            }
            ErrorImpl::UnknownPrimary { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, an expression starts with a number, an identifier, `(`, `if` or `for`",
                token
            )),
        }
    }
}

/// Which part of the grammar was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A required token or sub-expression is missing.
    SyntaxError,
    /// The current token cannot begin any expression.
    UnknownPrimary,
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("{message} (found {token})")]
    UnexpectedToken { token: String, message: String },
    #[error("{message} (found end of input)")]
    UnexpectedEOF { message: String },
    #[error("unknown token when expecting an expression (found {token})")]
    UnknownPrimary { token: String },
}

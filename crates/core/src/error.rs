//! Conversion error model.

use thiserror::Error;

use crate::CONNECTIVITY_MESSAGE;

/// Result type used for a single conversion attempt.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Why a conversion attempt ended without a result.
///
/// Every variant ends the current attempt; none of them is retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The backend answered with a non-success status.
    #[error("conversion rejected: {0}")]
    Rejected(String),

    /// The backend could not be reached, or its answer was unusable.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl ConversionError {
    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Text for the visible error field.
    ///
    /// Backend rejections are surfaced verbatim. Transport details stay in the
    /// logs; the user gets the generic connectivity hint.
    pub fn user_message(&self) -> String {
        match self {
            ConversionError::Rejected(msg) => msg.clone(),
            ConversionError::Transport(_) => CONNECTIVITY_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_is_surfaced_verbatim() {
        let err = ConversionError::rejected("bad input");
        assert_eq!(err.user_message(), "bad input");
    }

    #[test]
    fn transport_detail_is_hidden_from_user() {
        let err = ConversionError::transport("connection refused (os error 111)");
        assert_eq!(err.user_message(), CONNECTIVITY_MESSAGE);
        assert!(err.to_string().contains("connection refused"));
    }
}

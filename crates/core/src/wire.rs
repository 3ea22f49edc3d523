//! Request/response DTOs exchanged with the conversion backend.
//!
//! ```text
//! POST /convert  {"prompt": "...", "lang": "en"|"fr"}
//! 2xx            {"result": "..."}
//! non-2xx        {"error": "..."}   (body and field both optional)
//! ```

use serde::{Deserialize, Serialize};

use crate::GENERIC_FAILURE_MESSAGE;
use crate::error::{ConversionError, ConversionResult};
use crate::language::Language;

/// Body of `POST /convert`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertRequest {
    pub prompt: String,
    pub lang: Language,
}

impl ConvertRequest {
    pub fn new(prompt: impl Into<String>, lang: Language) -> Self {
        Self {
            prompt: prompt.into(),
            lang,
        }
    }
}

/// Success body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub result: String,
}

/// Failure body. The backend is not guaranteed to send `error`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Map an HTTP status and raw body to the conversion outcome.
pub fn interpret_response(status: u16, body: &[u8]) -> ConversionResult<String> {
    if (200..300).contains(&status) {
        return serde_json::from_slice::<ConvertResponse>(body)
            .map(|ok| ok.result)
            .map_err(|e| ConversionError::transport(format!("malformed response: {e}")));
    }

    // Non-JSON error bodies and empty messages fall back to the generic text.
    let message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|msg| !msg.is_empty())
        .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());

    Err(ConversionError::Rejected(message))
}

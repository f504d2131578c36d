use serde::{Deserialize, Serialize};

/// Structured error body the upstream API returns on non-2xx responses.
/// Proxy routes pass it through verbatim; the UI shows `message` inline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }
}

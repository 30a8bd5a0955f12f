use serde::Serialize;

/// Flat response body shared by every write endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Envelope {
    Success { id: i64 },
    Error { message: String },
}

impl Envelope {
    pub fn success(id: i64) -> Self {
        Envelope::Success { id }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Envelope::Error {
            message: message.into(),
        }
    }
}

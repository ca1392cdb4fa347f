use serde::{Serialize, Serializer};
use std::fmt;

use roster_types::errors::{ApplicationError, ErrorKind};

/// The error carried by an endpoint response: the message text plus its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseError {
    kind: ErrorKind,
    message: String,
}

impl ResponseError {
    /// Builds an error from its text alone, classifying it by exact match on
    /// the canonical messages.
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: ErrorKind::from_message(&message),
            message,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&ApplicationError> for ResponseError {
    fn from(err: &ApplicationError) -> Self {
        let message = err.to_string();
        // Opaque errors still get the textual classification.
        let kind = match err.kind() {
            ErrorKind::Internal => ErrorKind::from_message(&message),
            kind => kind,
        };
        Self { kind, message }
    }
}

impl From<ApplicationError> for ResponseError {
    fn from(err: ApplicationError) -> Self {
        Self::from(&err)
    }
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Serialize for ResponseError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.message)
    }
}

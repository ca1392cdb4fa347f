use thiserror::Error;

pub mod db_error;

pub use db_error::DbError;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

const NOT_FOUND: &str = "not found";
const BAD_REQUEST: &str = "bad request";

#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The requested player doesn't exist, or a listing matched nothing.
    #[error("not found")]
    NotFound,

    /// Malformed transport input, detected before reaching an endpoint.
    #[error("bad request")]
    BadRequest,

    #[error(transparent)]
    Db(#[from] DbError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    #[error("{0}")]
    Unknown(String),
}

impl ApplicationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApplicationError::NotFound => ErrorKind::NotFound,
            ApplicationError::BadRequest => ErrorKind::BadRequest,
            _ => ErrorKind::Internal,
        }
    }
}

/// Coarse classification of a failure, used by transports to pick their
/// own representation (HTTP status codes, for instance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    BadRequest,
    Internal,
}

impl ErrorKind {
    /// Classifies an error by its text alone.
    ///
    /// Any message that happens to equal "not found" or "bad request" is
    /// classified as such, whatever produced it.
    pub fn from_message(message: &str) -> Self {
        match message {
            NOT_FOUND => ErrorKind::NotFound,
            BAD_REQUEST => ErrorKind::BadRequest,
            _ => ErrorKind::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_render_canonical_messages() {
        assert_eq!(ApplicationError::NotFound.to_string(), "not found");
        assert_eq!(ApplicationError::BadRequest.to_string(), "bad request");
    }

    #[test]
    fn test_kind_of_typed_errors() {
        assert_eq!(ApplicationError::NotFound.kind(), ErrorKind::NotFound);
        assert_eq!(ApplicationError::BadRequest.kind(), ErrorKind::BadRequest);
        assert_eq!(
            ApplicationError::Db(DbError::NoRows).kind(),
            ErrorKind::Internal
        );
        assert_eq!(
            ApplicationError::Unknown("database error".to_string()).kind(),
            ErrorKind::Internal
        );
    }

    #[test]
    fn test_kind_from_message_is_literal() {
        assert_eq!(ErrorKind::from_message("not found"), ErrorKind::NotFound);
        assert_eq!(ErrorKind::from_message("bad request"), ErrorKind::BadRequest);
        assert_eq!(ErrorKind::from_message("Not Found"), ErrorKind::Internal);
        assert_eq!(ErrorKind::from_message("database error"), ErrorKind::Internal);
    }

    #[test]
    fn test_unknown_keeps_original_text() {
        let err = ApplicationError::Unknown("connection reset".to_string());
        assert_eq!(err.to_string(), "connection reset");
    }
}

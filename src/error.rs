//! Crate-wide error type.

use thiserror::Error;

use crate::http::RequestFailure;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The server answered with a non-success status.
    #[error(transparent)]
    Failure(#[from] RequestFailure),
    /// The request never produced a response (connection refused, DNS, TLS).
    #[error("Failed to send request")]
    Send(#[source] reqwest::Error),
    /// The response arrived but its body could not be read.
    #[error("Failed to read response body")]
    Body(#[source] reqwest::Error),
    #[error("Failed to build HTTP client")]
    Client(#[source] reqwest::Error),
    /// The runtime backing the blocking calls could not be started.
    #[error("Failed to start blocking runtime")]
    Runtime(#[source] std::io::Error),
}

impl Error {
    /// Returns the classified failure when the server rejected the request.
    pub fn failure(&self) -> Option<&RequestFailure> {
        match self {
            Error::Failure(failure) => Some(failure),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_failure_accessor() {
        let err = Error::from(RequestFailure::from_status(StatusCode::UNAUTHORIZED));
        let failure = err.failure().unwrap();
        assert_eq!(failure.message(), "401, Unauthorized");
        assert_eq!(failure.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.to_string(), "401, Unauthorized");
    }

    #[test]
    fn test_failure_accessor_none_for_runtime() {
        let err = Error::Runtime(std::io::Error::other("no threads"));
        assert!(err.failure().is_none());
    }

    // The cause is reachable through `source()` only, so an error chain
    // prints it once.
    #[test]
    fn test_display_leaves_cause_to_source() {
        let err = Error::Runtime(std::io::Error::other("no threads"));
        assert_eq!(err.to_string(), "Failed to start blocking runtime");

        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "no threads");

        let chain = format!("{:?}", anyhow::Error::from(err));
        assert_eq!(chain.matches("no threads").count(), 1);
    }
}

//! Classification of non-success HTTP statuses into request failures.

use reqwest::StatusCode;
use thiserror::Error;

/// Message used for every non-success status without a dedicated entry.
pub const UNEXPECTED_FAILURE: &str = "Unexpected failure";

/// A non-success response, reduced to a fixed message and its status code.
///
/// Transient statuses (503) and permanent ones (404) are reported the same
/// way. Deciding whether a failure is worth retrying is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RequestFailure {
    message: &'static str,
    status: StatusCode,
}

impl RequestFailure {
    /// Classifies a non-success status.
    pub fn from_status(status: StatusCode) -> Self {
        let message = match status {
            StatusCode::SERVICE_UNAVAILABLE => "503, Service unavailable",
            StatusCode::INTERNAL_SERVER_ERROR => "500, Internal server error",
            StatusCode::UNAUTHORIZED => "401, Unauthorized",
            StatusCode::BAD_REQUEST => "400, Bad request",
            StatusCode::NOT_FOUND => "404, Resource not found",
            StatusCode::FORBIDDEN => "403, Forbidden",
            _ => UNEXPECTED_FAILURE,
        };
        Self { message, status }
    }

    /// Returns `Err` for any status outside the 2xx range.
    pub fn check(status: StatusCode) -> Result<(), Self> {
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::from_status(status))
        }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

//! HTTP request layer: URL building, dispatch and failure classification.

mod blocking;
mod failure;
mod request;
mod requester;

pub use failure::{RequestFailure, UNEXPECTED_FAILURE};
pub use request::{Method, Request, build_arguments, build_url, redact_api_key};
#[cfg(test)]
pub use requester::MockRequests;
pub use requester::{Requester, Requests};

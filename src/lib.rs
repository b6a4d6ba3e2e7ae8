pub mod commands;
pub mod config;
pub mod error;
pub mod http;

pub use config::RequesterConfig;
pub use error::{Error, Result};
pub use http::{Method, Request, RequestFailure, Requester, Requests};

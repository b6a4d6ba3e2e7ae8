//! One-shot request execution used by the command-line tool.

use log::debug;

use crate::error::Result;
use crate::http::{Method, Requests};

/// A single request described by command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub method: Method,
    pub path: String,
    pub arguments: Vec<String>,
    pub use_https: bool,
    pub body: Option<String>,
}

/// Prepares, sends and reads one request, returning the response text.
#[tracing::instrument(skip(requests))]
pub async fn execute<R: Requests + ?Sized>(requests: &R, invocation: Invocation) -> Result<String> {
    let mut request = requests.prepare_request(
        &invocation.path,
        &invocation.arguments,
        invocation.use_https,
        invocation.method,
    );
    if let Some(body) = invocation.body {
        request = request.with_body(body);
    }

    let response = match invocation.method {
        Method::Get => requests.get(request).await?,
        Method::Put => requests.put(request).await?,
        Method::Post => requests.post(request).await?,
    };
    debug!("{} {} -> {}", invocation.method, invocation.path, response.status());

    requests.response_content(response).await
}

//! Request descriptors and URL construction.

use std::fmt;

use reqwest::Body;

/// The HTTP methods a [`Requester`](super::Requester) can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Put,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Put => reqwest::Method::PUT,
            Method::Post => reqwest::Method::POST,
        }
    }
}

/// A fully built request: method, absolute URL and an optional body.
#[derive(Debug)]
pub struct Request {
    method: Method,
    url: String,
    body: Option<Body>,
}

impl Request {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
        }
    }

    /// Attaches a body. Only PUT and POST send it.
    pub fn with_body(mut self, body: impl Into<Body>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    pub(crate) fn into_parts(self) -> (Method, String, Option<Body>) {
        (self.method, self.url, self.body)
    }
}

/// Joins the non-empty arguments, each followed by `&`.
pub fn build_arguments<S: AsRef<str>>(arguments: &[S]) -> String {
    arguments
        .iter()
        .map(AsRef::as_ref)
        .filter(|arg| !arg.is_empty())
        .fold(String::new(), |mut joined, arg| {
            joined.push_str(arg);
            joined.push('&');
            joined
        })
}

/// Builds `{scheme}://{root_domain}{relative_path}?{arguments}api_key={api_key}`.
///
/// Nothing is percent-encoded. Callers must pre-encode characters that are
/// not safe inside a query component.
pub fn build_url<S: AsRef<str>>(
    root_domain: &str,
    relative_path: &str,
    extra_arguments: &[S],
    use_https: bool,
    api_key: &str,
) -> String {
    let scheme = if use_https { "https" } else { "http" };
    format!(
        "{}://{}{}?{}api_key={}",
        scheme,
        root_domain,
        relative_path,
        build_arguments(extra_arguments),
        api_key
    )
}

/// Masks the value of the `api_key` query parameter for logging.
pub fn redact_api_key(url: &str) -> String {
    const PARAM: &str = "api_key=";

    let Some(query_start) = url.find('?') else {
        return url.to_string();
    };

    let mut redacted = url[..=query_start].to_string();
    let pairs: Vec<String> = url[query_start + 1..]
        .split('&')
        .map(|pair| {
            if pair.starts_with(PARAM) && pair.len() > PARAM.len() {
                format!("{}***", PARAM)
            } else {
                pair.to_string()
            }
        })
        .collect();
    redacted.push_str(&pairs.join("&"));
    redacted
}

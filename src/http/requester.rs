//! The requester: URL building, dispatch and status classification.

use std::fmt;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response};

use super::blocking;
use super::failure::RequestFailure;
use super::request::{Method, Request, build_url, redact_api_key};
use crate::config::RequesterConfig;
use crate::error::{Error, Result};

/// Capabilities a specialized API client needs from its requester.
///
/// Resource-level clients hold an implementation of this trait and delegate
/// every HTTP exchange to it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Requests: Send + Sync {
    fn prepare_request(
        &self,
        relative_path: &str,
        extra_arguments: &[String],
        use_https: bool,
        method: Method,
    ) -> Request;
    async fn get(&self, request: Request) -> Result<Response>;
    async fn put(&self, request: Request) -> Result<Response>;
    async fn post(&self, request: Request) -> Result<Response>;
    async fn response_content(&self, response: Response) -> Result<String>;
}

/// Issues requests against one root domain with an API key.
///
/// Clones share the same underlying [`Client`] and therefore the same
/// connection pool. The API key is copied, so a clone can be re-keyed without
/// affecting the original.
#[derive(Clone)]
pub struct Requester {
    client: Client,
    root_domain: String,
    api_key: String,
}

impl fmt::Debug for Requester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Requester")
            .field("root_domain", &self.root_domain)
            .field("api_key", &"***")
            .finish_non_exhaustive()
    }
}

impl Requester {
    /// Creates a requester with an empty API key.
    pub fn new(root_domain: impl Into<String>) -> Result<Self> {
        Self::from_config(&RequesterConfig::new(root_domain))
    }

    /// Creates a requester that appends `api_key` to every prepared request.
    pub fn with_api_key(
        root_domain: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self> {
        Self::from_config(&RequesterConfig::new(root_domain).api_key(api_key))
    }

    /// Creates a requester around an existing client.
    pub fn with_client(
        client: Client,
        root_domain: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            root_domain: root_domain.into(),
            api_key: api_key.into(),
        }
    }

    /// Creates a requester with a client built from `config`.
    pub fn from_config(config: &RequesterConfig) -> Result<Self> {
        let client = config.build_client()?;
        Ok(Self::with_client(
            client,
            config.root_domain.clone(),
            config.api_key.clone(),
        ))
    }

    /// Returns the API key used by newly prepared requests.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Replaces the API key used by subsequently prepared requests.
    ///
    /// Requests prepared before the call keep the key baked into their URL.
    pub fn set_api_key(&mut self, api_key: impl Into<String>) {
        self.api_key = api_key.into();
    }

    /// Returns the host every URL is built against.
    pub fn root_domain(&self) -> &str {
        &self.root_domain
    }

    pub fn build_url<S: AsRef<str>>(
        &self,
        relative_path: &str,
        extra_arguments: &[S],
        use_https: bool,
        api_key: &str,
    ) -> String {
        build_url(
            &self.root_domain,
            relative_path,
            extra_arguments,
            use_https,
            api_key,
        )
    }

    /// Builds a body-less request for `relative_path` with the current API key.
    pub fn prepare_request<S: AsRef<str>>(
        &self,
        relative_path: &str,
        extra_arguments: &[S],
        use_https: bool,
        method: Method,
    ) -> Request {
        let url = self.build_url(relative_path, extra_arguments, use_https, &self.api_key);
        Request::new(method, url)
    }

    /// Sends a GET to the request's URL. Any attached body is ignored.
    #[tracing::instrument(skip_all)]
    pub async fn get(&self, request: Request) -> Result<Response> {
        self.dispatch(Method::Get, request).await
    }

    /// Sends a PUT with the request's body, if any.
    #[tracing::instrument(skip_all)]
    pub async fn put(&self, request: Request) -> Result<Response> {
        self.dispatch(Method::Put, request).await
    }

    /// Sends a POST with the request's body, if any.
    #[tracing::instrument(skip_all)]
    pub async fn post(&self, request: Request) -> Result<Response> {
        self.dispatch(Method::Post, request).await
    }

    /// Sends the request with its own method.
    #[tracing::instrument(skip_all, fields(method = %request.method()))]
    pub async fn send(&self, request: Request) -> Result<Response> {
        self.dispatch(request.method(), request).await
    }

    /// Blocking form of [`Requester::get`].
    pub fn get_blocking(&self, request: Request) -> Result<Response> {
        blocking::block_on(self.get(request))
    }

    /// Blocking form of [`Requester::put`].
    pub fn put_blocking(&self, request: Request) -> Result<Response> {
        blocking::block_on(self.put(request))
    }

    /// Blocking form of [`Requester::post`].
    pub fn post_blocking(&self, request: Request) -> Result<Response> {
        blocking::block_on(self.post(request))
    }

    /// Blocking form of [`Requester::send`].
    pub fn send_blocking(&self, request: Request) -> Result<Response> {
        blocking::block_on(self.send(request))
    }

    /// Reads the whole body as text, using the declared charset or UTF-8.
    ///
    /// Consumes the response; its connection is released whether or not the
    /// read succeeds. An empty body yields an empty string.
    #[tracing::instrument(skip_all)]
    pub async fn response_content(&self, response: Response) -> Result<String> {
        response.text().await.map_err(Error::Body)
    }

    /// Blocking form of [`Requester::response_content`].
    pub fn response_content_blocking(&self, response: Response) -> Result<String> {
        blocking::block_on(self.response_content(response))
    }

    async fn dispatch(&self, method: Method, request: Request) -> Result<Response> {
        let (_, url, body) = request.into_parts();
        debug!("{} {}...", method, redact_api_key(&url));

        let mut builder = self.client.request(method.into(), url.as_str());
        if method != Method::Get {
            if let Some(body) = body {
                builder = builder.body(body);
            }
        }

        let response = builder.send().await.map_err(Error::Send)?;
        let status = response.status();

        if let Err(failure) = RequestFailure::check(status) {
            debug!("{} {} failed with status {}", method, redact_api_key(&url), status);
            drop(response);
            return Err(failure.into());
        }

        Ok(response)
    }
}

#[async_trait]
impl Requests for Requester {
    fn prepare_request(
        &self,
        relative_path: &str,
        extra_arguments: &[String],
        use_https: bool,
        method: Method,
    ) -> Request {
        Requester::prepare_request(self, relative_path, extra_arguments, use_https, method)
    }

    async fn get(&self, request: Request) -> Result<Response> {
        Requester::get(self, request).await
    }

    async fn put(&self, request: Request) -> Result<Response> {
        Requester::put(self, request).await
    }

    async fn post(&self, request: Request) -> Result<Response> {
        Requester::post(self, request).await
    }

    async fn response_content(&self, response: Response) -> Result<String> {
        Requester::response_content(self, response).await
    }
}

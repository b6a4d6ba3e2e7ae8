//! Requester configuration and construction of the shared HTTP client.

use log::debug;
use reqwest::Client;
use std::env;

use crate::error::{Error, Result};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "RIOT_API_KEY";

/// Construction parameters for a [`Requester`](crate::http::Requester).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequesterConfig {
    pub root_domain: String,
    pub api_key: String,
    pub user_agent: String,
}

impl RequesterConfig {
    pub fn new(root_domain: impl Into<String>) -> Self {
        Self {
            root_domain: root_domain.into(),
            api_key: String::new(),
            user_agent: default_user_agent(),
        }
    }

    /// Like [`RequesterConfig::new`], taking the API key from `RIOT_API_KEY` when set.
    pub fn from_env(root_domain: impl Into<String>) -> Self {
        let config = Self::new(root_domain);
        match env::var(API_KEY_ENV) {
            Ok(key) => {
                debug!("Using {} for requests: {}", API_KEY_ENV, mask(&key));
                config.api_key(key)
            }
            Err(_) => config,
        }
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Builds the client shared by every request of a requester.
    pub fn build_client(&self) -> Result<Client> {
        Client::builder()
            .user_agent(&self.user_agent)
            .build()
            .map_err(Error::Client)
    }
}

fn default_user_agent() -> String {
    format!("riot-requester/{}", env!("CARGO_PKG_VERSION"))
}

/// Keeps the first and last four characters of long keys.
fn mask(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 12 {
        return "*********".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}*********{}", head, tail)
}

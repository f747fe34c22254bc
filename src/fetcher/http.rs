//! Plain HTTP sessions
//!
//! Serves pages whose markup is complete without running scripts, and
//! resolves HTTP-level redirects. Every request runs on a client with an
//! empty cookie store, so calls stay isolated from each other.

use super::{FetchError, PageRenderer, RenderedPage};
use crate::config::Config;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;

/// Longest redirect chain followed before giving up
const MAX_REDIRECTS: usize = 10;

/// Builds an HTTP client with the configured user agent and timeout
///
/// # Arguments
///
/// * `config` - The fetch configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout())
        .connect_timeout(Duration::from_secs(10))
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Renders pages with a single GET request
#[derive(Debug, Clone)]
pub struct HttpRenderer {
    client: Client,
}

impl HttpRenderer {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }
}

impl PageRenderer for HttpRenderer {
    async fn render(&self, url: &str) -> Result<RenderedPage, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify_error(url, e))?;

        let status = response.status();
        let final_url = response.url().to_string();

        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let html = response.text().await.map_err(|e| classify_error(url, e))?;

        Ok(RenderedPage { final_url, html })
    }
}

fn classify_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}

//! Page fetching
//!
//! Profile pages only populate their content after client-side scripts run,
//! so fetching goes through a [`PageRenderer`]: something that loads a URL,
//! lets it settle, and hands back the serialized markup together with the
//! URL the session ended up on. The same seam resolves redirect-wrapped
//! links to their real destination.

mod browser;
mod http;

pub use browser::ChromeRenderer;
pub use http::{build_http_client, HttpRenderer};

use crate::config::Config;
use crate::extract::ProfileDocument;
use crate::ProfileError;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

/// Errors raised while loading or rendering a page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Browser session failed for {url}: {message}")]
    Browser { url: String, message: String },

    #[error("Rendering task for {url} did not complete: {message}")]
    Join { url: String, message: String },
}

/// Markup serialized from a settled page
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// URL after all redirects settled
    pub final_url: String,

    /// Serialized DOM
    pub html: String,
}

/// Loads a URL in an isolated session and serializes the result
///
/// Implementations must not share cookies or other state between calls.
#[allow(async_fn_in_trait)]
pub trait PageRenderer {
    async fn render(&self, url: &str) -> Result<RenderedPage, FetchError>;
}

/// Fetches profile pages and resolves redirect links through a renderer
pub struct Fetcher<R> {
    renderer: R,
    base_url: Url,
}

impl<R: PageRenderer> Fetcher<R> {
    /// Creates a fetcher that joins identifiers onto `config.base_url`
    pub fn new(config: &Config, renderer: R) -> Result<Self, FetchError> {
        let base_url = Url::parse(&config.base_url).map_err(|source| FetchError::InvalidUrl {
            url: config.base_url.clone(),
            source,
        })?;

        Ok(Self { renderer, base_url })
    }

    /// Builds the page URL for a profile identifier
    ///
    /// A profile id is letters, digits, `-`, `_` and `.`, and becomes one
    /// path segment under the base URL. An absolute URL is accepted only
    /// when it shares the base URL's origin.
    pub fn profile_url(&self, identifier: &str) -> Result<Url, ProfileError> {
        let identifier = identifier.trim();
        let invalid = || ProfileError::InvalidIdentifier(identifier.to_string());

        if let Ok(url) = Url::parse(identifier) {
            if matches!(url.scheme(), "http" | "https") && url.origin() == self.base_url.origin() {
                return Ok(url);
            }
            return Err(invalid());
        }

        let id = identifier.trim_matches('/');
        let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.');
        if id.is_empty() || !id.chars().all(allowed) || id.chars().all(|c| c == '.') {
            return Err(invalid());
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }

    /// Renders the profile page for `identifier` and parses it
    pub async fn fetch_profile(&self, identifier: &str) -> Result<ProfileDocument, ProfileError> {
        let url = self.profile_url(identifier)?;
        info!("Fetching profile page {}", url);

        let page = self.renderer.render(url.as_str()).await?;
        debug!(
            "Rendered {} ({} bytes, landed on {})",
            url,
            page.html.len(),
            page.final_url
        );

        Ok(ProfileDocument::parse(&page.html))
    }

    /// Makes a possibly relative link absolute against the base URL
    pub fn absolutize(&self, href: &str) -> Result<Url, FetchError> {
        self.base_url
            .join(href.trim())
            .map_err(|source| FetchError::InvalidUrl {
                url: href.to_string(),
                source,
            })
    }

    /// Loads a redirect-wrapped link and returns the URL it settles on
    pub async fn resolve_redirect(&self, wrapped_url: &str) -> Result<String, FetchError> {
        let url = self.absolutize(wrapped_url)?;
        let page = self.renderer.render(url.as_str()).await?;
        debug!("Resolved {} -> {}", url, page.final_url);
        Ok(page.final_url)
    }
}

//! Headless browser sessions
//!
//! Each render launches its own Chrome process, loads the page in a fresh
//! tab, waits for client-side rendering to settle and serializes the DOM.
//! The browser is torn down when the call returns.

use super::{FetchError, PageRenderer, RenderedPage};
use crate::config::Config;
use headless_chrome::{Browser, LaunchOptions};
use std::time::Duration;
use tracing::debug;

/// Renders pages in a headless Chrome session
#[derive(Debug, Clone)]
pub struct ChromeRenderer {
    headless: bool,
    timeout: Duration,
    render_wait: Duration,
}

impl ChromeRenderer {
    pub fn new(config: &Config) -> Self {
        Self {
            headless: config.headless,
            timeout: config.timeout(),
            render_wait: config.render_wait(),
        }
    }

    /// Runs one complete browser session; blocks the calling thread
    fn render_blocking(&self, url: &str) -> Result<RenderedPage, FetchError> {
        let browser = Browser::new(LaunchOptions {
            headless: self.headless,
            idle_browser_timeout: self.timeout,
            ..Default::default()
        })
        .map_err(|e| session_error(url, e))?;

        let tab = browser.new_tab().map_err(|e| session_error(url, e))?;
        tab.set_default_timeout(self.timeout);

        tab.navigate_to(url)
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(|e| session_error(url, e))?;

        debug!("Waiting {:?} for {} to settle", self.render_wait, url);
        std::thread::sleep(self.render_wait);

        let html = tab.get_content().map_err(|e| session_error(url, e))?;
        let final_url = tab.get_url();

        Ok(RenderedPage { final_url, html })
    }
}

impl PageRenderer for ChromeRenderer {
    async fn render(&self, url: &str) -> Result<RenderedPage, FetchError> {
        let session = self.clone();
        let target = url.to_string();

        tokio::task::spawn_blocking(move || session.render_blocking(&target))
            .await
            .map_err(|e| FetchError::Join {
                url: url.to_string(),
                message: e.to_string(),
            })?
    }
}

fn session_error(url: &str, error: anyhow::Error) -> FetchError {
    let message = error.to_string();
    if message.to_lowercase().contains("timeout") || message.to_lowercase().contains("timed out")
    {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Browser {
            url: url.to_string(),
            message,
        }
    }
}

//! Pipeline coordinator
//!
//! Owns the fetcher and drives a single profile from identifier to
//! markdown text. Only the initial page load can fail the run; everything
//! after it degrades to omissions.

use crate::config::{validate, Config};
use crate::extract::{ExtractedProfile, Extractor, SectionDescriptor, SECTIONS};
use crate::fetcher::{Fetcher, PageRenderer};
use crate::output::render_document;
use crate::Result;
use tracing::{info, warn};

/// Converts profiles to markdown
pub struct Coordinator<R> {
    fetcher: Fetcher<R>,
    sections: &'static [SectionDescriptor],
}

impl<R: PageRenderer> Coordinator<R> {
    /// Creates a coordinator for the known sections
    ///
    /// # Arguments
    ///
    /// * `config` - Fetch configuration; validated here
    /// * `renderer` - Session used for the profile page and redirect links
    pub fn new(config: Config, renderer: R) -> Result<Self> {
        validate(&config)?;
        let fetcher = Fetcher::new(&config, renderer)?;

        Ok(Self {
            fetcher,
            sections: &SECTIONS,
        })
    }

    /// Fetches and extracts a profile, with external links resolved
    pub async fn extract(&self, identifier: &str) -> Result<ExtractedProfile> {
        let mut profile = {
            let document = self.fetcher.fetch_profile(identifier).await?;
            let extracted = Extractor::new(&document).extract(self.sections);
            extracted
        };

        self.resolve_links(&mut profile).await;
        Ok(profile)
    }

    /// Converts the profile for `identifier` to a markdown document
    pub async fn convert(&self, identifier: &str) -> Result<String> {
        let profile = self.extract(identifier).await?;
        let markdown = render_document(&profile);

        info!(
            "Rendered profile '{}' ({} sections, {} bytes)",
            identifier,
            profile.sections.iter().filter(|s| !s.is_empty()).count(),
            markdown.len()
        );
        Ok(markdown)
    }

    /// Replaces each redirect-wrapped link with its destination
    ///
    /// A link that cannot be resolved is kept in its original form, made
    /// absolute when possible.
    async fn resolve_links(&self, profile: &mut ExtractedProfile) {
        for section in &mut profile.sections {
            for item in &mut section.items {
                let Some(href) = item.link.take() else {
                    continue;
                };

                let resolved = match self.fetcher.resolve_redirect(&href).await {
                    Ok(url) => url,
                    Err(e) => {
                        warn!(
                            "Could not resolve link in section '{}': {}",
                            section.descriptor.id, e
                        );
                        self.fetcher
                            .absolutize(&href)
                            .map(|url| url.to_string())
                            .unwrap_or(href)
                    }
                };
                item.link = Some(resolved);
            }
        }
    }
}

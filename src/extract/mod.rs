//! Section extraction
//!
//! Turns a parsed profile page into structured records:
//! - the headline (name and the extra-info table)
//! - one [`ExtractedSection`] per [`SectionDescriptor`], in declaration order
//!
//! Extraction never fails as a whole. A missing field is `None`, and a
//! missing section container degrades to an empty section.

mod document;
mod fields;
mod sections;
mod types;

pub use document::ProfileDocument;
pub use fields::{
    find_attr, find_element, find_field, find_table, parse_table_row, plain_text, text_lines,
    to_markdown,
};
pub use sections::{
    section, FieldSource, ItemFields, Layout, Lookup, SectionDescriptor, EXTRA_INFO, NAME,
    SECTIONS, SECTION_TITLE,
};
pub use types::{ExtractedProfile, ExtractedSection, FieldRecord, Headline};

use scraper::ElementRef;
use thiserror::Error;
use tracing::debug;

/// Structural problems that stop a section from being read
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("section '{section}' has no container")]
    MissingContainer { section: &'static str },
}

/// Reads sections out of a borrowed profile document
pub struct Extractor<'a> {
    document: &'a ProfileDocument,
}

impl<'a> Extractor<'a> {
    pub fn new(document: &'a ProfileDocument) -> Self {
        Self { document }
    }

    /// Extracts the headline and every section in `descriptors`
    pub fn extract(&self, descriptors: &'static [SectionDescriptor]) -> ExtractedProfile {
        ExtractedProfile {
            headline: self.headline(),
            sections: descriptors.iter().map(|d| self.section(d)).collect(),
        }
    }

    /// Name and extra-info table from the top card
    pub fn headline(&self) -> Headline {
        let root = self.document.root();
        Headline {
            name: find_field(root, &NAME),
            extra_info: find_table(root, &EXTRA_INFO),
        }
    }

    /// Extracts one section, degrading to an empty section when its
    /// container is missing
    pub fn section(&self, descriptor: &'static SectionDescriptor) -> ExtractedSection {
        match self.try_section(descriptor) {
            Ok(section) => section,
            Err(e) => {
                debug!("Skipping section: {}", e);
                ExtractedSection::empty(descriptor)
            }
        }
    }

    /// Extracts one section, reporting a missing container as an error
    pub fn try_section(
        &self,
        descriptor: &'static SectionDescriptor,
    ) -> Result<ExtractedSection, ExtractError> {
        let container = self.container(descriptor)?;

        if descriptor.is_free_text() {
            return Ok(ExtractedSection {
                text: Some(to_markdown(&container.html())).filter(|text| !text.is_empty()),
                ..ExtractedSection::empty(descriptor)
            });
        }

        let items: Vec<FieldRecord> = self
            .item_elements(container, descriptor)
            .into_iter()
            .map(|item| self.item(item, descriptor))
            .collect();

        debug!("Section '{}': {} items", descriptor.id, items.len());

        Ok(ExtractedSection {
            descriptor,
            title: find_field(container, &SECTION_TITLE),
            text: None,
            items,
        })
    }

    /// The `section.profile-section#<id>` element
    pub fn container(
        &self,
        descriptor: &'static SectionDescriptor,
    ) -> Result<ElementRef<'a>, ExtractError> {
        let lookup = Lookup::tag("section")
            .class("profile-section")
            .id(descriptor.id);

        find_element(self.document.root(), &lookup).ok_or(ExtractError::MissingContainer {
            section: descriptor.id,
        })
    }

    /// Item elements of a section in document order, minus excluded ones
    fn item_elements(
        &self,
        container: ElementRef<'a>,
        descriptor: &SectionDescriptor,
    ) -> Vec<ElementRef<'a>> {
        let selector = format!(".{}", descriptor.item_selector);
        fields::select_all(container, &selector)
            .into_iter()
            .filter(|item| {
                !item.value().classes().any(|class| {
                    descriptor
                        .excluded_classes
                        .iter()
                        .any(|excluded| *excluded == class)
                })
            })
            .collect()
    }

    /// Reads every field of one item
    pub fn item(&self, item: ElementRef<'_>, descriptor: &SectionDescriptor) -> FieldRecord {
        let fields = &descriptor.fields;
        FieldRecord {
            title: field(item, &fields.title),
            subtitle: field(item, &fields.subtitle),
            date_range: field(item, &fields.date_range),
            location: field(item, &fields.location),
            description: field(item, &fields.description),
            link: fields
                .link
                .as_ref()
                .and_then(|lookup| find_attr(item, lookup, "href")),
        }
    }
}

fn field(item: ElementRef<'_>, source: &FieldSource) -> Option<String> {
    match source {
        FieldSource::Absent => None,
        FieldSource::ItemText => {
            let text = text_lines(item).join(" ");
            Some(text).filter(|text| !text.is_empty())
        }
        FieldSource::Find(lookup) => find_field(item, lookup),
    }
}

use super::sections::SectionDescriptor;

/// Named fields extracted from one section item
///
/// Any field may be missing; the renderer omits the lines that need it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldRecord {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub date_range: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,

    /// External link; redirect-wrapped until resolved
    pub link: Option<String>,
}

/// Name and key facts from the top of the profile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headline {
    pub name: Option<String>,

    /// Rows of the extra-info table in document order
    pub extra_info: Vec<(String, String)>,
}

/// Everything extracted for one section
#[derive(Debug, Clone)]
pub struct ExtractedSection {
    pub descriptor: &'static SectionDescriptor,
    pub title: Option<String>,

    /// Converted text of a free-text section
    pub text: Option<String>,

    pub items: Vec<FieldRecord>,
}

impl ExtractedSection {
    /// A section with nothing to render
    pub fn empty(descriptor: &'static SectionDescriptor) -> Self {
        Self {
            descriptor,
            title: None,
            text: None,
            items: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.text.is_none() && self.items.is_empty()
    }
}

/// Headline plus every known section, in declaration order
#[derive(Debug, Clone)]
pub struct ExtractedProfile {
    pub headline: Headline,
    pub sections: Vec<ExtractedSection>,
}

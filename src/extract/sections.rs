//! Section descriptors
//!
//! Every known profile section is described once here: where its container
//! lives, which class marks its repeated items, where each field of an item
//! is found, and which layout renders it. Extraction and rendering are both
//! driven from this table.

/// How a section is laid out in the markdown output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// The section's own converted text, verbatim
    FreeText,
    Experience,
    Education,
    Skills,
    Languages,
    Volunteering,
    Organizations,
    Publications,
    Awards,
    Projects,
    Scores,
}

/// Locates one descendant element by tag, class and id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup {
    pub tag: &'static str,
    pub class: Option<&'static str>,
    pub id: Option<&'static str>,

    /// Prefer a link nested inside the matched element, falling back to
    /// the element itself when it holds no link
    pub within_link: bool,

    /// Convert the inner markup to markdown instead of plain text
    pub as_markdown: bool,
}

impl Lookup {
    pub const fn tag(tag: &'static str) -> Self {
        Self {
            tag,
            class: None,
            id: None,
            within_link: false,
            as_markdown: false,
        }
    }

    pub const fn class(self, class: &'static str) -> Self {
        Self {
            class: Some(class),
            ..self
        }
    }

    pub const fn id(self, id: &'static str) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    pub const fn within_link(self) -> Self {
        Self {
            within_link: true,
            ..self
        }
    }

    pub const fn markdown(self) -> Self {
        Self {
            as_markdown: true,
            ..self
        }
    }

    /// CSS selector for the element itself
    pub fn selector(&self) -> String {
        let mut selector = self.tag.to_string();
        if let Some(class) = self.class {
            selector.push('.');
            selector.push_str(class);
        }
        if let Some(id) = self.id {
            selector.push('#');
            selector.push_str(id);
        }
        selector
    }

    /// CSS selector for a link nested in the element
    pub fn link_selector(&self) -> String {
        format!("{} a", self.selector())
    }
}

/// Where a field's value comes from within an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    /// The section has no such field
    Absent,
    /// The item element's own text
    ItemText,
    /// The first descendant matching the lookup
    Find(Lookup),
}

/// Field lookups for the items of one section
#[derive(Debug, Clone, Copy)]
pub struct ItemFields {
    pub title: FieldSource,
    pub subtitle: FieldSource,
    pub date_range: FieldSource,
    pub location: FieldSource,
    pub description: FieldSource,

    /// Anchor whose `href` is a redirect-wrapped external link
    pub link: Option<Lookup>,
}

impl ItemFields {
    const NONE: ItemFields = ItemFields {
        title: FieldSource::Absent,
        subtitle: FieldSource::Absent,
        date_range: FieldSource::Absent,
        location: FieldSource::Absent,
        description: FieldSource::Absent,
        link: None,
    };

    /// Title, subtitle, date range and description in their usual places
    const STANDARD: ItemFields = ItemFields {
        title: FieldSource::Find(TITLE),
        subtitle: FieldSource::Find(SUBTITLE),
        date_range: FieldSource::Find(DATE_RANGE),
        description: FieldSource::Find(DESCRIPTION),
        ..Self::NONE
    };
}

/// One named profile section
#[derive(Debug, Clone, Copy)]
pub struct SectionDescriptor {
    /// `id` attribute of the section container
    pub id: &'static str,

    /// Class of the repeated item elements; empty for free-text sections
    pub item_selector: &'static str,

    pub layout: Layout,
    pub fields: ItemFields,

    /// Items carrying any of these classes are not real entries
    pub excluded_classes: &'static [&'static str],
}

impl SectionDescriptor {
    /// True when the section is rendered as a single block of text
    pub fn is_free_text(&self) -> bool {
        self.item_selector.is_empty()
    }
}

/// Profile name in the top card
pub const NAME: Lookup = Lookup::tag("h1").class("fn").id("name");

/// Key/value table under the name
pub const EXTRA_INFO: Lookup = Lookup::tag("table").class("extra-info");

/// Section heading inside a container
pub const SECTION_TITLE: Lookup = Lookup::tag("h3").class("title");

const TITLE: Lookup = Lookup::tag("h4");
const LINKED_TITLE: Lookup = Lookup::tag("h4").within_link();
const SUBTITLE: Lookup = Lookup::tag("h5").class("item-subtitle");
const DATE_RANGE: Lookup = Lookup::tag("span").class("date-range");
const LOCATION: Lookup = Lookup::tag("span").class("location");
const DESCRIPTION: Lookup = Lookup::tag("p").class("description");
const EXTERNAL_LINK: Lookup = Lookup::tag("a").class("external-link");

/// Pagination controls rendered as skill items
const SKILL_CONTROLS: &[&str] = &["see-more", "see-less"];

/// Known sections in output order
pub static SECTIONS: [SectionDescriptor; 11] = [
    SectionDescriptor {
        id: "summary",
        item_selector: "",
        layout: Layout::FreeText,
        fields: ItemFields::NONE,
        excluded_classes: &[],
    },
    SectionDescriptor {
        id: "experience",
        item_selector: "position",
        layout: Layout::Experience,
        fields: ItemFields {
            location: FieldSource::Find(LOCATION),
            ..ItemFields::STANDARD
        },
        excluded_classes: &[],
    },
    SectionDescriptor {
        id: "education",
        item_selector: "school",
        layout: Layout::Education,
        fields: ItemFields {
            description: FieldSource::Find(Lookup::tag("div").class("description")),
            ..ItemFields::STANDARD
        },
        excluded_classes: &[],
    },
    SectionDescriptor {
        id: "skills",
        item_selector: "skill",
        layout: Layout::Skills,
        fields: ItemFields {
            title: FieldSource::ItemText,
            ..ItemFields::NONE
        },
        excluded_classes: SKILL_CONTROLS,
    },
    SectionDescriptor {
        id: "languages",
        item_selector: "language",
        layout: Layout::Languages,
        fields: ItemFields {
            title: FieldSource::Find(Lookup::tag("h4").class("name")),
            subtitle: FieldSource::Find(Lookup::tag("p").class("proficiency")),
            ..ItemFields::NONE
        },
        excluded_classes: &[],
    },
    SectionDescriptor {
        id: "volunteering",
        item_selector: "position",
        layout: Layout::Volunteering,
        fields: ItemFields::STANDARD,
        excluded_classes: &[],
    },
    SectionDescriptor {
        id: "organizations",
        item_selector: "organization",
        layout: Layout::Organizations,
        fields: ItemFields::STANDARD,
        excluded_classes: &[],
    },
    SectionDescriptor {
        id: "publications",
        item_selector: "publication",
        layout: Layout::Publications,
        fields: ItemFields {
            title: FieldSource::Find(LINKED_TITLE),
            link: Some(EXTERNAL_LINK),
            ..ItemFields::STANDARD
        },
        excluded_classes: &[],
    },
    SectionDescriptor {
        id: "awards",
        item_selector: "award",
        layout: Layout::Awards,
        fields: ItemFields::STANDARD,
        excluded_classes: &[],
    },
    SectionDescriptor {
        id: "projects",
        item_selector: "project",
        layout: Layout::Projects,
        fields: ItemFields {
            title: FieldSource::Find(LINKED_TITLE),
            subtitle: FieldSource::Absent,
            link: Some(EXTERNAL_LINK),
            ..ItemFields::STANDARD
        },
        excluded_classes: &[],
    },
    SectionDescriptor {
        id: "scores",
        item_selector: "score",
        layout: Layout::Scores,
        fields: ItemFields::STANDARD,
        excluded_classes: &[],
    },
];

/// Looks up a section by its container id
pub fn section(id: &str) -> Option<&'static SectionDescriptor> {
    SECTIONS.iter().find(|descriptor| descriptor.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_order() {
        let ids: Vec<&str> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec![
                "summary",
                "experience",
                "education",
                "skills",
                "languages",
                "volunteering",
                "organizations",
                "publications",
                "awards",
                "projects",
                "scores",
            ]
        );
    }

    #[test]
    fn test_only_summary_is_free_text() {
        let free_text: Vec<&str> = SECTIONS
            .iter()
            .filter(|s| s.is_free_text())
            .map(|s| s.id)
            .collect();
        assert_eq!(free_text, vec!["summary"]);
        assert_eq!(section("summary").unwrap().layout, Layout::FreeText);
    }

    #[test]
    fn test_selector_composition() {
        assert_eq!(NAME.selector(), "h1.fn#name");
        assert_eq!(SECTION_TITLE.selector(), "h3.title");
        assert_eq!(LINKED_TITLE.link_selector(), "h4 a");
    }

    #[test]
    fn test_only_linked_sections_resolve_links() {
        let linked: Vec<&str> = SECTIONS
            .iter()
            .filter(|s| s.fields.link.is_some())
            .map(|s| s.id)
            .collect();
        assert_eq!(linked, vec!["publications", "projects"]);
    }

    #[test]
    fn test_skills_exclude_pagination_controls() {
        let skills = section("skills").unwrap();
        assert!(skills.excluded_classes.contains(&"see-more"));
        assert!(skills.excluded_classes.contains(&"see-less"));
    }

    #[test]
    fn test_unknown_section() {
        assert!(section("certifications").is_none());
    }
}

//! Markdown layout templates
//!
//! Each section layout has a fixed template. Lines whose field is missing
//! are left out entirely rather than rendered with a placeholder, and every
//! block (headline included) ends with a horizontal rule.

use crate::extract::{ExtractedProfile, ExtractedSection, FieldRecord, Headline, Layout};

/// Blank line, rule, blank line
pub const SEPARATOR: [&str; 3] = ["", "---", ""];

/// Indentation of nested list items
const INDENT: &str = "    ";

/// Trailing double space: a markdown hard line break
const HARD_BREAK: &str = "  ";

/// Markdown lines for one block of the document, separator included
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedSection {
    lines: Vec<String>,
}

impl RenderedSection {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines before the trailing separator
    pub fn body(&self) -> &[String] {
        &self.lines[..self.lines.len().saturating_sub(SEPARATOR.len())]
    }

    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn push_some(&mut self, line: Option<String>) {
        if let Some(line) = line {
            self.lines.push(line);
        }
    }

    fn close(mut self) -> Self {
        self.lines.extend(SEPARATOR.iter().map(|line| line.to_string()));
        self
    }
}

/// Renders the whole profile: headline first, then sections in order
pub fn render_document(profile: &ExtractedProfile) -> String {
    let mut lines = render_headline(&profile.headline).lines;
    for section in &profile.sections {
        lines.extend(render_section(section).lines);
    }

    let mut markdown = lines.join("\n");
    markdown.push('\n');
    markdown
}

/// `## {name}`, then a bullet per extra-info row with its value's lines
/// nested underneath
pub fn render_headline(headline: &Headline) -> RenderedSection {
    let mut out = RenderedSection::default();

    if let Some(name) = &headline.name {
        out.push(format!("## {}", name));
        out.push("");
    }

    for (key, value) in &headline.extra_info {
        out.push(format!("+ {}", key));
        for line in value.lines() {
            let line = line.trim();
            let line = line.strip_suffix(',').unwrap_or(line).trim_end();
            if !line.is_empty() {
                out.push(format!("{}+ {}", INDENT, line));
            }
        }
    }

    out.close()
}

/// Renders one section with its layout's template
pub fn render_section(section: &ExtractedSection) -> RenderedSection {
    let mut out = RenderedSection::default();
    let layout = section.descriptor.layout;

    if layout == Layout::FreeText {
        out.push_some(section.text.clone());
        return out.close();
    }

    if let Some(title) = &section.title {
        out.push(format!("### {}", title));
        out.push("");
    }

    for item in &section.items {
        match layout {
            Layout::FreeText => {}
            Layout::Experience => experience(&mut out, item),
            Layout::Education => education(&mut out, item),
            Layout::Skills => out.push_some(item.title.as_deref().map(|skill| bullet("", skill))),
            Layout::Languages => languages(&mut out, item),
            Layout::Volunteering => volunteering(&mut out, item),
            Layout::Organizations => organizations(&mut out, item),
            Layout::Publications => publications(&mut out, item),
            Layout::Awards => awards(&mut out, item),
            Layout::Projects => projects(&mut out, item),
            Layout::Scores => scores(&mut out, item),
        }
    }

    out.close()
}

fn experience(out: &mut RenderedSection, item: &FieldRecord) {
    out.push_some(item.title.as_deref().map(|title| bullet("", title)));

    let company = match (&item.subtitle, &item.location) {
        (Some(company), Some(location)) => Some(format!("{}, {}", company, location)),
        (Some(company), None) => Some(company.clone()),
        (None, location) => location.clone(),
    };
    out.push_some(company.map(|company| bullet(INDENT, &company)));
    out.push_some(item.date_range.as_deref().map(|date| bullet(INDENT, date)));
    out.push_some(item.description.as_deref().map(|text| bullet(INDENT, text)));
}

fn education(out: &mut RenderedSection, item: &FieldRecord) {
    out.push_some(match (&item.title, &item.date_range) {
        (Some(school), Some(date)) => Some(format!("+ {} ({})", school, date)),
        (Some(school), None) => Some(format!("+ {}", school)),
        (None, Some(date)) => Some(format!("+ ({})", date)),
        (None, None) => None,
    });
    out.push_some(item.subtitle.as_deref().map(|degree| bullet(INDENT, degree)));

    if let Some(description) = &item.description {
        for line in description.lines().map(str::trim).filter(|l| !l.is_empty()) {
            out.push(bullet(INDENT, line));
        }
    }
}

fn languages(out: &mut RenderedSection, item: &FieldRecord) {
    out.push_some(item.title.as_ref().map(|language| match &item.subtitle {
        Some(proficiency) => format!("+ {}: {}", language, proficiency),
        None => format!("+ {}", language),
    }));
}

fn volunteering(out: &mut RenderedSection, item: &FieldRecord) {
    out.push_some(item.title.as_ref().map(|role| match &item.subtitle {
        Some(organization) => format!("#### {} at {}", role, organization),
        None => format!("#### {}", role),
    }));
    date_and_description(out, item);
    out.push("");
}

fn organizations(out: &mut RenderedSection, item: &FieldRecord) {
    out.push_some(item.title.as_ref().map(|organization| match &item.subtitle {
        Some(position) => format!("#### {} at {}{}", position, organization, HARD_BREAK),
        None => format!("#### {}{}", organization, HARD_BREAK),
    }));
    out.push_some(
        item.date_range
            .as_ref()
            .map(|date| format!("{}{}", date, HARD_BREAK)),
    );
    out.push_some(
        item.description
            .as_deref()
            .map(|text| format!("{}{}", hard_breaks(text), HARD_BREAK)),
    );
    out.push("");
}

fn publications(out: &mut RenderedSection, item: &FieldRecord) {
    out.push_some(item.title.as_deref().map(|title| {
        let heading = format!("#### {}", linked(title, item.link.as_deref()));
        match &item.subtitle {
            Some(publisher) => format!("{} on {}", heading, publisher),
            None => heading,
        }
    }));
    date_and_description(out, item);
    out.push("");
}

fn awards(out: &mut RenderedSection, item: &FieldRecord) {
    out.push_some(item.title.as_ref().map(|award| format!("#### {}", award)));
    let held = match (&item.subtitle, &item.date_range) {
        (Some(issuer), Some(date)) => Some(format!("Held by {} at {}", issuer, date)),
        (Some(issuer), None) => Some(format!("Held by {}", issuer)),
        (None, Some(date)) => Some(format!("Held at {}", date)),
        (None, None) => None,
    };
    out.push_some(held.map(|line| format!("{}{}", line, HARD_BREAK)));
    out.push_some(item.description.as_deref().map(hard_breaks));
    out.push("");
}

fn projects(out: &mut RenderedSection, item: &FieldRecord) {
    out.push_some(
        item.title
            .as_deref()
            .map(|title| format!("#### {}", linked(title, item.link.as_deref()))),
    );
    date_and_description(out, item);
    out.push("");
}

fn scores(out: &mut RenderedSection, item: &FieldRecord) {
    out.push_some(item.title.as_ref().map(|test| format!("#### {}", test)));
    out.push_some(
        item.subtitle
            .as_ref()
            .map(|score| format!("{}{}", score, HARD_BREAK)),
    );
    date_and_description(out, item);
    out.push("");
}

fn date_and_description(out: &mut RenderedSection, item: &FieldRecord) {
    out.push_some(item.date_range.clone());
    out.push_some(item.description.as_deref().map(hard_breaks));
}

/// `[title](url)`, or the bare title without a usable link
fn linked(title: &str, link: Option<&str>) -> String {
    match link {
        Some(url) if !url.trim().is_empty() => format!("[{}]({})", title, url),
        _ => title.to_string(),
    }
}

/// A list item whose continuation lines stay inside the bullet
fn bullet(indent: &str, text: &str) -> String {
    let continuation = format!("{}\n{}  ", HARD_BREAK, indent);
    let body = text.lines().collect::<Vec<_>>().join(&continuation);
    format!("{}+ {}", indent, body)
}

/// Joins lines with markdown hard breaks
fn hard_breaks(text: &str) -> String {
    text.lines()
        .collect::<Vec<_>>()
        .join(&format!("{}\n", HARD_BREAK))
}

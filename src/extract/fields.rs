//! Field lookup primitives
//!
//! Every lookup returns an `Option`: a missing element is the normal case
//! for optional fields and never an error.

use super::sections::Lookup;
use scraper::{ElementRef, Selector};
use tracing::warn;

/// Elements whose boundaries start a new line of text
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "blockquote", "dd", "div", "dl", "dt", "footer", "h1", "h2", "h3",
    "h4", "h5", "h6", "header", "li", "ol", "p", "pre", "section", "table", "tr", "ul",
];

/// Elements whose text never belongs in the output
const SKIPPED_TAGS: &[&str] = &["script", "style", "template", "noscript"];

/// Parses a selector, logging instead of failing on bad input
fn parse_selector(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(selector) => Some(selector),
        Err(e) => {
            warn!("Ignoring invalid selector '{}': {:?}", selector, e);
            None
        }
    }
}

/// Finds the first descendant of `element` matching a CSS selector
pub fn select_first<'a>(element: ElementRef<'a>, selector: &str) -> Option<ElementRef<'a>> {
    let selector = parse_selector(selector)?;
    element.select(&selector).next()
}

/// Finds all descendants of `element` matching a CSS selector, in document order
pub fn select_all<'a>(element: ElementRef<'a>, selector: &str) -> Vec<ElementRef<'a>> {
    let Some(selector) = parse_selector(selector) else {
        return Vec::new();
    };
    element.select(&selector).collect()
}

/// Finds the element a lookup points at
///
/// Lookups marked `within_link` prefer a nested anchor and fall back to the
/// element itself.
pub fn find_element<'a>(element: ElementRef<'a>, lookup: &Lookup) -> Option<ElementRef<'a>> {
    if lookup.within_link {
        if let Some(link) = select_first(element, &lookup.link_selector()) {
            return Some(link);
        }
    }
    select_first(element, &lookup.selector())
}

/// Text of the element a lookup points at, trimmed
///
/// Returns `None` when nothing matches or the match holds no text.
pub fn find_field(element: ElementRef<'_>, lookup: &Lookup) -> Option<String> {
    let found = find_element(element, lookup)?;
    let text = if lookup.as_markdown {
        to_markdown(&found.inner_html())
    } else {
        plain_text(found)
    };
    non_empty(text)
}

/// An attribute of the element a lookup points at
pub fn find_attr(element: ElementRef<'_>, lookup: &Lookup, attr: &str) -> Option<String> {
    let found = select_first(element, &lookup.selector())?;
    found.value().attr(attr).and_then(|value| non_empty(value.to_string()))
}

/// Reads a two-column table into ordered key/value pairs
///
/// Each row's cells are joined as `key | value` and split on the first `|`.
/// Rows without a separator are skipped; a repeated key keeps its first row.
pub fn find_table(element: ElementRef<'_>, lookup: &Lookup) -> Vec<(String, String)> {
    let Some(table) = find_element(element, lookup) else {
        return Vec::new();
    };

    let mut entries: Vec<(String, String)> = Vec::new();
    for row in select_all(table, "tr") {
        let cells: Vec<String> = row
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|cell| matches!(cell.value().name(), "th" | "td"))
            .map(plain_text)
            .collect();

        let Some((key, value)) = parse_table_row(&cells.join(" | ")) else {
            continue;
        };

        if entries.iter().any(|(existing, _)| *existing == key) {
            continue;
        }
        entries.push((key, value));
    }
    entries
}

/// Splits `key | value` text on the first `|`
pub fn parse_table_row(row: &str) -> Option<(String, String)> {
    let (key, value) = row.split_once('|')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), value.trim().to_string()))
}

/// Visible text of an element split into lines
///
/// Newlines in the text, `<br>` and block element boundaries end a line,
/// spaces and tabs inside a line collapse to single spaces, and empty lines
/// are dropped.
pub fn text_lines(element: ElementRef<'_>) -> Vec<String> {
    let mut raw = String::new();
    collect_text(element, &mut raw);

    raw.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect()
}

/// Visible text of an element with line breaks kept as `\n`
pub fn plain_text(element: ElementRef<'_>) -> String {
    text_lines(element).join("\n")
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            // Blank lines left by source indentation are dropped in `text_lines`
            out.push_str(text);
        } else if let Some(child) = ElementRef::wrap(child) {
            let name = child.value().name();
            if name == "br" {
                out.push('\n');
                continue;
            }
            if SKIPPED_TAGS.contains(&name) {
                continue;
            }

            let block = BLOCK_TAGS.contains(&name);
            if block {
                out.push('\n');
            }
            collect_text(child, out);
            if block {
                out.push('\n');
            }
        }
    }
}

/// Converts an HTML fragment to markdown, keeping inline formatting
///
/// Falls back to the fragment's plain text if conversion fails.
pub fn to_markdown(html: &str) -> String {
    match htmd::convert(html) {
        Ok(markdown) => markdown.trim().to_string(),
        Err(e) => {
            warn!("Markdown conversion failed, using plain text: {}", e);
            let fragment = scraper::Html::parse_fragment(html);
            plain_text(fragment.root_element())
        }
    }
}

fn non_empty(text: String) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

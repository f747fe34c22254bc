//! Output module for rendering profiles as markdown
//!
//! This module handles:
//! - Rendering the headline and each section with its layout template
//! - Writing the finished document to a stream

mod markdown;

pub use markdown::{render_document, render_headline, render_section, RenderedSection, SEPARATOR};

use std::io::Write;

/// Writes a rendered document and flushes the writer
///
/// # Arguments
///
/// * `writer` - Destination stream, usually stdout
/// * `markdown` - The rendered document
pub fn write_document<W: Write>(writer: &mut W, markdown: &str) -> std::io::Result<()> {
    writer.write_all(markdown.as_bytes())?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_document() {
        let mut buffer = Vec::new();
        write_document(&mut buffer, "## Jane\n").unwrap();
        assert_eq!(buffer, b"## Jane\n");
    }
}

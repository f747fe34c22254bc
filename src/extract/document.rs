use scraper::{ElementRef, Html};

/// Parsed markup of a rendered profile page
///
/// Read-only once parsed; extraction only ever borrows it.
pub struct ProfileDocument {
    html: Html,
}

impl ProfileDocument {
    /// Parses serialized page markup
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    pub fn html(&self) -> &Html {
        &self.html
    }

    /// The `<html>` element
    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }
}

impl std::fmt::Debug for ProfileDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileDocument")
            .field("errors", &self.html.errors.len())
            .finish()
    }
}

//! Standalone printable report documents.

use serde::{Deserialize, Serialize};

/// A self-contained HTML document wrapping a captured page region for
/// printing: a title heading, a rule and the region's markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    title: String,
    stylesheet_href: String,
    body_html: String,
}

impl ReportDocument {
    /// `body_html` is trusted markup captured from the page and is embedded
    /// verbatim; the title is escaped.
    pub fn new(
        title: impl Into<String>,
        stylesheet_href: impl Into<String>,
        body_html: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            stylesheet_href: stylesheet_href.into(),
            body_html: body_html.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body_html(&self) -> &str {
        &self.body_html
    }

    /// Renders the complete document.
    pub fn to_html(&self) -> String {
        let title = escape_text(&self.title);
        format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head>\n\
             <title>{title}</title>\n\
             <link href=\"{href}\" rel=\"stylesheet\">\n\
             <style>\n\
             body {{ padding: 20px; }}\n\
             table {{ margin-bottom: 20px; }}\n\
             </style>\n\
             </head>\n\
             <body>\n\
             <h1>{title}</h1>\n\
             <hr>\n\
             {body}\n\
             </body>\n\
             </html>",
            title = title,
            href = escape_text(&self.stylesheet_href),
            body = self.body_html,
        )
    }
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> ReportDocument {
        ReportDocument::new(
            "Decision Report",
            "https://example.com/style.css",
            "<table><tr><td>A1</td></tr></table>",
        )
    }

    #[test]
    fn html_wraps_body_with_heading_and_rule() {
        let html = document().to_html();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>Decision Report</h1>"));
        assert!(html.contains("<hr>"));
        assert!(html.contains("<table><tr><td>A1</td></tr></table>"));
    }

    #[test]
    fn html_links_the_stylesheet() {
        let html = document().to_html();
        assert!(html.contains("<link href=\"https://example.com/style.css\" rel=\"stylesheet\">"));
    }

    #[test]
    fn title_is_escaped_in_markup() {
        let doc = ReportDocument::new("Results <2026>", "https://example.com/s.css", "");
        let html = doc.to_html();
        assert!(html.contains("<title>Results &lt;2026&gt;</title>"));
        assert!(html.contains("<h1>Results &lt;2026&gt;</h1>"));
    }

    #[test]
    fn body_markup_is_embedded_verbatim() {
        let doc = ReportDocument::new("R", "https://example.com/s.css", "<div class=\"card\">x</div>");
        assert!(doc.to_html().contains("<div class=\"card\">x</div>"));
    }
}

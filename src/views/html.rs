//! Minimal HTML builder. Text and attribute values are always escaped.

use std::fmt::Write as _;

/// Escape text for HTML content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

pub struct HtmlBuilder {
    buf: String,
}

impl HtmlBuilder {
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(16 * 1024),
        }
    }

    /// `<tag attr="value" ...>`
    pub fn open(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
        self.buf.push('<');
        self.buf.push_str(tag);
        for (name, value) in attrs {
            let _ = write!(self.buf, " {}=\"{}\"", name, escape(value));
        }
        self.buf.push('>');
        self
    }

    /// `</tag>`. Nesting is the caller's job.
    pub fn close(&mut self, tag: &str) -> &mut Self {
        let _ = write!(self.buf, "</{}>", tag);
        self
    }

    /// Void element such as `<input>`; nothing to close.
    pub fn void(&mut self, tag: &str, attrs: &[(&str, &str)]) -> &mut Self {
        self.open(tag, attrs)
    }

    pub fn text(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(&escape(text));
        self
    }

    /// Open, write escaped text, close.
    pub fn element(&mut self, tag: &str, attrs: &[(&str, &str)], text: &str) -> &mut Self {
        self.open(tag, attrs).text(text).close(tag)
    }

    /// Trusted markup written as-is.
    pub fn raw(&mut self, markup: &str) -> &mut Self {
        self.buf.push_str(markup);
        self
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

impl Default for HtmlBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_escape_leaves_devanagari_alone() {
        assert_eq!(escape("रू १२"), "रू १२");
    }

    #[test]
    fn test_element_with_attributes() {
        let mut html = HtmlBuilder::new();
        html.element("a", &[("href", "/inventory?q=a&b")], "<Inventory>");
        assert_eq!(
            html.into_string(),
            "<a href=\"/inventory?q=a&amp;b\">&lt;Inventory&gt;</a>"
        );
    }

    #[test]
    fn test_nesting_and_void() {
        let mut html = HtmlBuilder::new();
        html.open("form", &[("method", "get")])
            .void("input", &[("name", "q"), ("value", "\"x\"")])
            .close("form");
        assert_eq!(
            html.into_string(),
            "<form method=\"get\"><input name=\"q\" value=\"&quot;x&quot;\"></form>"
        );
    }
}

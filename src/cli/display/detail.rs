//! Detail view builder for key-value display.

use console::style;

use super::colors::label;

/// A builder for detail views (key-value display).
pub struct DetailView {
    title: String,
    sections: Vec<DetailSection>,
}

struct DetailSection {
    header: Option<String>,
    fields: Vec<(String, String)>,
    items: Vec<String>,
}

impl DetailSection {
    fn new(header: Option<String>) -> Self {
        Self {
            header,
            fields: vec![],
            items: vec![],
        }
    }
}

impl DetailView {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            sections: vec![DetailSection::new(None)],
        }
    }

    /// Add a key-value field to the current section.
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        if let Some(section) = self.sections.last_mut() {
            section.fields.push((key.to_string(), value.into()));
        }
        self
    }

    /// Start a new named section with a header.
    pub fn section(mut self, header: &str) -> Self {
        self.sections.push(DetailSection::new(Some(header.to_string())));
        self
    }

    /// Add a bullet-point item to the current section.
    pub fn item(mut self, text: impl Into<String>) -> Self {
        if let Some(section) = self.sections.last_mut() {
            section.items.push(text.into());
        }
        self
    }

    /// Add every item, or a dimmed placeholder when there are none.
    pub fn items_or<I>(self, items: I, placeholder: &str) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut items = items.into_iter().peekable();
        if items.peek().is_none() {
            return self.item(style(placeholder).dim().to_string());
        }
        items.fold(self, |view, item| view.item(item))
    }

    pub fn render(&self) -> String {
        let mut lines = vec![style(&self.title).bold().to_string()];
        let key_width = self
            .sections
            .iter()
            .flat_map(|s| s.fields.iter())
            .map(|(k, _)| k.len())
            .max()
            .unwrap_or(12);

        for section in &self.sections {
            if let Some(header) = &section.header {
                lines.push(String::new());
                lines.push(style(header).bold().underlined().to_string());
            }
            for (key, value) in &section.fields {
                // Pad on the raw key; the styled label carries escape codes
                let padding = " ".repeat(key_width.saturating_sub(key.len()) + 1);
                lines.push(format!("  {}{padding} {value}", label(key)));
            }
            for item in &section.items {
                lines.push(format!("  {} {item}", style("\u{2022}").dim()));
            }
        }
        lines.join("\n")
    }
}

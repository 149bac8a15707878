//! Rendering options.

/// Options for rendering an assembled document to HTML.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Document title, escaped into the `<title>` element.
    pub title: String,

    /// Whether to include the embedded stylesheet.
    pub include_styles: bool,

    /// Whether to emit a "Page N" heading at the top of each page container.
    pub page_headings: bool,
}

impl RenderOptions {
    /// Create render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Enable or disable the embedded stylesheet.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Enable or disable per-page headings.
    pub fn with_page_headings(mut self, include: bool) -> Self {
        self.page_headings = include;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "Converted Document".to_string(),
            include_styles: true,
            page_headings: true,
        }
    }
}

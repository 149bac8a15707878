//! HTML rendering for assembled documents.
//!
//! Produces a single self-contained HTML5 document: images are embedded as
//! base64 data URIs, so the output carries no external asset references.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::Result;
use crate::model::{Block, Document, PageFragment, PageImage, TableFragment};

use super::RenderOptions;

const STYLES: &str = r#"body { font-family: Arial, sans-serif; line-height: 1.6; margin: 40px; }
.page { margin-bottom: 20px; border-bottom: 1px solid #ccc; padding-bottom: 20px; }
.text-block { margin-bottom: 10px; }
table { border-collapse: collapse; margin: 15px 0; width: 100%; }
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
th { background-color: #f5f5f5; }
.icon-cell { display: flex; align-items: center; gap: 10px; }
.cell-icon { width: 24px; height: 24px; object-fit: contain; vertical-align: middle; margin-right: 8px; }
.cell-label { color: #1155cc; vertical-align: middle; }"#;

/// Convert an assembled document to HTML.
pub fn to_html(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(doc)
}

/// HTML renderer over the assembled document tree.
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to a self-contained HTML string.
    pub fn render(&self, doc: &Document) -> Result<String> {
        let mut output = String::new();

        output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        output.push_str("<meta charset=\"UTF-8\">\n");
        output.push_str(&format!("<title>{}</title>\n", escape(&self.options.title)));
        if self.options.include_styles {
            output.push_str("<style>\n");
            output.push_str(STYLES);
            output.push_str("\n</style>\n");
        }
        output.push_str("</head>\n<body>\n");

        for page in &doc.pages {
            self.render_page(&mut output, page);
        }

        output.push_str("</body>\n</html>\n");
        Ok(output)
    }

    fn render_page(&self, output: &mut String, page: &PageFragment) {
        output.push_str(&format!(
            "<div class=\"page\" id=\"page-{}\">\n",
            page.number
        ));
        if self.options.page_headings {
            output.push_str(&format!("<h2>Page {}</h2>\n", page.number));
        }

        for block in &page.blocks {
            match block {
                Block::Table(table) => self.render_table(output, table),
                Block::Image(image) => self.render_standalone_image(output, image, page.number),
                Block::Text(text) => self.render_text_block(output, text),
            }
        }

        output.push_str("</div>\n");
    }

    fn render_table(&self, output: &mut String, table: &TableFragment) {
        output.push_str("<table>\n");

        for row in &table.rows {
            output.push_str("<tr>\n");
            for cell in &row.cells {
                if row.is_header {
                    output.push_str("<th>");
                    if let Some(text) = &cell.text {
                        output.push_str(&escape(text));
                    }
                    output.push_str("</th>\n");
                } else if let Some(icon) = &cell.icon {
                    output.push_str("<td><div class=\"icon-cell\">");
                    output.push_str(&format!(
                        "<img src=\"{}\" class=\"cell-icon\" alt=\"Row icon\">",
                        data_uri(icon)
                    ));
                    if let Some(text) = &cell.text {
                        output.push_str(&format!(
                            "<span class=\"cell-label\">{}</span>",
                            escape(text)
                        ));
                    }
                    output.push_str("</div></td>\n");
                } else {
                    output.push_str("<td>");
                    if let Some(text) = &cell.text {
                        output.push_str(&escape(text));
                    }
                    output.push_str("</td>\n");
                }
            }
            output.push_str("</tr>\n");
        }

        output.push_str("</table>\n");
    }

    fn render_standalone_image(&self, output: &mut String, image: &PageImage, page_number: u32) {
        output.push_str(&format!(
            "<img src=\"{}\" alt=\"Page {} image\" style=\"max-width:100%; height:auto;\">\n",
            data_uri(image),
            page_number
        ));
    }

    fn render_text_block(&self, output: &mut String, text: &str) {
        output.push_str(&format!(
            "<div class=\"text-block\">{}</div>\n",
            escape(text).replace('\n', "<br>")
        ));
    }
}

/// Inline data URI for an image payload.
fn data_uri(image: &PageImage) -> String {
    format!(
        "data:image/{};base64,{}",
        image.media_subtype(),
        STANDARD.encode(&image.data)
    )
}

/// Escape text content for HTML.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

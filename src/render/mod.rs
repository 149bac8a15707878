//! Rendering stage: assembled document tree → output markup.

mod html;
mod options;

pub use html::{to_html, HtmlRenderer};
pub use options::RenderOptions;

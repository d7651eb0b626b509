//! Built-in formatter implementations.

mod text;
mod delimited;
mod html;

use crate::format::registry::FormatterRegistry;

/// Register all built-in formatters.
pub fn register_all(registry: &mut FormatterRegistry) {
    text::register(registry);
    delimited::register(registry);
    html::register(registry);
}

// Re-export for direct access
pub use text::{TextTableFormatter, COLUMN_WIDTH};
pub use delimited::CsvTableFormatter;
pub use html::HtmlTableFormatter;

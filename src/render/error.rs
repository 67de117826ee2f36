//! Structured error rendering.

use serde::Deserialize;

use crate::error::RenderError;
use crate::host::AnsiFormatter;
use crate::item::OutputItem;
use crate::surface::RenderSurface;

/// Class of the block holding a stack trace.
pub const TRACEBACK_CLASS: &str = "traceback";

/// An error record as produced by the execution engine. Every field may be
/// missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorLike {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub stack: Option<String>,
}

impl ErrorLike {
    /// One-line summary: `name: message`, or whichever of the two exists.
    pub fn header(&self) -> Option<String> {
        let name = self.name.as_deref().filter(|s| !s.is_empty());
        let message = self.message.as_deref().filter(|s| !s.is_empty());
        match (name, message) {
            (Some(name), Some(message)) => Some(format!("{name}: {message}")),
            (Some(only), None) | (None, Some(only)) => Some(only.to_string()),
            (None, None) => None,
        }
    }
}

/// Render a structured error record.
///
/// A record that does not decode is reported without touching the surface.
pub fn render_error(
    item: &OutputItem,
    surface: &mut RenderSurface<'_>,
    ansi: &dyn AnsiFormatter,
) -> Result<(), RenderError> {
    let err: ErrorLike =
        serde_json::from_str(&item.text()).map_err(RenderError::MalformedPayload)?;

    match err.stack.as_deref().filter(|s| !s.is_empty()) {
        Some(stack) => {
            let fragment = ansi.format(stack);
            let doc = surface.document_mut();
            let pre = doc.create_element("pre");
            doc.add_class(pre, TRACEBACK_CLASS);
            doc.insert_fragment(pre, fragment);
            surface.append(pre);
        }
        None => {
            if let Some(header) = err.header() {
                let doc = surface.document_mut();
                let div = doc.create_element("div");
                let text = doc.create_text(header);
                doc.append_child(div, text);
                surface.append(div);
            }
        }
    }

    surface.mark_error();
    Ok(())
}

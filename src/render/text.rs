//! Plain text rendering.

use crate::host::TruncationFormatter;
use crate::item::OutputItem;
use crate::surface::RenderSurface;

/// Class of the node holding plain text.
pub const PLAINTEXT_CLASS: &str = "output-plaintext";

pub fn render_text(
    item: &OutputItem,
    surface: &mut RenderSurface<'_>,
    truncation: &dyn TruncationFormatter,
    line_limit: usize,
) {
    let text = item.text();
    let doc = surface.document_mut();
    let content = doc.create_element("div");
    doc.add_class(content, PLAINTEXT_CLASS);
    truncation.append_lines(doc, content, &[&*text], line_limit);
    surface.append(content);
}

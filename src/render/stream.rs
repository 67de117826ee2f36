//! Stream chunk rendering and coalescing.
//!
//! A chunk that directly follows a chunk of the same stream in the same
//! container is appended to that chunk's block instead of opening a new one.
//! Adjacency comes from the container's `StreamTail`, which the dispatcher
//! clears whenever anything other than a stream chunk is rendered.

use crate::host::TruncationFormatter;
use crate::item::OutputItem;
use crate::surface::{
    Document, ERROR_CLASS, MIME_MARKER_ATTRIBUTE, RenderSurface, StreamTail,
};

/// Class of a stream block.
pub const STREAM_CLASS: &str = "output-stream";

/// What a stream render did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamRender {
    /// A new block was created in the surface
    NewBlock,
    /// The chunk was appended to the previous output's block
    Continued,
    /// The surface has no container; nothing was rendered
    Detached,
}

/// Render one stream chunk.
pub fn render_stream(
    item: &OutputItem,
    surface: &mut RenderSurface<'_>,
    is_error: bool,
    truncation: &dyn TruncationFormatter,
    line_limit: usize,
) -> StreamRender {
    let (doc, node, container) = surface.parts();
    let Some(container) = container else {
        log::debug!("stream output {} has no container; skipped", item.id());
        return StreamRender::Detached;
    };

    let text = item.text();

    if let Some(block) = container
        .stream_tail()
        .filter(|tail| continues(doc, tail, item.mime()))
        .map(|tail| tail.block)
    {
        let span = doc.create_element("span");
        truncation.append_lines(doc, span, &[&*text], line_limit);
        doc.append_child(block, span);
        return StreamRender::Continued;
    }

    let block = doc.create_element("div");
    doc.add_class(block, STREAM_CLASS);
    doc.set_attribute(block, MIME_MARKER_ATTRIBUTE, item.mime());
    truncation.append_lines(doc, block, &[&*text], line_limit);
    if is_error {
        doc.add_class(block, ERROR_CLASS);
    }
    doc.append_child(node, block);

    container.set_stream_tail(StreamTail {
        mime: item.mime().to_string(),
        block,
    });
    StreamRender::NewBlock
}

/// Whether a chunk of `mime` continues the block recorded in `tail`: same
/// mime, and the block is still the only thing in its output.
fn continues(doc: &Document, tail: &StreamTail, mime: &str) -> bool {
    if tail.mime != mime || doc.attribute(tail.block, MIME_MARKER_ATTRIBUTE) != Some(mime) {
        return false;
    }
    match doc.parent(tail.block) {
        Some(previous) => doc.children(previous) == [tail.block],
        None => false,
    }
}

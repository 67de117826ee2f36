//! Rendering surfaces.
//!
//! This module provides:
//! - `Document`: the node tree renderers mutate
//! - `RenderSurface`: the borrowed view one render call writes into
//! - `OutputContainer`: per-container state used for stream coalescing

mod document;

pub use document::{Document, Element, Fragment, NodeId, NodeKind, ScriptNode};

/// Attribute recording which stream mime a block was rendered for.
pub const MIME_MARKER_ATTRIBUTE: &str = "output-mime-type";

/// Class added to blocks and surfaces that display an error.
pub const ERROR_CLASS: &str = "error";

/// The last stream block rendered in a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamTail {
    /// Mime of the stream chunk that created the block
    pub mime: String,
    /// The block continuation chunks are appended to
    pub block: NodeId,
}

/// State the host keeps for one output container (e.g. a notebook cell).
///
/// Holds what stream coalescing needs to know about the previous output in
/// the same container, so the renderers never walk sibling nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputContainer {
    tail: Option<StreamTail>,
}

impl OutputContainer {
    /// Create a container with no previous output.
    pub fn new() -> Self {
        Self::default()
    }

    /// The previous output's stream block, if the previous output was a
    /// stream chunk.
    pub fn stream_tail(&self) -> Option<&StreamTail> {
        self.tail.as_ref()
    }

    /// Record the block the latest stream chunk rendered into.
    pub fn set_stream_tail(&mut self, tail: StreamTail) {
        self.tail = Some(tail);
    }

    /// Forget the previous stream block.
    pub fn break_stream(&mut self) {
        self.tail = None;
    }
}

/// The target of one render call.
///
/// Borrowed from the host for the duration of the call; the renderer never
/// keeps it.
#[derive(Debug)]
pub struct RenderSurface<'a> {
    doc: &'a mut Document,
    node: NodeId,
    container: Option<&'a mut OutputContainer>,
}

impl<'a> RenderSurface<'a> {
    /// A surface inside an output container.
    pub fn new(doc: &'a mut Document, node: NodeId, container: &'a mut OutputContainer) -> Self {
        Self {
            doc,
            node,
            container: Some(container),
        }
    }

    /// A surface that is not (or no longer) attached to a container.
    pub fn detached(doc: &'a mut Document, node: NodeId) -> Self {
        Self {
            doc,
            node,
            container: None,
        }
    }

    /// The output's node.
    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn document(&self) -> &Document {
        &*self.doc
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut *self.doc
    }

    pub fn container_mut(&mut self) -> Option<&mut OutputContainer> {
        self.container.as_deref_mut()
    }

    /// Split the surface into its parts so the document and the container
    /// can be borrowed together.
    pub fn parts(&mut self) -> (&mut Document, NodeId, Option<&mut OutputContainer>) {
        (&mut *self.doc, self.node, self.container.as_deref_mut())
    }

    /// Append `child` to the output's node.
    pub fn append(&mut self, child: NodeId) {
        self.doc.append_child(self.node, child);
    }

    /// Remove everything previously rendered into this output.
    pub fn clear(&mut self) {
        self.doc.clear_children(self.node);
    }

    /// Mark the output as an error output.
    pub fn mark_error(&mut self) {
        self.doc.add_class(self.node, ERROR_CLASS);
    }

    /// Tell the container this output is not a stream chunk.
    pub fn break_stream(&mut self) {
        if let Some(container) = self.container.as_deref_mut() {
            container.break_stream();
        }
    }
}

//! Host hooks around markup and script rendering.

use std::fmt::Debug;

use crate::item::OutputItem;
use crate::surface::{Document, NodeId};

/// Runs after markup has been parsed into its wrapper element and before
/// the wrapper is attached to the surface.
pub trait HtmlRenderingHook: Send + Sync + Debug {
    /// Adjust `element`, or return a replacement node to attach instead.
    fn post_render(&self, item: &OutputItem, doc: &mut Document, element: NodeId)
    -> Option<NodeId>;
}

/// Runs before script text is wrapped into a script node.
pub trait JavaScriptRenderingHook: Send + Sync + Debug {
    /// Return replacement script text, or `None` to keep `script`.
    fn pre_evaluate(&self, item: &OutputItem, script: &str) -> Option<String>;
}

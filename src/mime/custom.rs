//! Custom renderer support for additional mime types.
//!
//! This module allows hosts to render mime types the built-in renderers do
//! not know about without modifying the core library.

use std::sync::Arc;

use crate::error::RenderError;
use crate::item::OutputItem;
use crate::lifecycle::Disposer;
use crate::surface::RenderSurface;

/// Type alias for a custom render function.
///
/// Returns a disposer when the renderer allocated a resource that must be
/// released together with the output.
pub type RenderFn = Arc<
    dyn Fn(&OutputItem, &mut RenderSurface<'_>) -> Result<Option<Disposer>, RenderError>
        + Send
        + Sync,
>;

/// A custom renderer that can be registered with the RendererRegistry.
///
/// # Example
///
/// ```rust,ignore
/// use outrender::mime::CustomRenderer;
///
/// let markdown = CustomRenderer::new("markdown", &["text/markdown"])
///     .trusted_only()
///     .with_render(|item, surface| {
///         let doc = surface.document_mut();
///         let node = doc.create_text(item.text());
///         surface.append(node);
///         Ok(None)
///     });
///
/// registry.register_custom(markdown);
/// ```
#[derive(Clone)]
pub struct CustomRenderer {
    /// Unique name for this renderer
    pub name: &'static str,
    /// Mime strings this renderer claims
    pub mimes: &'static [&'static str],
    /// Only render when the workspace is trusted
    pub requires_trust: bool,
    /// Render function
    pub render_fn: Option<RenderFn>,
}

impl std::fmt::Debug for CustomRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomRenderer")
            .field("name", &self.name)
            .field("mimes", &self.mimes)
            .field("requires_trust", &self.requires_trust)
            .field("has_render", &self.render_fn.is_some())
            .finish()
    }
}

impl CustomRenderer {
    /// Create a new custom renderer with the given name and mime strings.
    pub fn new(name: &'static str, mimes: &'static [&'static str]) -> Self {
        Self {
            name,
            mimes,
            requires_trust: false,
            render_fn: None,
        }
    }

    /// Gate this renderer on workspace trust.
    pub fn trusted_only(mut self) -> Self {
        self.requires_trust = true;
        self
    }

    /// Set the render function.
    pub fn with_render<F>(mut self, f: F) -> Self
    where
        F: Fn(&OutputItem, &mut RenderSurface<'_>) -> Result<Option<Disposer>, RenderError>
            + Send
            + Sync
            + 'static,
    {
        self.render_fn = Some(Arc::new(f));
        self
    }

    /// Render `item` into `surface`.
    pub fn render(
        &self,
        item: &OutputItem,
        surface: &mut RenderSurface<'_>,
    ) -> Result<Option<Disposer>, RenderError> {
        let render_fn = self.render_fn.as_ref().ok_or_else(|| {
            RenderError::Custom(Box::new(std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                format!("Custom renderer '{}' has no render function", self.name),
            )))
        })?;
        render_fn(item, surface)
    }

    /// Check if this renderer claims the given mime.
    pub fn matches_mime(&self, mime: &str) -> bool {
        self.mimes.contains(&mime)
    }
}

//! The activated renderer: mime dispatch, trust gating and disposal.

use std::sync::Arc;

use crate::config::RendererConfig;
use crate::error::{RenderError, SingleRenderError};
use crate::host::{AnsiFormatter, MarkupParser, ObjectUrlStore, RendererContext, TruncationFormatter};
use crate::item::OutputItem;
use crate::lifecycle::LifecycleRegistry;
use crate::mime::{MimeKind, RendererRegistry};
use crate::render::{
    HtmlRenderingHook, JavaScriptRenderingHook, StreamRender, render_error, render_html,
    render_image, render_javascript, render_stream, render_text,
};
use crate::surface::RenderSurface;
use crate::trust::TrustedContentGate;

/// Why an output was not rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No renderer handles the output's mime
    UnsupportedMime,
    /// The mime needs a trusted workspace and the workspace is not trusted
    Untrusted,
    /// A stream chunk arrived on a surface without a container
    Detached,
}

/// What a render call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The output was rendered into its own surface by the given kind
    Rendered(MimeKind),
    /// The stream chunk was appended to the previous output's block
    Coalesced,
    /// Nothing was rendered
    Skipped(SkipReason),
}

/// An activated renderer.
///
/// Owns the lifecycle registry of one activation; resources registered here
/// are released through [`Renderer::dispose_output_item`], and whatever is
/// still held when the renderer is dropped is released then.
pub struct Renderer {
    pub(crate) context: Arc<dyn RendererContext>,
    pub(crate) gate: Arc<TrustedContentGate>,
    pub(crate) registry: RendererRegistry,
    pub(crate) lifecycle: LifecycleRegistry,
    pub(crate) ansi: Arc<dyn AnsiFormatter>,
    pub(crate) truncation: Arc<dyn TruncationFormatter>,
    pub(crate) markup: Arc<dyn MarkupParser>,
    pub(crate) object_urls: Arc<dyn ObjectUrlStore>,
    pub(crate) html_hooks: Vec<Arc<dyn HtmlRenderingHook>>,
    pub(crate) script_hooks: Vec<Arc<dyn JavaScriptRenderingHook>>,
    pub(crate) config: RendererConfig,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("registry", &self.registry)
            .field("held_resources", &self.lifecycle.len())
            .field("sanitizing", &self.gate.is_sanitizing())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Renderer {
    /// Render one output into `surface`.
    ///
    /// Never fails: unsupported mimes, untrusted content and detached
    /// surfaces are silent no-ops, and renderer errors are logged and leave
    /// the surface as it was before the failing step.
    pub fn render_output_item(&mut self, item: &OutputItem, surface: &mut RenderSurface<'_>) {
        if let Err(e) = self.try_render_output_item(item, surface) {
            log::warn!("{e}");
        }
    }

    /// Render one output and report what happened.
    pub fn try_render_output_item(
        &mut self,
        item: &OutputItem,
        surface: &mut RenderSurface<'_>,
    ) -> Result<RenderOutcome, SingleRenderError> {
        let Some(kind) = self.registry.resolve(item.mime()) else {
            log::trace!("no renderer for output {} ({})", item.id(), item.mime());
            surface.break_stream();
            return Ok(RenderOutcome::Skipped(SkipReason::UnsupportedMime));
        };

        if !kind.is_stream() {
            surface.break_stream();
        }

        if self.requires_trust(kind) && !self.context.is_workspace_trusted() {
            log::debug!(
                "workspace not trusted; skipping output {} ({})",
                item.id(),
                item.mime()
            );
            return Ok(RenderOutcome::Skipped(SkipReason::Untrusted));
        }

        log::debug!("rendering output {} as {}", item.id(), kind);
        self.dispatch(kind, item, surface)
            .map_err(|e| SingleRenderError::new(item.id(), item.mime(), e))
    }

    fn requires_trust(&self, kind: MimeKind) -> bool {
        match kind {
            MimeKind::Custom(name) => self
                .registry
                .get_custom(name)
                .is_some_and(|r| r.requires_trust),
            builtin => builtin.is_trust_gated(),
        }
    }

    fn dispatch(
        &mut self,
        kind: MimeKind,
        item: &OutputItem,
        surface: &mut RenderSurface<'_>,
    ) -> Result<RenderOutcome, RenderError> {
        match kind {
            MimeKind::Html | MimeKind::Svg => render_html(
                item,
                surface,
                &self.gate,
                self.markup.as_ref(),
                &self.html_hooks,
            )?,
            MimeKind::Javascript => {
                render_javascript(item, surface, &self.gate, &self.script_hooks)?
            }
            MimeKind::Gif | MimeKind::Png | MimeKind::Jpeg => {
                let disposer = render_image(item, surface, &self.object_urls)?;
                self.lifecycle.register(item.id(), disposer);
            }
            MimeKind::Error => render_error(item, surface, self.ansi.as_ref())?,
            MimeKind::Stdout | MimeKind::Stderr => {
                let rendered = render_stream(
                    item,
                    surface,
                    kind == MimeKind::Stderr,
                    self.truncation.as_ref(),
                    self.config.line_limit,
                );
                return Ok(match rendered {
                    StreamRender::NewBlock => RenderOutcome::Rendered(kind),
                    StreamRender::Continued => RenderOutcome::Coalesced,
                    StreamRender::Detached => RenderOutcome::Skipped(SkipReason::Detached),
                });
            }
            MimeKind::PlainText => render_text(
                item,
                surface,
                self.truncation.as_ref(),
                self.config.line_limit,
            ),
            MimeKind::Custom(name) => {
                let Some(renderer) = self.registry.get_custom(name) else {
                    return Ok(RenderOutcome::Skipped(SkipReason::UnsupportedMime));
                };
                if let Some(disposer) = renderer.render(item, surface)? {
                    self.lifecycle.register(item.id(), disposer);
                }
            }
        }
        Ok(RenderOutcome::Rendered(kind))
    }

    /// Release resources held for outputs.
    ///
    /// `Some(id)` releases the one output's resources, `None` releases
    /// everything this renderer holds. Unknown ids are ignored.
    pub fn dispose_output_item(&mut self, id: Option<&str>) {
        match id {
            Some(id) => {
                if self.lifecycle.dispose_one(id) {
                    log::debug!("disposed output {id}");
                }
            }
            None => {
                let released = self.lifecycle.dispose_all();
                log::debug!("disposed {released} output(s)");
            }
        }
    }

    /// Number of outputs currently holding a resource.
    pub fn held_resources(&self) -> usize {
        self.lifecycle.len()
    }

    /// Check whether `id` currently holds a resource.
    pub fn is_holding(&self, id: &str) -> bool {
        self.lifecycle.contains(id)
    }

    /// Get the renderer registry.
    pub fn registry(&self) -> &RendererRegistry {
        &self.registry
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// The gate shared with other activations.
    pub fn gate(&self) -> &Arc<TrustedContentGate> {
        &self.gate
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        self.lifecycle.dispose_all();
    }
}

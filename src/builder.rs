//! Builder for activating a Renderer.

use std::sync::Arc;

use crate::config::RendererConfig;
use crate::dispatch::Renderer;
use crate::host::{
    AnsiFormatter, ElidingTruncation, InMemoryObjectStore, MarkupParser, ObjectUrlStore,
    RendererContext, StripAnsiFormatter, TruncationFormatter, XmlMarkupParser,
};
use crate::lifecycle::LifecycleRegistry;
use crate::mime::{CustomRenderer, RendererRegistry, default_registry};
use crate::render::{HtmlRenderingHook, JavaScriptRenderingHook};
use crate::trust::TrustedContentGate;

/// Wires host collaborators into a [`Renderer`].
///
/// Every collaborator has a default, so `RendererBuilder::new(context).build()`
/// is a working renderer. Each `build` starts a fresh, empty lifecycle
/// registry; collaborators behind `Arc` may be shared between builds.
pub struct RendererBuilder {
    context: Arc<dyn RendererContext>,
    gate: Option<Arc<TrustedContentGate>>,
    registry: RendererRegistry,
    ansi: Arc<dyn AnsiFormatter>,
    truncation: Arc<dyn TruncationFormatter>,
    markup: Arc<dyn MarkupParser>,
    object_urls: Arc<dyn ObjectUrlStore>,
    html_hooks: Vec<Arc<dyn HtmlRenderingHook>>,
    script_hooks: Vec<Arc<dyn JavaScriptRenderingHook>>,
    config: RendererConfig,
}

impl RendererBuilder {
    pub fn new(context: Arc<dyn RendererContext>) -> Self {
        Self {
            context,
            gate: None,
            registry: default_registry(),
            ansi: Arc::new(StripAnsiFormatter),
            truncation: Arc::new(ElidingTruncation::default()),
            markup: Arc::new(XmlMarkupParser),
            object_urls: Arc::new(InMemoryObjectStore::new()),
            html_hooks: Vec::new(),
            script_hooks: Vec::new(),
            config: RendererConfig::default(),
        }
    }

    /// Use the process-wide content gate.
    ///
    /// Without one, the renderer gets a passthrough gate.
    pub fn with_gate(mut self, gate: Arc<TrustedContentGate>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn with_registry(mut self, registry: RendererRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_custom_renderer(mut self, renderer: CustomRenderer) -> Self {
        self.registry.register_custom(renderer);
        self
    }

    pub fn with_ansi_formatter(mut self, ansi: Arc<dyn AnsiFormatter>) -> Self {
        self.ansi = ansi;
        self
    }

    pub fn with_truncation(mut self, truncation: Arc<dyn TruncationFormatter>) -> Self {
        self.truncation = truncation;
        self
    }

    pub fn with_markup_parser(mut self, markup: Arc<dyn MarkupParser>) -> Self {
        self.markup = markup;
        self
    }

    pub fn with_object_urls(mut self, object_urls: Arc<dyn ObjectUrlStore>) -> Self {
        self.object_urls = object_urls;
        self
    }

    pub fn add_html_hook(mut self, hook: Arc<dyn HtmlRenderingHook>) -> Self {
        self.html_hooks.push(hook);
        self
    }

    pub fn add_script_hook(mut self, hook: Arc<dyn JavaScriptRenderingHook>) -> Self {
        self.script_hooks.push(hook);
        self
    }

    pub fn with_config(mut self, config: RendererConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Renderer {
        let gate = self
            .gate
            .unwrap_or_else(|| Arc::new(TrustedContentGate::passthrough()));

        Renderer {
            context: self.context,
            gate,
            registry: self.registry,
            lifecycle: LifecycleRegistry::new(),
            ansi: self.ansi,
            truncation: self.truncation,
            markup: self.markup,
            object_urls: self.object_urls,
            html_hooks: self.html_hooks,
            script_hooks: self.script_hooks,
            config: self.config,
        }
    }
}

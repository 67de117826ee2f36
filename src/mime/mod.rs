//! Mime classification and renderer selection.
//!
//! This module provides:
//! - `MimeKind`: Enum of the mime families the renderer knows
//! - `RendererRegistry`: Registry of enabled kinds and custom renderers
//! - `CustomRenderer`: Support for host-defined renderers

mod custom;
pub use custom::{CustomRenderer, RenderFn};

/// `text/html`
pub const HTML: &str = "text/html";
/// `image/svg+xml`
pub const SVG: &str = "image/svg+xml";
/// `application/javascript`
pub const JAVASCRIPT: &str = "application/javascript";
/// `image/gif`
pub const GIF: &str = "image/gif";
/// `image/png`
pub const PNG: &str = "image/png";
/// `image/jpeg`
pub const JPEG: &str = "image/jpeg";
/// Structured error record
pub const ERROR: &str = "application/vnd.code.notebook.error";
/// Standard output stream
pub const STDOUT: &str = "application/vnd.code.notebook.stdout";
/// Standard error stream
pub const STDERR: &str = "application/vnd.code.notebook.stderr";
/// `text/plain`
pub const PLAIN_TEXT: &str = "text/plain";

// Older producers tag outputs with these.
const LEGACY_GIF: &str = "image/git";
const LEGACY_STDOUT: &str = "application/x.notebook.stdout";
const LEGACY_STREAM: &str = "application/x.notebook.stream";
const LEGACY_STDERR: &str = "application/x.notebook.stderr";

/// The mime families the renderer can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MimeKind {
    Html,
    Svg,
    Javascript,
    Gif,
    Png,
    Jpeg,
    /// Structured `{name, message, stack}` error record
    Error,
    Stdout,
    Stderr,
    PlainText,
    /// A host-registered renderer with a unique name
    Custom(&'static str),
}

impl std::fmt::Display for MimeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MimeKind::Html => write!(f, "html"),
            MimeKind::Svg => write!(f, "svg"),
            MimeKind::Javascript => write!(f, "javascript"),
            MimeKind::Gif => write!(f, "gif"),
            MimeKind::Png => write!(f, "png"),
            MimeKind::Jpeg => write!(f, "jpeg"),
            MimeKind::Error => write!(f, "error"),
            MimeKind::Stdout => write!(f, "stdout"),
            MimeKind::Stderr => write!(f, "stderr"),
            MimeKind::PlainText => write!(f, "plaintext"),
            MimeKind::Custom(name) => write!(f, "{}", name),
        }
    }
}

impl MimeKind {
    /// Every built-in kind.
    pub const BUILTIN: [MimeKind; 10] = [
        MimeKind::Html,
        MimeKind::Svg,
        MimeKind::Javascript,
        MimeKind::Gif,
        MimeKind::Png,
        MimeKind::Jpeg,
        MimeKind::Error,
        MimeKind::Stdout,
        MimeKind::Stderr,
        MimeKind::PlainText,
    ];

    /// Classify a mime string. Matching is exact; legacy spellings are
    /// accepted.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            HTML => Some(MimeKind::Html),
            SVG => Some(MimeKind::Svg),
            JAVASCRIPT => Some(MimeKind::Javascript),
            GIF | LEGACY_GIF => Some(MimeKind::Gif),
            PNG => Some(MimeKind::Png),
            JPEG => Some(MimeKind::Jpeg),
            ERROR => Some(MimeKind::Error),
            STDOUT | LEGACY_STDOUT | LEGACY_STREAM => Some(MimeKind::Stdout),
            STDERR | LEGACY_STDERR => Some(MimeKind::Stderr),
            PLAIN_TEXT => Some(MimeKind::PlainText),
            _ => None,
        }
    }

    /// The mime string new producers should use for this kind.
    /// Note: For custom kinds, this returns `None`.
    pub fn canonical_mime(&self) -> Option<&'static str> {
        match self {
            MimeKind::Html => Some(HTML),
            MimeKind::Svg => Some(SVG),
            MimeKind::Javascript => Some(JAVASCRIPT),
            MimeKind::Gif => Some(GIF),
            MimeKind::Png => Some(PNG),
            MimeKind::Jpeg => Some(JPEG),
            MimeKind::Error => Some(ERROR),
            MimeKind::Stdout => Some(STDOUT),
            MimeKind::Stderr => Some(STDERR),
            MimeKind::PlainText => Some(PLAIN_TEXT),
            MimeKind::Custom(_) => None,
        }
    }

    /// Every mime string accepted for this kind, canonical first.
    /// Note: For custom kinds, this returns an empty slice.
    /// Use RendererRegistry to get mimes for custom renderers.
    pub fn accepted_mimes(&self) -> &'static [&'static str] {
        match self {
            MimeKind::Html => &[HTML],
            MimeKind::Svg => &[SVG],
            MimeKind::Javascript => &[JAVASCRIPT],
            MimeKind::Gif => &[GIF, LEGACY_GIF],
            MimeKind::Png => &[PNG],
            MimeKind::Jpeg => &[JPEG],
            MimeKind::Error => &[ERROR],
            MimeKind::Stdout => &[STDOUT, LEGACY_STDOUT, LEGACY_STREAM],
            MimeKind::Stderr => &[STDERR, LEGACY_STDERR],
            MimeKind::PlainText => &[PLAIN_TEXT],
            MimeKind::Custom(_) => &[],
        }
    }

    /// Kinds that can execute code or inject live markup. They only render
    /// in a trusted workspace.
    pub fn is_trust_gated(&self) -> bool {
        matches!(self, MimeKind::Html | MimeKind::Svg | MimeKind::Javascript)
    }

    pub fn is_stream(&self) -> bool {
        matches!(self, MimeKind::Stdout | MimeKind::Stderr)
    }
}

/// Registry of the kinds an activation renders, including custom renderers.
#[derive(Debug, Clone, Default)]
pub struct RendererRegistry {
    /// Enabled built-in kinds
    kinds: Vec<MimeKind>,
    /// Custom renderers
    custom_renderers: Vec<CustomRenderer>,
}

impl RendererRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            kinds: Vec::new(),
            custom_renderers: Vec::new(),
        }
    }

    /// Enable a built-in kind.
    pub fn register(&mut self, kind: MimeKind) {
        if !self.kinds.contains(&kind) {
            self.kinds.push(kind);
        }
    }

    /// Enable a built-in kind (builder pattern).
    pub fn with_kind(mut self, kind: MimeKind) -> Self {
        self.register(kind);
        self
    }

    /// Register a custom renderer.
    ///
    /// A renderer registered under a name already in use replaces the
    /// earlier one.
    pub fn register_custom(&mut self, renderer: CustomRenderer) {
        let kind = MimeKind::Custom(renderer.name);
        if !self.kinds.contains(&kind) {
            self.kinds.push(kind);
        }
        self.custom_renderers.retain(|r| r.name != renderer.name);
        self.custom_renderers.push(renderer);
    }

    /// Register a custom renderer (builder pattern).
    pub fn with_custom_renderer(mut self, renderer: CustomRenderer) -> Self {
        self.register_custom(renderer);
        self
    }

    /// Check if a kind is enabled.
    pub fn has_kind(&self, kind: &MimeKind) -> bool {
        self.kinds.contains(kind)
    }

    /// Get the custom renderer registered under `name`.
    pub fn get_custom(&self, name: &str) -> Option<&CustomRenderer> {
        self.custom_renderers.iter().find(|r| r.name == name)
    }

    /// Pick the kind that renders `mime`.
    ///
    /// Enabled built-in kinds win; custom renderers are consulted for
    /// anything else. `None` means the output is not rendered.
    pub fn resolve(&self, mime: &str) -> Option<MimeKind> {
        if let Some(kind) = MimeKind::from_mime(mime) {
            if self.has_kind(&kind) {
                return Some(kind);
            }
        }

        self.custom_renderers
            .iter()
            .find(|r| r.matches_mime(mime))
            .map(|r| MimeKind::Custom(r.name))
    }

    /// Get all enabled kinds.
    pub fn kinds(&self) -> &[MimeKind] {
        &self.kinds
    }

    /// Get all registered custom renderers.
    pub fn custom_renderers(&self) -> &[CustomRenderer] {
        &self.custom_renderers
    }
}

/// Create a default registry with every built-in kind enabled.
pub fn default_registry() -> RendererRegistry {
    let mut registry = RendererRegistry::new();
    for kind in MimeKind::BUILTIN {
        registry.register(kind);
    }
    registry
}

//! # outrender
//!
//! Trust-gated rendering of notebook execution outputs.
//!
//! ## Overview
//!
//! outrender provides:
//! - **Mime dispatch**: Each output is routed to the renderer for its mime,
//!   including legacy mime spellings older producers still emit
//! - **Trust gating**: Markup and script outputs only render in a trusted
//!   workspace, and everything injected passes through one content gate
//! - **Script revival**: Scripts inside injected markup are rebuilt as fresh
//!   executable nodes
//! - **Stream coalescing**: Consecutive chunks of the same stream share one
//!   block
//! - **Resource lifecycle**: Resources allocated for an output (image URLs)
//!   are released per output or all at once
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use outrender::{Document, OutputContainer, OutputItem, RenderSurface, TrustFlag};
//!
//! let mut renderer = outrender::activate(Arc::new(TrustFlag::trusted()));
//!
//! let mut doc = Document::new();
//! let mut cell = OutputContainer::new();
//! let slot = doc.create_element("div");
//!
//! let item = OutputItem::from_text("out-1", "text/plain", "hello");
//! renderer.render_output_item(&item, &mut RenderSurface::new(&mut doc, slot, &mut cell));
//!
//! // Output removed from the cell
//! renderer.dispose_output_item(Some("out-1"));
//! // Session torn down
//! renderer.dispose_output_item(None);
//! ```
//!
//! ## Features
//!
//! - `yaml` - Load `RendererConfig` from YAML
//! - `miette` - Pretty error reporting with miette

// Core modules
pub mod builder;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod host;
pub mod item;
pub mod lifecycle;
pub mod mime;
pub mod render;
pub mod surface;
pub mod trust;

use std::sync::Arc;

// Re-exports for convenience
pub use builder::RendererBuilder;
pub use config::RendererConfig;
pub use dispatch::{RenderOutcome, Renderer, SkipReason};
pub use error::{RenderError, SingleRenderError, Stage};
pub use host::{
    AnsiFormatter, ElidingTruncation, InMemoryObjectStore, MarkupParser, ObjectUrlStore,
    RendererContext, StripAnsiFormatter, TruncationFormatter, TrustFlag, XmlMarkupParser,
};
pub use item::OutputItem;
pub use lifecycle::{Disposer, LifecycleRegistry};
pub use mime::{CustomRenderer, MimeKind, RendererRegistry, default_registry};
pub use surface::{Document, Fragment, NodeId, OutputContainer, RenderSurface};
pub use trust::{SanitizationPolicy, TrustedContentGate};

/// Activate a renderer with default collaborators.
///
/// Each activation owns a fresh, empty lifecycle registry.
pub fn activate(context: Arc<dyn RendererContext>) -> Renderer {
    RendererBuilder::new(context).build()
}

/// Activate a renderer, allowing the caller to customize the
/// RendererBuilder before it is built. This is the hook point for a shared
/// content gate, custom renderers or host collaborators.
pub fn activate_with<F>(context: Arc<dyn RendererContext>, customize: F) -> Renderer
where
    F: FnOnce(RendererBuilder) -> RendererBuilder,
{
    customize(RendererBuilder::new(context)).build()
}

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::RenderDiagnostic;

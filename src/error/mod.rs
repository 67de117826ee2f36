//! Error types for rendering operations.
//!
//! This module provides:
//! - `RenderError`: What went wrong inside a renderer
//! - `Stage`: Indicates where in the render call the error occurred
//! - `SingleRenderError`: A render error with the output it belongs to
//!
//! None of these ever escape `Renderer::render_output_item`; they are logged
//! there and the render call is abandoned.

use std::fmt;

use thiserror::Error;

use crate::host::{MarkupError, ObjectUrlError};

/// Errors raised by a single renderer.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A structured payload could not be decoded
    #[error("malformed payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),

    /// Markup could not be parsed
    #[error(transparent)]
    Markup(#[from] MarkupError),

    /// A binary-object URL could not be allocated
    #[error(transparent)]
    ObjectUrl(#[from] ObjectUrlError),

    /// A custom renderer failed
    #[error("custom renderer failed: {0}")]
    Custom(Box<dyn std::error::Error + Send + Sync>),
}

impl RenderError {
    /// The stage this kind of error belongs to.
    pub fn stage(&self) -> Stage {
        match self {
            RenderError::MalformedPayload(_) => Stage::Decode,
            RenderError::Markup(_) => Stage::Parse,
            RenderError::ObjectUrl(_) => Stage::Allocate,
            RenderError::Custom(_) => Stage::Render,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Decoding the payload's text into a structured record
    Decode,
    /// Parsing markup into nodes
    Parse,
    /// Allocating a host resource for the output
    Allocate,
    Render,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Decode => write!(f, "Decode"),
            Stage::Parse => write!(f, "Parse"),
            Stage::Allocate => write!(f, "Allocate"),
            Stage::Render => write!(f, "Render"),
        }
    }
}

#[derive(Debug)]
pub struct SingleRenderError {
    /// Stage where the error occurred
    pub stage: Stage,
    /// Identity of the output being rendered
    pub output_id: String,
    /// Mime of the output being rendered
    pub mime: String,
    /// The underlying error
    pub error: RenderError,
}

impl SingleRenderError {
    /// Attach output context to a renderer error.
    pub fn new(output_id: impl Into<String>, mime: impl Into<String>, error: RenderError) -> Self {
        Self {
            stage: error.stage(),
            output_id: output_id.into(),
            mime: mime.into(),
            error,
        }
    }
}

impl fmt::Display for SingleRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}): {}",
            self.stage, self.output_id, self.mime, self.error
        )
    }
}

impl std::error::Error for SingleRenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;

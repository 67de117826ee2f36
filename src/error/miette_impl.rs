//! Miette integration for pretty error reporting.

use miette::Diagnostic;
use thiserror::Error;

use super::{RenderError, SingleRenderError, Stage};

/// A diagnostic wrapper for render errors compatible with miette.
///
/// Render failures are contained to one output, so every diagnostic is a
/// warning.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(severity(Warning))]
pub struct RenderDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,
}

fn help_for(stage: Stage) -> &'static str {
    match stage {
        Stage::Decode => "The output's text is not a JSON error record with name/message/stack",
        Stage::Parse => "The output's markup could not be tokenized",
        Stage::Allocate => "The host refused to allocate a URL for the output's bytes",
        Stage::Render => "A registered custom renderer reported a failure",
    }
}

impl From<SingleRenderError> for RenderDiagnostic {
    fn from(e: SingleRenderError) -> Self {
        let source: Box<dyn std::error::Error + Send + Sync> = match e.error {
            RenderError::Custom(inner) => inner,
            other => Box::new(other),
        };
        RenderDiagnostic {
            message: format!("[{}] rendering '{}' as {}", e.stage, e.output_id, e.mime),
            source: Some(source),
            help: Some(help_for(e.stage).into()),
        }
    }
}

impl From<SingleRenderError> for miette::Report {
    fn from(e: SingleRenderError) -> Self {
        miette::Report::new(RenderDiagnostic::from(e))
    }
}

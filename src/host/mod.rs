//! Host collaborator interfaces.
//!
//! This module provides:
//! - `RendererContext`: Trait the renderer reads workspace trust from
//! - `AnsiFormatter`: Trait turning ANSI-coloured text into a fragment
//! - `TruncationFormatter`: Trait appending line-limited text into a node
//! - `MarkupParser`: Trait parsing markup text into inert fragments
//! - `ObjectUrlStore`: Trait allocating and revoking binary-object URLs
//! - Default implementations of each, used by `activate` and in tests

mod ansi;
mod context;
mod markup;
mod object_url;
mod truncate;

pub use ansi::{AnsiFormatter, StripAnsiFormatter};
pub use context::{RendererContext, TrustFlag};
pub use markup::{MarkupError, MarkupParser, XmlMarkupParser};
pub use object_url::{InMemoryObjectStore, ObjectUrlError, ObjectUrlStore};
pub use truncate::{ELISION_CLASS, ElidingTruncation, TruncationFormatter};

//! ANSI formatter trait definition.

use std::fmt::Debug;

use ansi_str::AnsiStr;

use crate::surface::Fragment;

/// Converts text that may contain ANSI escape sequences into a fragment.
///
/// Implementations must be pure and must not panic on malformed escape
/// sequences.
pub trait AnsiFormatter: Send + Sync + Debug {
    fn format(&self, text: &str) -> Fragment;
}

/// Drops escape sequences and keeps the plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct StripAnsiFormatter;

impl AnsiFormatter for StripAnsiFormatter {
    fn format(&self, text: &str) -> Fragment {
        Fragment::text(text.ansi_strip().into_owned())
    }
}

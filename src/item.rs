//! Output payloads handed to the renderer.

use std::borrow::Cow;

/// One mime-tagged unit of execution output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputItem {
    id: String,
    mime: String,
    data: Vec<u8>,
}

impl OutputItem {
    /// Create an output item from raw bytes.
    pub fn new(id: impl Into<String>, mime: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            mime: mime.into(),
            data: data.into(),
        }
    }

    /// Create an output item from text.
    pub fn from_text(id: impl Into<String>, mime: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(id, mime, text.into().into_bytes())
    }

    /// Identity of this output, unique per output instance.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Raw bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The bytes decoded as UTF-8. Invalid sequences are replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }
}

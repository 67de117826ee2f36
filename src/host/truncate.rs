//! Truncation formatter trait definition.

use std::fmt::Debug;

use crate::surface::{Document, NodeId};

/// Class of the marker node standing in for elided lines.
pub const ELISION_CLASS: &str = "output-truncated";

/// Appends a possibly elided rendering of some text into a node.
pub trait TruncationFormatter: Send + Sync + Debug {
    /// Append `texts` (concatenated) into `target`, showing at most
    /// `max_lines` lines.
    fn append_lines(&self, doc: &mut Document, target: NodeId, texts: &[&str], max_lines: usize);
}

/// Keeps the head and the tail of long text and replaces the middle with a
/// marker. A `max_lines` of zero disables the limit.
#[derive(Debug, Clone, Copy)]
pub struct ElidingTruncation {
    /// Lines kept from the end of the text when eliding
    pub tail_lines: usize,
}

impl Default for ElidingTruncation {
    fn default() -> Self {
        Self { tail_lines: 5 }
    }
}

impl TruncationFormatter for ElidingTruncation {
    fn append_lines(&self, doc: &mut Document, target: NodeId, texts: &[&str], max_lines: usize) {
        let joined = texts.concat();
        let lines: Vec<&str> = joined.lines().collect();

        if max_lines == 0 || lines.len() <= max_lines {
            let text = doc.create_text(joined.as_str());
            doc.append_child(target, text);
            return;
        }

        let tail = self.tail_lines.min(max_lines / 2);
        let head = max_lines - tail;
        let elided = lines.len() - head - tail;

        let mut head_text = lines[..head].join("\n");
        head_text.push('\n');
        let head_node = doc.create_text(head_text);
        doc.append_child(target, head_node);

        let marker = doc.create_element("span");
        doc.add_class(marker, ELISION_CLASS);
        let marker_text = doc.create_text(format!("... {elided} lines elided ...\n"));
        doc.append_child(marker, marker_text);
        doc.append_child(target, marker);

        if tail > 0 {
            let tail_node = doc.create_text(lines[lines.len() - tail..].join("\n"));
            doc.append_child(target, tail_node);
        }
    }
}

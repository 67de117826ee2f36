//! Markup parser trait definition.

use std::fmt::{Debug, Display};

use quick_xml::Reader;
use quick_xml::escape::{resolve_html5_entity, unescape_with};
use quick_xml::events::{BytesRef, BytesStart, Event};
use thiserror::Error;

use crate::surface::{Element, Fragment, ScriptNode};

/// Errors that can occur while parsing markup.
#[derive(Debug, Error)]
pub enum MarkupError {
    /// The markup could not be tokenized
    #[error("malformed markup: {0}")]
    Syntax(String),
}

fn syntax(e: impl Display) -> MarkupError {
    MarkupError::Syntax(e.to_string())
}

/// Turns markup text into detached fragments.
///
/// This is the host's "inner HTML" operation: scripts found in the markup
/// must come back as inert [`ScriptNode`]s, never executable ones.
pub trait MarkupParser: Send + Sync + Debug {
    fn parse(&self, markup: &str) -> Result<Vec<Fragment>, MarkupError>;
}

/// Elements that never have children or an end tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// A lenient markup parser on top of `quick-xml`.
///
/// Accepts HTML void elements, unquoted and valueless attributes, stray end
/// tags and unclosed elements. Entity and character references are
/// resolved in text and attribute values; script bodies are taken verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlMarkupParser;

type OpenElement = (Element, Vec<Fragment>);

impl MarkupParser for XmlMarkupParser {
    fn parse(&self, markup: &str) -> Result<Vec<Fragment>, MarkupError> {
        let mut reader = Reader::from_str(markup);
        reader.config_mut().check_end_names = false;

        let mut open: Vec<OpenElement> = Vec::new();
        let mut roots = Vec::new();

        loop {
            match reader.read_event().map_err(syntax)? {
                Event::Start(start) => {
                    let element = element_from(&start)?;
                    if element.tag == "script" {
                        let body = reader.read_text(start.name()).map_err(syntax)?;
                        let script = script_from(element, body.into_owned());
                        attach(&mut open, &mut roots, Fragment::Script(script));
                    } else if VOID_ELEMENTS.contains(&element.tag.as_str()) {
                        attach(&mut open, &mut roots, Fragment::element(element, Vec::new()));
                    } else {
                        open.push((element, Vec::new()));
                    }
                }
                Event::Empty(start) => {
                    let element = element_from(&start)?;
                    let fragment = if element.tag == "script" {
                        Fragment::Script(script_from(element, String::new()))
                    } else {
                        Fragment::element(element, Vec::new())
                    };
                    attach(&mut open, &mut roots, fragment);
                }
                Event::End(end) => {
                    let tag = String::from_utf8_lossy(end.name().as_ref()).to_ascii_lowercase();
                    // Stray end tags are dropped; a matching one closes
                    // everything opened after it.
                    if let Some(depth) = open.iter().rposition(|(el, _)| el.tag == tag) {
                        close_to(depth, &mut open, &mut roots);
                    }
                }
                Event::Text(text) => {
                    attach_text(&mut open, &mut roots, &String::from_utf8_lossy(&text));
                }
                Event::GeneralRef(reference) => {
                    attach_text(&mut open, &mut roots, &resolve_reference(&reference));
                }
                Event::CData(data) => {
                    attach_text(&mut open, &mut roots, &String::from_utf8_lossy(&data));
                }
                Event::Eof => break,
                _ => {}
            }
        }

        close_to(0, &mut open, &mut roots);
        Ok(roots)
    }
}

fn element_from(start: &BytesStart<'_>) -> Result<Element, MarkupError> {
    let tag = String::from_utf8_lossy(start.name().as_ref()).to_ascii_lowercase();
    let mut element = Element::new(tag);

    let mut attributes = start.html_attributes();
    attributes.with_checks(false);
    for attr in attributes {
        let attr = attr.map_err(syntax)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_ascii_lowercase();
        let raw = String::from_utf8_lossy(&attr.value);
        // Values with unknown or broken references are kept as written.
        let value = unescape_with(&raw, resolve_html5_entity)
            .map(|value| value.into_owned())
            .unwrap_or_else(|_| raw.to_string());
        if key == "class" {
            for class in value.split_whitespace() {
                element = element.with_class(class);
            }
        } else {
            element.attributes.insert(key, value);
        }
    }
    Ok(element)
}

fn script_from(element: Element, body: String) -> ScriptNode {
    ScriptNode {
        attributes: element.attributes,
        body,
        executable: false,
    }
}

/// Resolve an entity or character reference. Unknown names are kept as
/// written.
fn resolve_reference(reference: &BytesRef<'_>) -> String {
    if let Ok(Some(ch)) = reference.resolve_char_ref() {
        return ch.to_string();
    }
    let name = String::from_utf8_lossy(reference);
    match resolve_html5_entity(&name) {
        Some(resolved) => resolved.to_string(),
        None => format!("&{name};"),
    }
}

/// Append text, merging it into a directly preceding text node.
fn attach_text(open: &mut [OpenElement], roots: &mut Vec<Fragment>, text: &str) {
    if text.is_empty() {
        return;
    }
    let siblings = match open.last_mut() {
        Some((_, children)) => children,
        None => roots,
    };
    match siblings.last_mut() {
        Some(Fragment::Text(previous)) => previous.push_str(text),
        _ => siblings.push(Fragment::Text(text.to_string())),
    }
}

fn attach(open: &mut [OpenElement], roots: &mut Vec<Fragment>, fragment: Fragment) {
    match open.last_mut() {
        Some((_, children)) => children.push(fragment),
        None => roots.push(fragment),
    }
}

fn close_to(depth: usize, open: &mut Vec<OpenElement>, roots: &mut Vec<Fragment>) {
    while open.len() > depth {
        if let Some((element, children)) = open.pop() {
            attach(open, roots, Fragment::element(element, children));
        }
    }
}

//! Live markup and script rendering.

use std::sync::Arc;

use super::hooks::{HtmlRenderingHook, JavaScriptRenderingHook};
use crate::error::RenderError;
use crate::host::MarkupParser;
use crate::item::OutputItem;
use crate::mime::JAVASCRIPT;
use crate::surface::{RenderSurface, ScriptNode};
use crate::trust::{TrustedContentGate, revive_scripts};

/// Render `text/html` or `image/svg+xml`.
///
/// The markup is parsed before the surface is touched, so a parse failure
/// leaves the surface as it was.
pub fn render_html(
    item: &OutputItem,
    surface: &mut RenderSurface<'_>,
    gate: &TrustedContentGate,
    parser: &dyn MarkupParser,
    hooks: &[Arc<dyn HtmlRenderingHook>],
) -> Result<(), RenderError> {
    let text = item.text();
    let fragments = parser.parse(&gate.sanitize_markup(&text))?;

    surface.clear();
    let doc = surface.document_mut();
    let mut element = doc.create_element("div");
    for fragment in fragments {
        doc.insert_fragment(element, fragment);
    }
    for hook in hooks {
        if let Some(replacement) = hook.post_render(item, doc, element) {
            element = replacement;
        }
    }

    surface.append(element);
    revive_scripts(surface.document_mut(), element, gate);
    Ok(())
}

/// Render `application/javascript` by wrapping the text into a script node
/// and reviving it.
pub fn render_javascript(
    item: &OutputItem,
    surface: &mut RenderSurface<'_>,
    gate: &TrustedContentGate,
    hooks: &[Arc<dyn JavaScriptRenderingHook>],
) -> Result<(), RenderError> {
    let mut script = item.text().into_owned();
    for hook in hooks {
        if let Some(replacement) = hook.pre_evaluate(item, &script) {
            script = replacement;
        }
    }

    let doc = surface.document_mut();
    let element = doc.create_element("div");
    let inert = doc.create_script(ScriptNode::inert(script).with_attribute("type", JAVASCRIPT));
    doc.append_child(element, inert);

    surface.append(element);
    revive_scripts(surface.document_mut(), element, gate);
    Ok(())
}

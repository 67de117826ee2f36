//! Tests for trust-gated markup and script rendering.

use std::sync::Arc;

use crate::dispatch::{RenderOutcome, SkipReason};
use crate::error::Stage;
use crate::host::TrustFlag;
use crate::item::OutputItem;
use crate::mime::{HTML, JAVASCRIPT, MimeKind, SVG};
use crate::render::{HtmlRenderingHook, JavaScriptRenderingHook};
use crate::surface::{Document, NodeId, RenderSurface};
use crate::tests::support::{Cell, TaggingPolicy};
use crate::trust::TrustedContentGate;
use crate::{Renderer, RendererBuilder, activate};

fn trusted() -> Renderer {
    activate(Arc::new(TrustFlag::trusted()))
}

fn tags(doc: &Document, root: NodeId) -> Vec<String> {
    doc.descendants(root)
        .into_iter()
        .filter_map(|id| doc.element(id).map(|e| e.tag.clone()))
        .collect()
}

#[test]
fn untrusted_markup_is_not_rendered() {
    let mut renderer = activate(Arc::new(TrustFlag::untrusted()));

    for (mime, text) in [
        (HTML, "<p>hi</p>"),
        (SVG, "<svg/>"),
        (JAVASCRIPT, "alert(1)"),
    ] {
        let mut cell = Cell::new();
        let slot = cell.add_slot();
        let before = cell.doc.clone();

        let outcome = renderer
            .try_render_output_item(
                &OutputItem::from_text("o", mime, text),
                &mut cell.surface(slot),
            )
            .unwrap();

        assert_eq!(outcome, RenderOutcome::Skipped(SkipReason::Untrusted), "{mime}");
        assert_eq!(cell.doc, before, "{mime}");
    }
    assert_eq!(renderer.held_resources(), 0);
}

#[test]
fn trusted_html_runs_its_scripts() {
    let mut cell = Cell::new();
    let mut renderer = trusted();

    let (slot, outcome) = cell.render(
        &mut renderer,
        &OutputItem::from_text("o", HTML, "<p>hi</p><script>console.log(1)</script>"),
    );

    assert_eq!(outcome, RenderOutcome::Rendered(MimeKind::Html));
    let (inert, executable) = cell.scripts();
    assert!(inert.is_empty());
    assert_eq!(executable.len(), 1);
    assert_eq!(cell.doc.script(executable[0]).unwrap().body, "console.log(1)");
    assert!(cell.doc.text_content(slot).starts_with("hi"));
}

#[test]
fn svg_is_injected_like_html() {
    let mut cell = Cell::new();
    let mut renderer = trusted();

    let (slot, outcome) = cell.render(
        &mut renderer,
        &OutputItem::from_text("o", SVG, r#"<svg width="8"><circle r="4"/></svg>"#),
    );

    assert_eq!(outcome, RenderOutcome::Rendered(MimeKind::Svg));
    assert_eq!(tags(&cell.doc, slot), vec!["div", "svg", "circle"]);
}

#[test]
fn javascript_becomes_one_executable_script() {
    let mut cell = Cell::new();
    let mut renderer = trusted();

    let (_, outcome) = cell.render(
        &mut renderer,
        &OutputItem::from_text("o", JAVASCRIPT, "document.title = 'x'"),
    );

    assert_eq!(outcome, RenderOutcome::Rendered(MimeKind::Javascript));
    let (inert, executable) = cell.scripts();
    assert!(inert.is_empty());
    let [script] = executable[..] else {
        panic!("expected one executable script");
    };
    let script = cell.doc.script(script).unwrap();
    assert_eq!(script.body, "document.title = 'x'");
    assert_eq!(script.attributes.get("type").map(String::as_str), Some(JAVASCRIPT));
}

#[test]
fn trust_is_read_on_every_render() {
    let flag = Arc::new(TrustFlag::untrusted());
    let mut renderer = activate(flag.clone());
    let mut cell = Cell::new();
    let item = OutputItem::from_text("o", HTML, "<b>x</b>");

    let (_, outcome) = cell.render(&mut renderer, &item);
    assert_eq!(outcome, RenderOutcome::Skipped(SkipReason::Untrusted));

    flag.set(true);
    let (_, outcome) = cell.render(&mut renderer, &item);
    assert_eq!(outcome, RenderOutcome::Rendered(MimeKind::Html));

    flag.set(false);
    let (_, outcome) = cell.render(&mut renderer, &item);
    assert_eq!(outcome, RenderOutcome::Skipped(SkipReason::Untrusted));
}

#[test]
fn content_passes_through_the_gate_policy() {
    let gate = Arc::new(TrustedContentGate::new(Some(Box::new(TaggingPolicy))));
    let mut renderer = RendererBuilder::new(Arc::new(TrustFlag::trusted()))
        .with_gate(gate.clone())
        .build();
    let mut cell = Cell::new();

    let (slot, _) = cell.render(
        &mut renderer,
        &OutputItem::from_text("o", HTML, "<blink>hey</blink><script>go()</script>"),
    );
    cell.render(&mut renderer, &OutputItem::from_text("p", JAVASCRIPT, "run()"));

    assert!(!tags(&cell.doc, slot).contains(&"blink".to_string()));
    let (_, executable) = cell.scripts();
    let bodies: Vec<&str> = executable
        .iter()
        .filter_map(|id| cell.doc.script(*id))
        .map(|s| s.body.as_str())
        .collect();
    assert_eq!(bodies, vec!["/* trusted */ go()", "/* trusted */ run()"]);
    assert!(Arc::ptr_eq(renderer.gate(), &gate));
}

#[derive(Debug)]
struct FrameHook;

impl HtmlRenderingHook for FrameHook {
    fn post_render(&self, item: &OutputItem, doc: &mut Document, element: NodeId) -> Option<NodeId> {
        let frame = doc.create_element("section");
        doc.set_attribute(frame, "data-output", item.id());
        doc.append_child(frame, element);
        Some(frame)
    }
}

#[derive(Debug)]
struct StrictHook;

impl JavaScriptRenderingHook for StrictHook {
    fn pre_evaluate(&self, _item: &OutputItem, script: &str) -> Option<String> {
        Some(format!("'use strict'; {script}"))
    }
}

#[test]
fn hooks_adjust_markup_and_scripts() {
    let mut renderer = RendererBuilder::new(Arc::new(TrustFlag::trusted()))
        .add_html_hook(Arc::new(FrameHook))
        .add_script_hook(Arc::new(StrictHook))
        .build();
    let mut cell = Cell::new();

    let (slot, _) = cell.render(&mut renderer, &OutputItem::from_text("h", HTML, "<p>x</p>"));
    let frame = cell.doc.children(slot)[0];
    assert_eq!(cell.doc.attribute(frame, "data-output"), Some("h"));
    assert_eq!(tags(&cell.doc, slot), vec!["section", "div", "p"]);

    cell.render(&mut renderer, &OutputItem::from_text("j", JAVASCRIPT, "f()"));
    let (_, executable) = cell.scripts();
    assert_eq!(cell.doc.script(executable[0]).unwrap().body, "'use strict'; f()");
}

#[test]
fn html_replaces_what_the_output_showed_before() {
    let mut cell = Cell::new();
    let mut renderer = trusted();
    let slot = cell.add_slot();

    for text in ["<p>first</p>", "<p>second</p>"] {
        renderer
            .try_render_output_item(
                &OutputItem::from_text("o", HTML, text),
                &mut cell.surface(slot),
            )
            .unwrap();
    }

    assert_eq!(cell.doc.children(slot).len(), 1);
    assert_eq!(cell.doc.text_content(slot), "second");
}

#[test]
fn unparsable_markup_leaves_the_surface_untouched() {
    let mut cell = Cell::new();
    let mut renderer = trusted();
    let slot = cell.add_slot();
    let placeholder = cell.doc.create_text("previous");
    cell.doc.append_child(slot, placeholder);
    let before = cell.doc.clone();

    let err = renderer
        .try_render_output_item(
            &OutputItem::from_text("o", HTML, "<div"),
            &mut RenderSurface::new(&mut cell.doc, slot, &mut cell.container),
        )
        .unwrap_err();

    assert_eq!(err.stage, Stage::Parse);
    assert_eq!(cell.doc, before);
}

#[test]
fn html_entities_survive_injection() {
    let mut cell = Cell::new();
    let mut renderer = trusted();

    let (slot, _) = cell.render(
        &mut renderer,
        &OutputItem::from_text("o", HTML, "<p>Tom &amp; Jerry &lt;b&gt; x&nbsp;y</p>"),
    );

    assert_eq!(cell.doc.text_content(slot), "Tom & Jerry <b> x\u{a0}y");
}

//! Tests for stream rendering and coalescing.

use std::sync::Arc;

use crate::dispatch::RenderOutcome;
use crate::host::{ElidingTruncation, TrustFlag};
use crate::item::OutputItem;
use crate::mime::{MimeKind, STDERR, STDOUT};
use crate::render::{STREAM_CLASS, StreamRender, render_stream};
use crate::surface::{Document, ERROR_CLASS, MIME_MARKER_ATTRIBUTE, RenderSurface};
use crate::tests::support::Cell;
use crate::{Renderer, activate};

fn renderer() -> Renderer {
    activate(Arc::new(TrustFlag::untrusted()))
}

fn chunk(id: &str, mime: &str, text: &str) -> OutputItem {
    OutputItem::from_text(id, mime, text)
}

#[test]
fn consecutive_chunks_of_one_stream_share_a_block() {
    let mut cell = Cell::new();
    let mut renderer = renderer();

    let (first, outcome) = cell.render(&mut renderer, &chunk("1", STDOUT, "hello\n"));
    assert_eq!(outcome, RenderOutcome::Rendered(MimeKind::Stdout));
    let (second, outcome) = cell.render(&mut renderer, &chunk("2", STDOUT, "world\n"));
    assert_eq!(outcome, RenderOutcome::Coalesced);

    let blocks = cell.with_class(STREAM_CLASS);
    assert_eq!(blocks.len(), 1);
    assert_eq!(cell.doc.parent(blocks[0]), Some(first));
    assert!(cell.doc.children(second).is_empty());
    assert_eq!(cell.doc.text_content(blocks[0]), "hello\nworld\n");
}

#[test]
fn a_run_of_chunks_keeps_coalescing() {
    let mut cell = Cell::new();
    let mut renderer = renderer();

    for (i, text) in ["a\n", "b\n", "c\n"].into_iter().enumerate() {
        cell.render(&mut renderer, &chunk(&i.to_string(), STDOUT, text));
    }

    let blocks = cell.with_class(STREAM_CLASS);
    assert_eq!(blocks.len(), 1);
    assert_eq!(cell.doc.text_content(blocks[0]), "a\nb\nc\n");
}

#[test]
fn different_streams_do_not_coalesce() {
    let mut cell = Cell::new();
    let mut renderer = renderer();

    cell.render(&mut renderer, &chunk("1", STDOUT, "out"));
    let (_, outcome) = cell.render(&mut renderer, &chunk("2", STDERR, "err"));

    assert_eq!(outcome, RenderOutcome::Rendered(MimeKind::Stderr));
    assert_eq!(cell.with_class(STREAM_CLASS).len(), 2);
}

#[test]
fn alias_spellings_of_one_stream_do_not_coalesce() {
    let mut cell = Cell::new();
    let mut renderer = renderer();

    cell.render(&mut renderer, &chunk("1", STDOUT, "a"));
    let (_, outcome) = cell.render(
        &mut renderer,
        &chunk("2", "application/x.notebook.stdout", "b"),
    );

    assert_eq!(outcome, RenderOutcome::Rendered(MimeKind::Stdout));
    assert_eq!(cell.with_class(STREAM_CLASS).len(), 2);
}

#[test]
fn intervening_output_breaks_coalescing() {
    let mut cell = Cell::new();
    let mut renderer = renderer();

    cell.render(&mut renderer, &chunk("1", STDOUT, "a"));
    cell.render(&mut renderer, &OutputItem::from_text("2", "text/plain", "between"));
    let (_, outcome) = cell.render(&mut renderer, &chunk("3", STDOUT, "b"));

    assert_eq!(outcome, RenderOutcome::Rendered(MimeKind::Stdout));
    assert_eq!(cell.with_class(STREAM_CLASS).len(), 2);
}

#[test]
fn skipped_output_also_breaks_coalescing() {
    let mut cell = Cell::new();
    let mut renderer = renderer();

    cell.render(&mut renderer, &chunk("1", STDOUT, "a"));
    cell.render(&mut renderer, &OutputItem::from_text("2", "text/markdown", "# x"));
    let (_, outcome) = cell.render(&mut renderer, &chunk("3", STDOUT, "b"));

    assert_eq!(outcome, RenderOutcome::Rendered(MimeKind::Stdout));
}

#[test]
fn block_that_no_longer_stands_alone_is_not_continued() {
    let mut cell = Cell::new();
    let mut renderer = renderer();

    let (first, _) = cell.render(&mut renderer, &chunk("1", STDOUT, "a"));
    let extra = cell.doc.create_element("hr");
    cell.doc.append_child(first, extra);
    let (_, outcome) = cell.render(&mut renderer, &chunk("2", STDOUT, "b"));

    assert_eq!(outcome, RenderOutcome::Rendered(MimeKind::Stdout));
}

#[test]
fn new_block_is_marked_with_mime_and_error_state() {
    let mut cell = Cell::new();
    let mut renderer = renderer();

    let (slot, _) = cell.render(&mut renderer, &chunk("1", STDERR, "bad"));

    let block = cell.doc.children(slot)[0];
    assert_eq!(cell.doc.attribute(block, MIME_MARKER_ATTRIBUTE), Some(STDERR));
    assert!(cell.doc.has_class(block, STREAM_CLASS));
    assert!(cell.doc.has_class(block, ERROR_CLASS));

    let (slot, _) = cell.render(&mut renderer, &chunk("2", STDOUT, "ok"));
    let block = cell.doc.children(slot)[0];
    assert!(!cell.doc.has_class(block, ERROR_CLASS));
}

#[test]
fn surface_without_container_is_left_alone() {
    let mut doc = Document::new();
    let slot = doc.create_element("div");
    let before = doc.clone();

    let rendered = render_stream(
        &chunk("1", STDOUT, "lost"),
        &mut RenderSurface::detached(&mut doc, slot),
        false,
        &ElidingTruncation::default(),
        30,
    );

    assert_eq!(rendered, StreamRender::Detached);
    assert_eq!(doc, before);
}

#[test]
fn chunks_are_truncated_to_the_line_limit() {
    let mut cell = Cell::new();
    let slot = cell.add_slot();
    let text: String = (0..50).map(|i| format!("{i}\n")).collect();

    render_stream(
        &chunk("1", STDOUT, &text),
        &mut cell.surface(slot),
        false,
        &ElidingTruncation { tail_lines: 0 },
        30,
    );

    let shown = cell.doc.text_content(slot);
    assert!(shown.starts_with("0\n1\n"));
    assert!(shown.contains("... 20 lines elided ..."));
    assert!(!shown.contains("\n30\n"));
}

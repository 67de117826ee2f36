//! Tests for the Document node tree.

use crate::surface::{Document, Element, Fragment, NodeKind, ScriptNode};

#[test]
fn append_child_moves_node_between_parents() {
    let mut doc = Document::new();
    let a = doc.create_element("div");
    let b = doc.create_element("div");
    let text = doc.create_text("hi");

    doc.append_child(a, text);
    doc.append_child(b, text);

    assert!(doc.children(a).is_empty());
    assert_eq!(doc.children(b), &[text]);
    assert_eq!(doc.parent(text), Some(b));
}

#[test]
fn replace_child_keeps_position_and_detaches_old() {
    let mut doc = Document::new();
    let parent = doc.create_element("div");
    let first = doc.create_text("1");
    let old = doc.create_text("2");
    let last = doc.create_text("3");
    for child in [first, old, last] {
        doc.append_child(parent, child);
    }

    let new = doc.create_text("two");
    assert!(doc.replace_child(parent, new, old));

    assert_eq!(doc.children(parent), &[first, new, last]);
    assert_eq!(doc.parent(old), None);
    assert_eq!(doc.text_content(parent), "1two3");
}

#[test]
fn replace_child_with_foreign_old_changes_nothing() {
    let mut doc = Document::new();
    let parent = doc.create_element("div");
    let stranger = doc.create_text("x");
    let new = doc.create_text("y");

    assert!(!doc.replace_child(parent, new, stranger));
    assert!(doc.children(parent).is_empty());
    assert_eq!(doc.parent(new), None);
}

#[test]
fn clear_children_detaches_everything() {
    let mut doc = Document::new();
    let parent = doc.create_element("div");
    let a = doc.create_text("a");
    let b = doc.create_element("span");
    doc.append_child(parent, a);
    doc.append_child(parent, b);

    doc.clear_children(parent);

    assert!(doc.children(parent).is_empty());
    assert_eq!(doc.parent(a), None);
    assert_eq!(doc.parent(b), None);
}

#[test]
fn descendants_are_in_document_order() {
    let mut doc = Document::new();
    let root = doc.create_element("div");
    let tree = Fragment::element(
        Element::new("section"),
        vec![
            Fragment::element(Element::new("p"), vec![Fragment::text("a")]),
            Fragment::text("b"),
        ],
    );
    let section = doc.insert_fragment(root, tree);

    let order: Vec<String> = doc
        .descendants(root)
        .into_iter()
        .map(|id| match doc.kind(id) {
            NodeKind::Element(e) => e.tag.clone(),
            NodeKind::Text(t) => t.clone(),
            NodeKind::Script(_) => "script".to_string(),
        })
        .collect();

    assert_eq!(order, vec!["section", "p", "a", "b"]);
    assert_eq!(doc.parent(section), Some(root));
}

#[test]
fn class_attribute_is_routed_to_class_list() {
    let mut doc = Document::new();
    let div = doc.create_element("div");

    doc.set_attribute(div, "class", "one  two");
    doc.set_attribute(div, "id", "main");
    doc.add_class(div, "two");
    doc.add_class(div, "three");

    let element = doc.element(div).expect("div is an element");
    assert_eq!(element.classes, vec!["one", "two", "three"]);
    assert_eq!(doc.attribute(div, "id"), Some("main"));
    assert_eq!(doc.attribute(div, "class"), None);
}

#[test]
fn text_content_includes_script_bodies() {
    let mut doc = Document::new();
    let root = doc.create_element("div");
    let script = doc.create_script(ScriptNode::inert("run()"));
    let text = doc.create_text("before ");
    doc.append_child(root, text);
    doc.append_child(root, script);

    assert_eq!(doc.text_content(root), "before run()");
}

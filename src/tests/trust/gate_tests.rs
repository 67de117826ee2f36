//! Tests for TrustedContentGate.

use std::borrow::Cow;

use crate::tests::support::TaggingPolicy;
use crate::trust::TrustedContentGate;

#[test]
fn passthrough_gate_borrows_input() {
    let gate = TrustedContentGate::passthrough();

    assert!(!gate.is_sanitizing());
    assert!(matches!(gate.sanitize_markup("<b>x</b>"), Cow::Borrowed("<b>x</b>")));
    assert!(matches!(gate.sanitize_script("run()"), Cow::Borrowed("run()")));
}

#[test]
fn policy_gate_delegates_both_operations() {
    let gate = TrustedContentGate::new(Some(Box::new(TaggingPolicy)));

    assert!(gate.is_sanitizing());
    assert_eq!(gate.sanitize_markup("<blink>x</blink>"), "<span>x</span>");
    assert_eq!(gate.sanitize_script("run()"), "/* trusted */ run()");
}

#[test]
fn default_gate_is_passthrough() {
    assert!(!TrustedContentGate::default().is_sanitizing());
}

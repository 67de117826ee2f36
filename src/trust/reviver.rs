//! Script revival.
//!
//! Markup injected through the parser never runs its scripts. Each script
//! node is rebuilt as a brand-new executable node and swapped in, so the
//! host applies its normal execution rules to it.

use std::collections::BTreeMap;

use super::TrustedContentGate;
use crate::surface::{Document, NodeId, ScriptNode};

/// Attributes carried over from an inert script to its replacement.
pub const PRESERVED_SCRIPT_ATTRIBUTES: [&str; 5] = ["type", "src", "nonce", "nomodule", "async"];

/// Replace every script node below `root` with a fresh executable copy.
///
/// Returns the number of scripts replaced.
pub fn revive_scripts(doc: &mut Document, root: NodeId, gate: &TrustedContentGate) -> usize {
    let scripts: Vec<NodeId> = doc
        .descendants(root)
        .into_iter()
        .filter(|id| doc.script(*id).is_some())
        .collect();

    let mut revived = 0;
    for old in scripts {
        let (Some(parent), Some(source)) = (doc.parent(old), doc.script(old)) else {
            continue;
        };

        let attributes: BTreeMap<String, String> = PRESERVED_SCRIPT_ATTRIBUTES
            .iter()
            .filter_map(|key| {
                source
                    .attributes
                    .get(*key)
                    .map(|value| (key.to_string(), value.clone()))
            })
            .collect();
        let fresh = ScriptNode {
            attributes,
            body: gate.sanitize_script(&source.body).into_owned(),
            executable: true,
        };

        let new = doc.create_script(fresh);
        if doc.replace_child(parent, new, old) {
            revived += 1;
        }
    }

    if revived > 0 {
        log::debug!("revived {revived} script node(s)");
    }
    revived
}

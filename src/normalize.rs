//! Per-node attribute normalization.
//!
//! Each step is a pure function returning a new attribute map; the caller's
//! `Node` is never touched. `children` are not part of the result, the
//! emitter walks them separately.

use crate::defaults;
use crate::kind::NodeKind;
use crate::node::{Attrs, Node};

/// A node's attributes after defaults and structural rewrites.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedNode {
    pub kind: NodeKind,
    pub attrs: Attrs,
}

pub fn normalize(node: &Node) -> NormalizedNode {
    let kind = node.kind();
    let attrs = with_defaults(&node.attrs, &kind);
    let attrs = rewrite(attrs, &kind);
    NormalizedNode { kind, attrs }
}

/// Supplied attributes first (in supplied order), then every default whose
/// key is absent. An explicit `null` counts as present.
pub fn with_defaults(supplied: &Attrs, kind: &NodeKind) -> Attrs {
    let mut out = supplied.clone();
    for (key, value) in defaults::defaults_for(kind) {
        out.entry(key).or_insert(value);
    }
    out
}

/// Kind-specific structural rewrites.
///
/// Buttons: a generic `filename` is an alias for `normalFilename`. It takes
/// over that key's slot (and value) and disappears.
pub fn rewrite(mut attrs: Attrs, kind: &NodeKind) -> Attrs {
    if kind.is_button() {
        if let Some(filename) = attrs.shift_remove("filename") {
            attrs.insert("normalFilename".to_owned(), filename);
        }
    }
    attrs
}

//! Default attribute tables.
//!
//! Precedence, lowest to highest: base defaults < kind defaults < supplied values.
//! Tables are rebuilt on each call; they are small and callers take ownership.

use serde_json::{json, Value};

use crate::kind::NodeKind;
use crate::node::Attrs;

// ------------------------------- Tables ----------------------------------- //

fn table<const N: usize>(entries: [(&str, Value); N]) -> Attrs {
    entries.into_iter().map(|(k, v)| (k.to_owned(), v)).collect()
}

/// Attributes every node ends up with.
pub fn base_defaults() -> Attrs {
    table([
        ("x", json!(0.0)),
        ("y", json!(0.0)),
        ("isRelativeSize", json!(false)),
        ("width", json!(100.0)),
        ("height", json!(100.0)),
        ("scaleX", json!(1.0)),
        ("scaleY", json!(1.0)),
        ("skewX", json!(0.0)),
        ("skewY", json!(0.0)),
        ("rotation", json!(0.0)),
        ("visible", json!(true)),
        ("anchorpoint", json!([0.0, 0.0])),
        ("dockPoint", json!([0.0, 0.0])),
        ("var", json!("")),
    ])
}

fn sprite_defaults() -> Attrs {
    table([
        ("color", json!([255, 255, 255])),
        ("opacity", json!(255.0)),
        ("blendFunc", json!([1, 771])),
        ("flipX", json!(false)),
        ("flipY", json!(false)),
        ("filename", json!("default.png")),
    ])
}

fn button_defaults() -> Attrs {
    table([
        ("enabled", json!(true)),
        ("normalFilename", json!("button.png")),
        ("selectedFilename", json!("")),
        ("disabledFilename", json!("")),
        ("imageX", json!(0.0)),
        ("imageY", json!(0.0)),
    ])
}

// shared by stylish labels and text fields
fn label_defaults() -> Attrs {
    table([
        ("color", json!([255, 255, 255])),
        ("opacity", json!(255.0)),
        ("fontName", json!("Custom")),
        ("fontSize", json!(12)),
        ("text", json!("")),
        ("alignment", json!(1)),
        ("hasStroke", json!(false)),
        ("strokeTickness", json!(0.0)),
        ("strokeColor", json!([0, 0, 0])),
        ("hasBold", json!(false)),
        ("hasGlow", json!(false)),
        ("glowTickness", json!(0.0)),
        ("glowColor", json!([255, 255, 255])),
        ("glowOpacity", json!(255)),
    ])
}

fn scale9_defaults() -> Attrs {
    table([
        ("color", json!([255, 255, 255])),
        ("opacity", json!(255.0)),
        ("blendFunc", json!([1, 771])),
        ("filename", json!("default.png")),
        ("centerRect", json!([10, 10, 10, 10])),
        ("stretch", json!(true)),
    ])
}

fn layer_color_defaults() -> Attrs {
    table([
        ("color", json!([0, 0, 0])),
        ("opacity", json!(160.0)),
        ("blendFunc", json!([1, 771])),
    ])
}

// ------------------------------ Front API --------------------------------- //

/// Kind-specific defaults. Unknown kinds contribute nothing.
pub fn kind_defaults(kind: &NodeKind) -> Attrs {
    match kind {
        NodeKind::Sprite => sprite_defaults(),
        NodeKind::Button => button_defaults(),
        NodeKind::StylishLabel | NodeKind::TextField => label_defaults(),
        NodeKind::Scale9Sprite => scale9_defaults(),
        NodeKind::LayerColor => layer_color_defaults(),
        NodeKind::Other(_) => Attrs::new(),
    }
}

/// Base defaults overlaid with the kind's defaults.
///
/// A kind entry that shadows a base key keeps the base key's position.
pub fn defaults_for(kind: &NodeKind) -> Attrs {
    let mut out = base_defaults();
    out.extend(kind_defaults(kind));
    out
}

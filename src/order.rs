//! Canonical attribute emission order.

use crate::kind::NodeKind;

/// Shared by every kind.
pub const COMMON_ORDER: &[&str] = &[
    "type",
    "x",
    "y",
    "isRelativeSize",
    "relSize",
    "width",
    "height",
    "scaleX",
    "scaleY",
    "skewX",
    "skewY",
    "rotation",
    "visible",
    "anchorpoint",
    "dockPoint",
    "var",
];

const BUTTON_ORDER: &[&str] = &[
    "enabled",
    "color",
    "opacity",
    "blendFunc",
    "normalFilename",
    "selectedFilename",
    "disabledFilename",
    "imageX",
    "imageY",
];

const SPRITE_ORDER: &[&str] = &[
    "color",
    "opacity",
    "blendFunc",
    "filename",
    "flipX",
    "flipY",
];

const STYLISH_LABEL_ORDER: &[&str] = &[
    "color",
    "opacity",
    "fontName",
    "fontSize",
    "text",
    "alignment",
    "hasStroke",
    "strokeTickness",
    "strokeColor",
    "hasBold",
    "hasGlow",
    "glowTickness",
    "glowColor",
    "glowOpacity",
];

const SCALE9_ORDER: &[&str] = &[
    "color",
    "opacity",
    "blendFunc",
    "filename",
    "centerRect",
    "stretch",
];

const LAYER_COLOR_ORDER: &[&str] = &[
    "color",
    "opacity",
    "blendFunc",
];

/// Attributes specific to a kind, emitted after [`COMMON_ORDER`].
///
/// Text fields share label defaults but have no suffix of their own: their
/// label attributes come out with the unlisted ones.
pub fn kind_order(kind: &NodeKind) -> &'static [&'static str] {
    match kind {
        NodeKind::Button => BUTTON_ORDER,
        NodeKind::Sprite => SPRITE_ORDER,
        NodeKind::StylishLabel => STYLISH_LABEL_ORDER,
        NodeKind::Scale9Sprite => SCALE9_ORDER,
        NodeKind::LayerColor => LAYER_COLOR_ORDER,
        NodeKind::TextField | NodeKind::Other(_) => &[],
    }
}

pub fn property_order(kind: &NodeKind) -> impl Iterator<Item = &'static str> {
    COMMON_ORDER.iter().chain(kind_order(kind)).copied()
}

//! Attribute-name classification for numeric formatting.
//!
//! The loader expects a fixed numeric shape per named field, whatever the
//! upstream JSON happened to produce, so the decision is keyed by name.

/// Rendered as integer literals (scalar numbers are truncated).
pub const INTEGER_ATTRIBUTES: &[&str] = &[
    "color",
    "strokeColor",
    "blendFunc",
    "fontSize",
    "alignment",
    "glowOpacity",
    "glowColor",
    "progressType",
    "percentage",
    "basePixel",
    "startOpacity",
    "endOpacity",
    "centerRect",
];

/// Rendered with exactly six fractional digits.
pub const DECIMAL_ATTRIBUTES: &[&str] = &[
    "x",
    "y",
    "width",
    "height",
    "scaleX",
    "scaleY",
    "skewX",
    "skewY",
    "rotation",
    "opacity",
    "anchorpoint",
    "dockPoint",
    "strokeTickness",
    "glowTickness",
    "relSize",
    "imageX",
    "imageY",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberStyle {
    Integer,
    Decimal,
    /// integral values bare, everything else with six decimals
    Natural,
}

impl NumberStyle {
    pub fn for_attribute(name: &str) -> Self {
        if should_be_integer(name) {
            Self::Integer
        } else if should_preserve_decimal(name) {
            Self::Decimal
        } else {
            Self::Natural
        }
    }
}

pub fn should_be_integer(name: &str) -> bool {
    INTEGER_ATTRIBUTES.contains(&name)
}

pub fn should_preserve_decimal(name: &str) -> bool {
    DECIMAL_ATTRIBUTES.contains(&name)
}

//! Node kinds understood by the UI loader.
//!
//! The `type` string of a node picks its defaults and its emission order.
//! Anything we don't know about lands in `NodeKind::Other` and only gets the
//! base defaults and the common order prefix.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Sprite,
    Button,
    StylishLabel,
    TextField,
    Scale9Sprite,
    LayerColor,
    /// Unknown or missing type (`None` when the node has no string `type`).
    Other(Option<String>),
}

impl NodeKind {
    pub fn from_type_name(name: Option<&str>) -> Self {
        match name {
            Some("CCSprite") => Self::Sprite,
            Some("CCButton") => Self::Button,
            Some("CCStylishLabelTTF") => Self::StylishLabel,
            Some("CCTextFieldTTF") => Self::TextField,
            Some("CCScale9Sprite") => Self::Scale9Sprite,
            Some("CCLayerColor") => Self::LayerColor,
            other => Self::Other(other.map(str::to_owned)),
        }
    }

    pub fn type_name(&self) -> Option<&str> {
        match self {
            Self::Sprite => Some("CCSprite"),
            Self::Button => Some("CCButton"),
            Self::StylishLabel => Some("CCStylishLabelTTF"),
            Self::TextField => Some("CCTextFieldTTF"),
            Self::Scale9Sprite => Some("CCScale9Sprite"),
            Self::LayerColor => Some("CCLayerColor"),
            Self::Other(name) => name.as_deref(),
        }
    }

    /// Button-like nodes carry per-state images instead of a single `filename`.
    pub fn is_button(&self) -> bool {
        matches!(self, Self::Button)
    }
}

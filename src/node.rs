//! Input model: a tree of typed UI nodes.
//!
//! Attribute order is significant (unlisted attributes are emitted in the
//! order they were supplied), so attributes live in an `IndexMap` and
//! `serde_json` runs with `preserve_order`.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::Value;

use crate::error;
use crate::kind::NodeKind;

pub type Attrs = IndexMap<String, Value>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    /// Order is preserved and becomes the 1-based child index.
    pub children: Vec<Node>,
    /// Everything except `children`, in supplied order.
    pub attrs: Attrs,
}

// Hand-written rather than `#[serde(flatten)]`: flatten buffers every value,
// which loses the JSON path of errors inside `children`.
impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(NodeVisitor)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a UI node object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Node, A::Error> {
        let mut node = Node::default();
        while let Some(key) = map.next_key::<String>()? {
            if key == "children" {
                node.children = map.next_value()?;
            } else {
                let value = map.next_value::<Value>()?;
                node.attrs.insert(key, value);
            }
        }
        Ok(node)
    }
}

impl Node {
    /// Parse a JSON node tree. Fails only when the text is not one.
    pub fn parse(src: &str) -> error::Result<Self> {
        crate::path_de::from_str_with_path(src)
    }

    pub fn from_value(value: Value) -> error::Result<Self> {
        crate::path_de::from_value_with_path(value)
    }

    pub fn type_name(&self) -> Option<&str> {
        self.attrs.get("type").and_then(Value::as_str)
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::from_type_name(self.type_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    #[test]
    fn keeps_supplied_attribute_order() {
        let node = Node::parse(r#"{"zeta": 1, "type": "CCSprite", "alpha": 2, "children": []}"#).unwrap();
        let keys: Vec<&str> = node.attrs.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "type", "alpha"]);
        assert!(node.children.is_empty());
        assert_eq!(node.kind(), NodeKind::Sprite);
    }

    #[test]
    fn children_are_optional_and_ordered() {
        let node = Node::from_value(json!({
            "type": "CCNode",
            "children": [{"var": "a"}, {"var": "b"}, {"var": "c"}]
        }))
        .unwrap();
        let vars: Vec<&Value> = node.children.iter().map(|c| &c.attrs["var"]).collect();
        assert_eq!(vars, [&json!("a"), &json!("b"), &json!("c")]);

        let leaf = Node::parse(r#"{"type": "CCSprite"}"#).unwrap();
        assert!(leaf.children.is_empty());
    }

    #[test]
    fn non_string_type_is_unknown() {
        let node = Node::parse(r#"{"type": 7}"#).unwrap();
        assert_eq!(node.type_name(), None);
        assert_eq!(node.kind(), NodeKind::Other(None));
    }

    #[test]
    fn malformed_text_is_a_parse_error() {
        let err = Node::parse(r#"{"type": "CCSprite", "x": }"#).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn trailing_text_is_a_parse_error() {
        let err = Node::parse(r#"{"type": "CCSprite"} extra"#).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn bad_child_reports_its_path() {
        let err = Node::parse(r#"{"type": "CCNode", "children": [{"type": "CCSprite"}, 5]}"#)
            .unwrap_err();
        match err {
            Error::Parse { path, .. } => assert!(path.contains("children"), "path was {path}"),
            other => panic!("unexpected error: {other}"),
        }
    }
}

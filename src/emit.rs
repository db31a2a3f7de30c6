//! Node tree → table-literal text.
//!
//! Block layout (TAB indentation, `d` = depth of the node):
//!
//! ```text
//! {
//! <d>[1] =
//! <d>{ ...child block... };
//! <d>name = value;
//! <d-1>}
//! ```
//!
//! Children come first as 1-based indexed entries, then the node's own
//! attributes in canonical order. The closing brace sits at the parent's
//! indentation. The walk uses an explicit stack and writes into one buffer,
//! so depth is bounded by memory rather than the call stack.

use std::slice;

use serde_json::Value;

use crate::format::format_attribute;
use crate::node::Node;
use crate::normalize::{normalize, NormalizedNode};
use crate::order::property_order;

const INDENT: &str = "\t";

/// Render the root block (no trailing terminator).
pub fn render_block(root: &Node) -> String {
    let mut out = String::new();
    write_block(root, &mut out);
    out
}

/// The persisted file form: root block, statement terminator, newline.
pub fn render_document(root: &Node) -> String {
    let mut out = render_block(root);
    out.push_str(";\n");
    out
}

/// Streams the block for `root` into `out`.
///
/// Children are opened in place as soon as their parent reaches them, so no
/// block is ever copied into its parent.
pub fn write_block(root: &Node, out: &mut String) {
    let mut pending: Vec<Frame> = Vec::new();
    let mut current = Frame::open(root, 0, out);
    loop {
        match current.children.next() {
            Some(child) => {
                current.open_child_entry(out);
                let child_frame = Frame::open(child, current.depth + 1, out);
                pending.push(std::mem::replace(&mut current, child_frame));
            }
            None => {
                current.finish(out);
                match pending.pop() {
                    Some(parent) => {
                        current = parent;
                        out.push_str(";\n");
                    }
                    None => return,
                }
            }
        }
    }
}

// ------------------------------- Frames ----------------------------------- //

struct Frame<'a> {
    node: NormalizedNode,
    children: slice::Iter<'a, Node>,
    depth: usize,
    indent: String,
    next_index: usize,
    wrote_line: bool,
}

impl<'a> Frame<'a> {
    fn open(node: &'a Node, depth: usize, out: &mut String) -> Self {
        out.push_str("{\n");
        Self {
            node: normalize(node),
            children: node.children.iter(),
            depth,
            indent: INDENT.repeat(depth),
            next_index: 1,
            wrote_line: false,
        }
    }

    /// `[i] =` line plus the indentation the child's opening brace sits on.
    fn open_child_entry(&mut self, out: &mut String) {
        let indent = &self.indent;
        out.push_str(&format!("{indent}[{}] =\n{indent}", self.next_index));
        self.next_index += 1;
        self.wrote_line = true;
    }

    fn finish(self, out: &mut String) {
        let mut lines = Vec::new();
        push_attributes(&self.node, &self.indent, &mut lines);
        for line in &lines {
            out.push_str(line);
            out.push('\n');
        }
        // an empty block still has its blank middle line
        if lines.is_empty() && !self.wrote_line {
            out.push('\n');
        }
        out.push_str(&INDENT.repeat(self.depth.saturating_sub(1)));
        out.push('}');
    }
}

// ------------------------------ Attributes -------------------------------- //

fn push_attributes(node: &NormalizedNode, indent: &str, lines: &mut Vec<String>) {
    let order: Vec<&str> = property_order(&node.kind).collect();
    for name in &order {
        if let Some(value) = node.attrs.get(*name) {
            push_attribute(name, value, indent, lines);
        }
    }
    // anything else, in the node's own order
    for (name, value) in &node.attrs {
        if !order.contains(&name.as_str()) {
            push_attribute(name, value, indent, lines);
        }
    }
}

fn push_attribute(name: &str, value: &Value, indent: &str, lines: &mut Vec<String>) {
    if should_emit(value) {
        lines.push(format!("{indent}{name} = {};", format_attribute(name, value)));
    }
}

/// Nulls and empty lists never reach the output.
fn should_emit(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(value: Value) -> String {
        render_block(&Node::from_value(value).unwrap())
    }

    const TOUCH_NODE_ATTRS: &str = "\
type = 'CCTouchNode';
x = 0.000000;
y = 0.000000;
isRelativeSize = false;
width = 100.000000;
height = 100.000000;
scaleX = 1.000000;
scaleY = 1.000000;
skewX = 0.000000;
skewY = 0.000000;
rotation = 0.000000;
visible = true;
anchorpoint = { 0.000000; 0.000000; };
dockPoint = { 0.000000; 0.000000; };
var = '';";

    #[test]
    fn leaf_root_is_fully_defaulted() {
        let out = render(json!({"type": "CCTouchNode", "children": []}));
        assert_eq!(out, format!("{{\n{TOUCH_NODE_ATTRS}\n}}"));
    }

    #[test]
    fn button_end_to_end() {
        let out = render(json!({
            "type": "CCButton", "x": 10, "y": 20, "width": 50, "height": 50, "filename": "btn.png"
        }));
        assert!(out.contains("x = 10.000000;"));
        assert!(out.contains("y = 20.000000;"));
        assert!(out.contains("width = 50.000000;"));
        assert!(out.contains("normalFilename = 'btn.png';"));
        assert!(!out.contains("filename ="));
        assert!(!out.contains("\nfilename"));
        let tail = "\
enabled = true;
normalFilename = 'btn.png';
selectedFilename = '';
disabledFilename = '';
imageX = 0.000000;
imageY = 0.000000;
}";
        assert!(out.ends_with(tail), "{out}");
    }

    #[test]
    fn nested_sprite_child() {
        let out = render(json!({
            "type": "CCTouchNode",
            "children": [{"type": "CCSprite", "var": "bg"}]
        }));
        let expected = format!(
            "{{\n[1] =\n{{\n{child}\n}};\n{TOUCH_NODE_ATTRS}\n}}",
            child = [
                "\ttype = 'CCSprite';",
                "\tx = 0.000000;",
                "\ty = 0.000000;",
                "\tisRelativeSize = false;",
                "\twidth = 100.000000;",
                "\theight = 100.000000;",
                "\tscaleX = 1.000000;",
                "\tscaleY = 1.000000;",
                "\tskewX = 0.000000;",
                "\tskewY = 0.000000;",
                "\trotation = 0.000000;",
                "\tvisible = true;",
                "\tanchorpoint = { 0.000000; 0.000000; };",
                "\tdockPoint = { 0.000000; 0.000000; };",
                "\tvar = 'bg';",
                "\tcolor = { 255; 255; 255; };",
                "\topacity = 255.000000;",
                "\tblendFunc = { 1; 771; };",
                "\tfilename = 'default.png';",
                "\tflipX = false;",
                "\tflipY = false;",
            ]
            .join("\n"),
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn children_are_indexed_in_order() {
        let out = render(json!({
            "type": "CCTouchNode",
            "children": [{"var": "c"}, {"var": "a"}, {"var": "b"}]
        }));
        let markers: Vec<&str> = out.lines().filter(|l| l.ends_with("] =")).collect();
        assert_eq!(markers, ["[1] =", "[2] =", "[3] ="]);
        let vars: Vec<&str> = out.lines().filter(|l| l.starts_with("\tvar = ")).collect();
        assert_eq!(vars, ["\tvar = 'c';", "\tvar = 'a';", "\tvar = 'b';"]);
    }

    #[test]
    fn grandchildren_indent_one_level_deeper() {
        let out = render(json!({
            "children": [{"children": [{"var": "leaf"}]}]
        }));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "{");
        assert_eq!(lines[1], "[1] =");
        assert_eq!(lines[2], "{");
        assert_eq!(lines[3], "\t[1] =");
        assert_eq!(lines[4], "\t{");
        assert!(lines.contains(&"\t\tvar = 'leaf';"));
        assert!(lines.contains(&"\t};"));
        assert!(lines.contains(&"};"));
        assert_eq!(lines.last(), Some(&"}"));
    }

    #[test]
    fn unlisted_attributes_follow_in_supplied_order() {
        let out = render(json!({"zeta": 1, "type": "CCLayerColor", "alpha": 2.5}));
        let lines: Vec<&str> = out.lines().collect();
        let n = lines.len();
        assert_eq!(
            &lines[n - 6..],
            [
                "color = { 0; 0; 0; };",
                "opacity = 160.000000;",
                "blendFunc = { 1; 771; };",
                "zeta = 1;",
                "alpha = 2.500000;",
                "}",
            ]
        );
    }

    #[test]
    fn text_field_label_attributes_are_unlisted() {
        let out = render(json!({"type": "CCTextFieldTTF", "text": "hi"}));
        let lines: Vec<&str> = out.lines().collect();
        // supplied `text` precedes the defaulted label attributes
        let text = lines.iter().position(|l| *l == "text = 'hi';").unwrap();
        let color = lines.iter().position(|l| *l == "color = { 255; 255; 255; };").unwrap();
        let var = lines.iter().position(|l| *l == "var = '';").unwrap();
        assert!(var < text && text < color);
    }

    #[test]
    fn empty_lists_and_nulls_are_dropped() {
        let out = render(json!({"type": "CCSprite", "relSize": [], "filename": null, "tags": []}));
        assert!(!out.contains("relSize"));
        assert!(!out.contains("filename"));
        assert!(!out.contains("tags"));
    }

    #[test]
    fn empty_maps_are_kept() {
        let out = render(json!({"meta": {}}));
        assert!(out.contains("meta = {\n\n};"));
    }

    fn all_base_keys_null() -> Value {
        json!({
            "x": null, "y": null, "isRelativeSize": null, "width": null, "height": null,
            "scaleX": null, "scaleY": null, "skewX": null, "skewY": null,
            "rotation": null, "visible": null, "anchorpoint": null, "dockPoint": null, "var": null
        })
    }

    #[test]
    fn block_without_lines_keeps_a_blank_body() {
        assert_eq!(render(all_base_keys_null()), "{\n\n}");
    }

    #[test]
    fn empty_child_block_keeps_a_blank_body() {
        let mut parent = all_base_keys_null();
        parent["children"] = json!([all_base_keys_null()]);
        assert_eq!(render(parent), "{\n[1] =\n{\n\n};\n}");
    }

    #[test]
    fn deterministic() {
        let value = json!({"type": "CCStylishLabelTTF", "b": 1, "a": 2, "children": [{"q": [1]}]});
        assert_eq!(render(value.clone()), render(value));
    }

    #[test]
    fn document_has_terminator() {
        let node = Node::from_value(json!({"type": "CCTouchNode"})).unwrap();
        let doc = render_document(&node);
        assert!(doc.ends_with("\n};\n"));
        assert_eq!(doc, format!("{};\n", render_block(&node)));
    }

    #[test]
    fn deep_trees_do_not_overflow() {
        let mut node = Node::default();
        for _ in 0..2_000 {
            node = Node { children: vec![node], ..Node::default() };
        }
        let out = render_block(&node);
        assert!(out.starts_with("{\n[1] =\n{\n\t[1] =\n\t{\n"));
        assert_eq!(out.matches("[1] =").count(), 2_000);
    }
}

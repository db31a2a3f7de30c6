//! Optional structural validation of a node tree.
//!
//! The converter itself never rejects anything past parsing. This layer is
//! for callers that want to refuse obviously broken descriptions (wrong
//! field types, missing position) before writing a `.ui` file. Unknown
//! fields are always accepted.

use std::fmt;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::node::Node;

// ------------------------------- Schema ----------------------------------- //

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldTy {
    Str,
    Number,
    Integer,
    Bool,
    NumberList,
    IntegerList,
}

impl FieldTy {
    fn describe(self) -> &'static str {
        match self {
            Self::Str => "a string",
            Self::Number => "a number",
            Self::Integer => "an integer",
            Self::Bool => "a boolean",
            Self::NumberList => "a list of numbers",
            Self::IntegerList => "a list of integers",
        }
    }

    fn accepts(self, value: &Value) -> bool {
        match self {
            Self::Str => value.is_string(),
            Self::Number => value.is_number(),
            Self::Integer => is_integral(value),
            Self::Bool => value.is_boolean(),
            Self::NumberList => list_of(value, Value::is_number),
            Self::IntegerList => list_of(value, is_integral),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Presence {
    Required,
    /// may be absent; `null` allowed when `nullable`
    Optional { nullable: bool },
}

struct FieldSpec {
    name: &'static str,
    ty: FieldTy,
    presence: Presence,
}

const fn required(name: &'static str, ty: FieldTy) -> FieldSpec {
    FieldSpec { name, ty, presence: Presence::Required }
}

const fn optional(name: &'static str, ty: FieldTy) -> FieldSpec {
    FieldSpec { name, ty, presence: Presence::Optional { nullable: true } }
}

const fn non_null(name: &'static str, ty: FieldTy) -> FieldSpec {
    FieldSpec { name, ty, presence: Presence::Optional { nullable: false } }
}

use FieldTy::*;

const FIELDS: &[FieldSpec] = &[
    required("type", Str),
    required("x", Number),
    required("y", Number),
    optional("width", Number),
    optional("height", Number),
    optional("isRelativeSize", Bool),
    optional("relSize", NumberList),
    optional("scaleX", Number),
    optional("scaleY", Number),
    optional("skewX", Number),
    optional("skewY", Number),
    optional("rotation", Number),
    optional("visible", Bool),
    optional("anchorpoint", NumberList),
    optional("dockPoint", NumberList),
    optional("color", IntegerList),
    optional("opacity", Number),
    optional("blendFunc", IntegerList),
    non_null("var", Str),
    optional("filename", Str),
    optional("normalFilename", Str),
    optional("selectedFilename", Str),
    optional("disabledFilename", Str),
    optional("enabled", Bool),
    optional("text", Str),
    optional("fontName", Str),
    optional("fontSize", Integer),
    optional("alignment", Integer),
    optional("hasStroke", Bool),
    optional("strokeTickness", Number),
    optional("strokeColor", IntegerList),
    optional("centerRect", IntegerList),
    optional("stretch", Bool),
];

// ----------------------------- Violations --------------------------------- //

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON pointer to the node or field, e.g. `/children/0/x`.
    pub path: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() { "/" } else { &self.path };
        write!(f, "{path}: {}", self.message)
    }
}

// ------------------------------ Front API --------------------------------- //

/// Check every node of the tree; all problems are reported at once.
pub fn validate(root: &Node) -> Result<()> {
    let violations = collect_violations(root);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(Error::Invalid(violations))
    }
}

pub fn collect_violations(root: &Node) -> Vec<Violation> {
    let mut out = Vec::new();
    let mut stack = vec![(root, String::new())];
    while let Some((node, path)) = stack.pop() {
        check_node(node, &path, &mut out);
        // reversed so violations come out in document order
        for (i, child) in node.children.iter().enumerate().rev() {
            stack.push((child, format!("{path}/children/{i}")));
        }
    }
    out
}

fn check_node(node: &Node, path: &str, out: &mut Vec<Violation>) {
    for field in FIELDS {
        let violation = match (node.attrs.get(field.name), field.presence) {
            (None, Presence::Required) => Some("is required".to_owned()),
            (None, Presence::Optional { .. }) => None,
            (Some(Value::Null), Presence::Optional { nullable: true }) => None,
            (Some(value), _) if field.ty.accepts(value) => None,
            (Some(value), _) => Some(format!(
                "expected {}, found {}",
                field.ty.describe(),
                describe_value(value)
            )),
        };
        if let Some(message) = violation {
            out.push(Violation { path: format!("{path}/{}", field.name), message });
        }
    }
}

// ------------------------------- Helpers ---------------------------------- //

fn is_integral(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.fract() == 0.0),
        _ => false,
    }
}

fn list_of(value: &Value, item: impl Fn(&Value) -> bool) -> bool {
    value.as_array().is_some_and(|items| items.iter().all(item))
}

fn describe_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string '{s}'"),
        Value::Array(xs) => format!("list of {} item(s)", xs.len()),
        Value::Object(_) => "object".to_owned(),
    }
}

//! Table-literal rendering of single attribute values.
//!
//! Output here is a compatibility contract with the loader: six fractional
//! digits, `{ a; b; }` lists, single-quoted strings with no escaping.

use serde_json::{Number, Value};

use crate::classify::NumberStyle;

/// Render the value of attribute `name`, applying its numeric classification.
///
/// Integer coercion only touches scalar numbers; list items under an
/// integer-classified name fall back to the natural rule.
pub fn format_attribute(name: &str, value: &Value) -> String {
    match (NumberStyle::for_attribute(name), value) {
        (NumberStyle::Integer, Value::Number(n)) => format_truncated(n),
        (NumberStyle::Decimal, _) => format_value(value, true),
        _ => format_value(value, false),
    }
}

pub fn format_value(value: &Value, preserve_decimal: bool) -> String {
    match value {
        Value::String(s) => format!("'{s}'"),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(n, preserve_decimal),
        Value::Array(items) => {
            let items: Vec<String> = items
                .iter()
                .map(|item| format_value(item, preserve_decimal))
                .collect();
            format!("{{ {}; }}", items.join("; "))
        }
        Value::Object(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{k} = {}", format_value(v, preserve_decimal)))
                .collect();
            format!("{{\n{}\n}}", entries.join("; "))
        }
        // only reachable inside lists and maps; top-level nulls are skipped
        Value::Null => "nil".to_owned(),
    }
}

fn format_number(n: &Number, preserve_decimal: bool) -> String {
    if preserve_decimal {
        return format_decimal(as_f64(n));
    }
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    let f = as_f64(n);
    if f.fract() == 0.0 {
        format_integral(f)
    } else {
        format_decimal(f)
    }
}

/// Cast-style coercion: fractions are truncated toward zero, never rounded.
fn format_truncated(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    format_integral(as_f64(n).trunc())
}

fn format_decimal(f: f64) -> String {
    format!("{f:.6}")
}

// `f` must already be integral
fn format_integral(f: f64) -> String {
    if f.abs() < 9.2e18 {
        // also folds -0.0 into 0
        (f as i64).to_string()
    } else {
        format!("{f:.0}")
    }
}

fn as_f64(n: &Number) -> f64 {
    // always Some without `arbitrary_precision`
    n.as_f64().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings_are_single_quoted_verbatim() {
        assert_eq!(format_value(&json!("btn.png"), false), "'btn.png'");
        assert_eq!(format_value(&json!(""), false), "''");
        assert_eq!(format_value(&json!("it's"), false), "'it's'");
    }

    #[test]
    fn booleans_are_lowercase() {
        assert_eq!(format_value(&json!(true), false), "true");
        assert_eq!(format_value(&json!(false), true), "false");
    }

    #[test]
    fn natural_numbers() {
        assert_eq!(format_value(&json!(3), false), "3");
        assert_eq!(format_value(&json!(3.0), false), "3");
        assert_eq!(format_value(&json!(-2), false), "-2");
        assert_eq!(format_value(&json!(0.5), false), "0.500000");
        assert_eq!(format_value(&json!(-0.0), false), "0");
        assert_eq!(format_value(&json!(1e20), false), "100000000000000000000");
    }

    #[test]
    fn decimal_attributes_keep_six_digits() {
        assert_eq!(format_attribute("x", &json!(10)), "10.000000");
        assert_eq!(format_attribute("rotation", &json!(0)), "0.000000");
        assert_eq!(format_attribute("opacity", &json!(255.0)), "255.000000");
        assert_eq!(format_attribute("scaleX", &json!(0.1234567)), "0.123457");
        assert_eq!(format_attribute("y", &json!(-1.5)), "-1.500000");
    }

    #[test]
    fn integer_attributes_truncate() {
        assert_eq!(format_attribute("fontSize", &json!(3)), "3");
        assert_eq!(format_attribute("fontSize", &json!(3.0)), "3");
        assert_eq!(format_attribute("fontSize", &json!(3.7)), "3");
        assert_eq!(format_attribute("alignment", &json!(-2.9)), "-2");
        assert_eq!(format_attribute("glowOpacity", &json!(0.4)), "0");
    }

    #[test]
    fn lists() {
        assert_eq!(format_attribute("anchorpoint", &json!([0.5, 1])), "{ 0.500000; 1.000000; }");
        assert_eq!(format_attribute("color", &json!([255, 128.0, 0])), "{ 255; 128; 0; }");
        // list items are not coerced
        assert_eq!(format_attribute("centerRect", &json!([10.5, 10])), "{ 10.500000; 10; }");
        assert_eq!(format_attribute("tags", &json!(["a", true])), "{ 'a'; true; }");
        assert_eq!(format_value(&json!([1, null]), false), "{ 1; nil; }");
    }

    #[test]
    fn nested_lists() {
        assert_eq!(
            format_attribute("relSize", &json!([[1, 2], [3]])),
            "{ { 1.000000; 2.000000; }; { 3.000000; }; }"
        );
    }

    #[test]
    fn maps() {
        assert_eq!(
            format_attribute("extra", &json!({"a": 1, "b": "x"})),
            "{\na = 1; b = 'x'\n}"
        );
        assert_eq!(format_attribute("x", &json!({"k": 2})), "{\nk = 2.000000\n}");
    }

    #[test]
    fn non_numbers_under_integer_names_pass_through() {
        assert_eq!(format_attribute("fontSize", &json!("12")), "'12'");
        assert_eq!(format_attribute("alignment", &json!(true)), "true");
    }
}

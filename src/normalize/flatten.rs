use serde_json::Value;

/// Recursion bound for [`flatten_strings`]. A hostile or buggy judge could
/// nest containers arbitrarily deep; anything past this depth is dropped.
pub(crate) const MAX_FLATTEN_DEPTH: usize = 16;

/// Flattens an arbitrarily nested JSON value into a flat ordered list of
/// strings: scalars are stringified, sequence elements and mapping values are
/// recursed into, nulls are skipped.
pub fn flatten_strings(value: &Value) -> Vec<String> {
    let mut out = Vec::new();
    walk(value, 0, &mut out);
    out
}

fn walk(value: &Value, depth: usize, out: &mut Vec<String>) {
    if depth > MAX_FLATTEN_DEPTH {
        return;
    }

    match value {
        Value::Null => {}
        Value::Bool(b) => out.push(b.to_string()),
        Value::Number(n) => out.push(n.to_string()),
        Value::String(s) => out.push(s.clone()),
        Value::Array(items) => {
            for item in items {
                walk(item, depth + 1, out);
            }
        }
        Value::Object(map) => {
            for item in map.values() {
                walk(item, depth + 1, out);
            }
        }
    }
}

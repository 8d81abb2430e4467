use serde_json::{Map, Value};

/// Compact JSON with object members sorted by key at every depth.
pub(super) fn canonical_object(map: &Map<String, Value>) -> String {
    let mut out = String::new();
    write_object(map, &mut out);
    out
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => write_object(map, out),
        Value::Array(list) => {
            out.push('[');
            for (idx, item) in list.iter().enumerate() {
                if idx > 0 {
                    out.push(',');
                }
                write_value(item, out);
            }
            out.push(']');
        }
        Value::String(val) => write_string(val, out),
        Value::Number(val) => out.push_str(&val.to_string()),
        Value::Bool(val) => out.push_str(if *val { "true" } else { "false" }),
        Value::Null => out.push_str("null"),
    }
}

fn write_object(map: &Map<String, Value>, out: &mut String) {
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();
    out.push('{');
    for (idx, key) in keys.into_iter().enumerate() {
        if idx > 0 {
            out.push(',');
        }
        write_string(key, out);
        out.push(':');
        write_value(&map[key], out);
    }
    out.push('}');
}

fn write_string(val: &str, out: &mut String) {
    let quoted = serde_json::to_string(val).unwrap_or_else(|_| format!("\"{val}\""));
    out.push_str(&quoted);
}

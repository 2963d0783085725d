use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Convert a JSON value to a short string representation
pub fn value_to_short_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(arr) => arr
            .iter()
            .map(value_to_short_string)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(obj) => {
            let mut parts = Vec::new();
            for (key, val) in obj {
                parts.push(format!("{}: {}", key, value_to_short_string(val)));
            }
            parts.join(", ")
        }
        Value::Null => String::new(),
    }
}

/// Serde helper for port fields that arrive either as strings or numbers.
pub fn port_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(value_to_short_string).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "port_string")]
        port: String,
    }

    #[test]
    fn numbers_and_strings_normalize() {
        let a: Holder = serde_json::from_value(json!({"port": 8080})).unwrap();
        let b: Holder = serde_json::from_value(json!({"port": "10.0.0.4:8080"})).unwrap();
        let c: Holder = serde_json::from_value(json!({"port": null})).unwrap();
        let d: Holder = serde_json::from_value(json!({})).unwrap();
        assert_eq!(a.port, "8080");
        assert_eq!(b.port, "10.0.0.4:8080");
        assert_eq!(c.port, "");
        assert_eq!(d.port, "");
    }

    #[test]
    fn nested_values_flatten() {
        let v = json!({"user": "root", "ports": [1, 2]});
        assert_eq!(value_to_short_string(&v), "ports: 1, 2, user: root");
    }
}

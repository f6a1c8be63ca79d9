//! Utilities for serde

/// IRIS reports `errors` as a list of strings, a single string, or an object
/// mapping field names to messages depending on the endpoint and failure.
/// This flattens all of them into a list of strings.
pub mod error_list {
    use serde::Deserialize;
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        let mut errors = Vec::new();
        if let Some(value) = value {
            flatten(None, value, &mut errors);
        }
        Ok(errors)
    }

    fn flatten(field: Option<&str>, value: Value, out: &mut Vec<String>) {
        match value {
            Value::Null => {}
            Value::String(message) => out.push(match field {
                Some(field) => format!("{}: {}", field, message),
                None => message,
            }),
            Value::Array(items) => {
                for item in items {
                    flatten(field, item, out);
                }
            }
            Value::Object(map) => {
                for (key, item) in map {
                    let key = match field {
                        Some(field) => format!("{}.{}", field, key),
                        None => key,
                    };
                    flatten(Some(&key), item, out);
                }
            }
            other => flatten(field, Value::String(other.to_string()), out),
        }
    }
}

/// Decodes `null` as the type's default value. Missing keys are handled by
/// `#[serde(default)]` on the field or container.
pub mod null_default {
    use serde::Deserialize;

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: serde::Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}

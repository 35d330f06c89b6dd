use serde_json::Value;

use super::FieldValue;

impl FieldValue {
    pub fn to_json(&self) -> Value {
        match self {
            Self::Empty => Value::Null,
            Self::Text(s) | Self::Key(s) | Self::Path(s) => Value::String(s.clone()),
            Self::Lines(lines) => serde_json::json!(lines),
            Self::Date(dt) => Value::String(dt.format("%Y-%m-%dT%H:%M:%S").to_string()),
            Self::Tags(tags) => serde_json::json!(tags),
            Self::Number(n) => serde_json::json!(n),
        }
    }
}

use chrono::NaiveDate;
use serde_json::Value;

use crate::form::FieldKind;
use crate::form::extract::{parse_date_text, parse_tags, split_lines};
use super::FieldValue;

impl FieldValue {
    /// Build a kind's value from a config scalar/list. `None` when the JSON shape
    /// cannot belong to the kind; unparsable dates become `Empty`.
    pub fn from_json(kind: FieldKind, value: &Value, today: NaiveDate) -> Option<FieldValue> {
        if value.is_null() {
            return Some(FieldValue::Empty);
        }

        match kind {
            FieldKind::PlainText => match value {
                Value::String(s) => Some(Self::Text(s.clone())),
                Value::Number(n) => Some(Self::Text(n.to_string())),
                Value::Bool(b) => Some(Self::Text(b.to_string())),
                _ => None,
            },
            FieldKind::MultilineText => match value {
                Value::String(s) => Some(Self::Lines(split_lines(s))),
                Value::Array(items) => items
                    .iter()
                    .map(|v| v.as_str().map(str::to_string))
                    .collect::<Option<Vec<_>>>()
                    .map(Self::Lines),
                _ => None,
            },
            FieldKind::Date => value.as_str().map(|s| {
                parse_date_text(s, today)
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
                    .map(Self::Date)
                    .unwrap_or(Self::Empty)
            }),
            FieldKind::HierarchicalPick => value.as_str().map(|s| Self::Key(s.trim().to_string())),
            FieldKind::TagSet => match value {
                Value::String(s) => Some(Self::Tags(parse_tags(s))),
                Value::Array(items) => {
                    let joined = items
                        .iter()
                        .map(|v| v.as_str().map(str::to_string))
                        .collect::<Option<Vec<_>>>()?
                        .join(",");
                    Some(Self::Tags(parse_tags(&joined)))
                }
                _ => None,
            },
            FieldKind::FilePath | FieldKind::FolderPath => value.as_str().map(|s| Self::Path(s.to_string())),
            FieldKind::Number => match value {
                Value::Number(n) => n.as_f64().filter(|n| n.is_finite()).map(Self::Number),
                Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()).map(Self::Number),
                _ => None,
            },
            FieldKind::Action => None,
        }
    }
}

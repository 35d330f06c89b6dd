// src/form/extract/mod.rs
// Buffer text -> typed value, one rule per field kind

mod date;
mod tags;

pub use date::parse_date_text;
pub use tags::{is_valid_tag, parse_tags};

use chrono::NaiveDate;

use super::{FieldDescriptor, FieldKind, FieldValue, SEGMENT_SEPARATOR};

/// Typed value of `field` given its edit buffer. Numbers and actions have no
/// buffer and report their stored value; an empty buffer is always `Empty`.
pub fn extract(field: &FieldDescriptor, buffer: &str, today: NaiveDate) -> FieldValue {
    if buffer.is_empty() && field.kind.has_buffer() {
        return FieldValue::Empty;
    }

    match field.kind {
        FieldKind::PlainText => FieldValue::Text(buffer.to_string()),
        FieldKind::MultilineText => FieldValue::Lines(split_lines(buffer)),
        FieldKind::Date => parse_date_text(buffer, today)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(FieldValue::Date)
            .unwrap_or(FieldValue::Empty),
        FieldKind::HierarchicalPick => FieldValue::Key(buffer.trim().to_string()),
        FieldKind::TagSet => FieldValue::Tags(parse_tags(buffer)),
        FieldKind::FilePath | FieldKind::FolderPath => FieldValue::Path(buffer.to_string()),
        FieldKind::Number | FieldKind::Action => field.value.clone(),
    }
}

/// Split single-row multiline text back into segments. Real newlines count as
/// separators too.
pub fn split_lines(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(|c| c == SEGMENT_SEPARATOR || c == '\n')
        .map(|s| s.trim_end_matches('\r').to_string())
        .collect()
}

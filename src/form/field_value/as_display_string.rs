use super::{FieldValue, SEGMENT_SEPARATOR};

const DATE_FORMAT: &str = "%Y-%m-%d";

impl FieldValue {
    /// Formatted form shown for fields that are not being edited, and the text an
    /// edit buffer is seeded with.
    pub fn as_display_string(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(s) | Self::Key(s) | Self::Path(s) => s.clone(),
            Self::Lines(lines) => lines.join(&SEGMENT_SEPARATOR.to_string()),
            Self::Date(dt) => dt.format(DATE_FORMAT).to_string(),
            Self::Tags(tags) => tags.join(", "),
            Self::Number(n) => format!("{}", n),
        }
    }
}

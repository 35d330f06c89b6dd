mod as_display_string;
mod from_json;
mod to_json;

use chrono::NaiveDateTime;

/// Separator shown in place of newlines when multiline text sits on one row.
pub const SEGMENT_SEPARATOR: char = '¶';

#[derive(Debug, Clone, Default, PartialEq)]
pub enum FieldValue {
    /// No value. Unparsable input degrades to this.
    #[default]
    Empty,
    Text(String),
    Lines(Vec<String>),
    /// Local calendar date at midnight
    Date(NaiveDateTime),
    Key(String),
    Tags(Vec<String>),
    Path(String),
    Number(f64),
}

impl FieldValue {
    /// The "empty" sentinel checked by required-field validation.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) | Self::Key(s) | Self::Path(s) => s.trim().is_empty(),
            Self::Lines(lines) => lines.iter().all(|l| l.trim().is_empty()),
            Self::Tags(tags) => tags.is_empty(),
            Self::Date(_) | Self::Number(_) => false,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text length in characters, for max-length checks.
    pub fn char_len(&self) -> usize {
        match self {
            Self::Text(s) | Self::Key(s) | Self::Path(s) => s.chars().count(),
            Self::Lines(lines) => lines.iter().map(|l| l.chars().count()).sum(),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sentinels() {
        assert!(FieldValue::Empty.is_empty());
        assert!(FieldValue::Text("   ".to_string()).is_empty());
        assert!(FieldValue::Tags(vec![]).is_empty());
        assert!(FieldValue::Lines(vec![String::new()]).is_empty());
        assert!(!FieldValue::Number(0.0).is_empty());
        assert!(!FieldValue::Key("work".to_string()).is_empty());
    }
}

// src/form/field.rs
// Declarative field descriptors handed to the editor by the embedding screen

use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};
use super::FieldValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    PlainText,
    MultilineText,
    Date,
    HierarchicalPick,
    TagSet,
    FilePath,
    FolderPath,
    Number,
    Action,
}

impl FieldKind {
    /// Kinds that take raw characters straight into their buffer, modal or not.
    pub fn is_text_like(&self) -> bool {
        matches!(
            self,
            Self::PlainText | Self::MultilineText | Self::Date | Self::TagSet | Self::HierarchicalPick
        )
    }

    /// Kinds that can hand the screen to a modal widget.
    pub fn is_expandable(&self) -> bool {
        matches!(
            self,
            Self::Date | Self::HierarchicalPick | Self::TagSet | Self::FilePath | Self::FolderPath
        )
    }

    /// Kinds backed by an edit buffer (everything but numbers and buttons).
    pub fn has_buffer(&self) -> bool {
        !matches!(self, Self::Number | Self::Action)
    }

    pub fn is_path(&self) -> bool {
        matches!(self, Self::FilePath | Self::FolderPath)
    }

    /// Canonical form of an accepted value: multiline text is stored as segments,
    /// never as one string with raw newlines.
    pub fn normalize(&self, value: FieldValue) -> FieldValue {
        match (self, value) {
            (Self::MultilineText, FieldValue::Text(text)) if text.is_empty() => FieldValue::Empty,
            (Self::MultilineText, FieldValue::Text(text)) => FieldValue::Lines(super::extract::split_lines(&text)),
            (_, value) => value,
        }
    }

    /// Inline column width used when the descriptor does not set one.
    pub fn default_width(&self) -> u16 {
        match self {
            Self::PlainText => 20,
            Self::MultilineText => 30,
            Self::Date => 12,
            Self::HierarchicalPick => 18,
            Self::TagSet => 20,
            Self::FilePath | Self::FolderPath => 28,
            Self::Number => 8,
            Self::Action => 10,
        }
    }

    /// Whether `value` is a legal payload for this kind.
    pub fn accepts(&self, value: &FieldValue) -> bool {
        match (self, value) {
            (Self::Action, FieldValue::Empty) => true,
            (Self::Action, _) => false,
            (Self::Number, FieldValue::Number(_)) => true,
            (Self::Number, _) => false,
            (_, FieldValue::Empty) => true,
            (Self::PlainText, FieldValue::Text(_)) => true,
            (Self::MultilineText, FieldValue::Lines(_) | FieldValue::Text(_)) => true,
            (Self::Date, FieldValue::Date(_)) => true,
            (Self::HierarchicalPick, FieldValue::Key(_)) => true,
            (Self::TagSet, FieldValue::Tags(_)) => true,
            (Self::FilePath | Self::FolderPath, FieldValue::Path(_)) => true,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConstraints {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    pub max_length: Option<usize>,
    /// Inline display width in columns
    pub width: Option<u16>,
    /// Candidates for hierarchical picks, levels separated by `:`
    pub options: Vec<String>,
}

impl FieldConstraints {
    pub fn step(&self) -> f64 {
        self.step.unwrap_or(1.0)
    }

    pub fn display_width(&self, kind: FieldKind) -> u16 {
        self.width.unwrap_or_else(|| kind.default_width())
    }

    pub fn in_range(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }

    /// Pull `value` onto the step grid anchored at `min` (or zero), rounded to the
    /// decimals the step and anchor are written with, so repeated steps of 0.1
    /// land on 0.3 rather than 0.30000000000000004.
    pub fn snap(&self, value: f64) -> f64 {
        let step = self.step();
        let origin = self.min.unwrap_or(0.0);
        let snapped = origin + ((value - origin) / step).round() * step;

        let factor = 10f64.powi(decimals(step).max(decimals(origin)) as i32);
        (snapped * factor).round() / factor
    }
}

/// Decimal places `n` needs when printed, capped so the rounding factor stays exact.
fn decimals(n: f64) -> usize {
    let text = format!("{}", n);
    text.split_once('.').map_or(0, |(_, frac)| frac.len()).min(9)
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub value: FieldValue,
    pub required: bool,
    pub constraints: FieldConstraints,
}

impl FieldDescriptor {
    pub fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            value: FieldValue::Empty,
            required: false,
            constraints: FieldConstraints::default(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_value(mut self, value: FieldValue) -> Self {
        self.value = value;
        self
    }

    pub fn with_constraints(mut self, constraints: FieldConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn with_range(mut self, min: f64, max: f64, step: f64) -> Self {
        self.constraints.min = Some(min);
        self.constraints.max = Some(max);
        self.constraints.step = Some(step);
        self
    }

    pub fn with_options<S: Into<String>>(mut self, options: impl IntoIterator<Item = S>) -> Self {
        self.constraints.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_width(mut self, width: u16) -> Self {
        self.constraints.width = Some(width);
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.constraints.max_length = Some(max_length);
        self
    }

    /// Reject descriptors the editor cannot work with. Numbers without a value
    /// start at zero clamped into their range.
    pub(crate) fn check(&mut self, index: usize) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingName { index });
        }
        if self.label.trim().is_empty() {
            return Err(FormError::MissingLabel { name: self.name.clone() });
        }

        let c = &self.constraints;
        if let (Some(min), Some(max)) = (c.min, c.max) {
            if min > max {
                return Err(FormError::InvalidConstraints {
                    name: self.name.clone(),
                    reason: format!("min ({}) exceeds max ({})", min, max),
                });
            }
        }
        if c.step() <= 0.0 || !c.step().is_finite() {
            return Err(FormError::InvalidConstraints {
                name: self.name.clone(),
                reason: format!("step must be positive, got {}", c.step()),
            });
        }

        if self.kind == FieldKind::Number && self.value == FieldValue::Empty {
            self.value = FieldValue::Number(0.0_f64.max(c.min.unwrap_or(0.0)).min(c.max.unwrap_or(f64::MAX)));
        }
        self.value = self.kind.normalize(std::mem::take(&mut self.value));

        if !self.kind.accepts(&self.value) {
            return Err(FormError::ValueMismatch {
                name: self.name.clone(),
                kind: self.kind,
            });
        }
        if let FieldValue::Number(n) = self.value {
            if !n.is_finite() {
                return Err(FormError::InvalidConstraints {
                    name: self.name.clone(),
                    reason: format!("initial value {} is not a finite number", n),
                });
            }
            if !self.constraints.in_range(n) {
                return Err(FormError::InvalidConstraints {
                    name: self.name.clone(),
                    reason: format!("initial value {} is outside the allowed range", n),
                });
            }
        }

        Ok(())
    }
}

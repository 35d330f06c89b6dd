// src/config.rs
// YAML form definitions and editor settings

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{FormError, Result};
use crate::form::{FieldConstraints, FieldDescriptor, FieldKind, FieldValue, LayoutMode};

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub layout: LayoutMode,
    /// Quiet period after the last keystroke before a field is re-checked
    pub debounce_ms: u64,
    pub title: String,
    pub show_help: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            layout: LayoutMode::default(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            title: "Edit".to_string(),
            show_help: true,
        }
    }
}

/// One field as written in a form file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
    #[serde(flatten)]
    pub constraints: FieldConstraints,
}

impl FieldSpec {
    pub fn into_descriptor(self, today: NaiveDate) -> Result<FieldDescriptor> {
        let value = match &self.value {
            None => FieldValue::Empty,
            Some(raw) => FieldValue::from_json(self.kind, raw, today).ok_or_else(|| FormError::ValueMismatch {
                name: self.name.clone(),
                kind: self.kind,
            })?,
        };

        Ok(FieldDescriptor {
            name: self.name,
            label: self.label,
            kind: self.kind,
            value,
            required: self.required,
            constraints: self.constraints,
        })
    }
}

/// A whole form file: editor settings at the top level plus the field list.
///
/// ```yaml
/// title: New task
/// layout: vertical
/// fields:
///   - { name: title, label: Title, kind: plain_text, required: true }
///   - { name: due, label: Due, kind: date, value: tomorrow }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FormSpec {
    #[serde(flatten)]
    pub settings: EditorSettings,
    pub fields: Vec<FieldSpec>,
}

impl FormSpec {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Field descriptors with initial values resolved against `today`.
    pub fn descriptors(&self, today: NaiveDate) -> Result<Vec<FieldDescriptor>> {
        self.fields
            .iter()
            .cloned()
            .map(|spec| spec.into_descriptor(today))
            .collect()
    }
}

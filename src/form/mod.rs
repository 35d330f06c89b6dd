// src/form/mod.rs
// Field editor: one state model driving inline-row and vertical-form layouts

pub mod extract;
pub mod render;

mod commit;
mod configure;
mod current_values;
mod editing;
mod expansion;
mod field;
mod field_value;
mod handle_input;
mod hooks;
mod navigation;
mod new;
mod text_buffer;
mod validation;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Instant;

use ratatui::layout::Position;

use crate::config::EditorSettings;
use crate::util::clock::Clock;
use crate::widgets::{FieldWidget, WidgetFactory};

pub use field::*;
pub use field_value::*;
pub use hooks::{FormHooks, NoHooks};
pub use text_buffer::TextBuffer;
pub use validation::field_problem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// Fields packed left-to-right on one row (list/grid editing)
    Inline,
    /// Bordered box, one field per row
    #[default]
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pending,
    Confirmed,
    Cancelled,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Pending)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Navigating,
    InlineEditing,
    Expanded,
    Confirmed,
    Cancelled,
}

pub struct FormEditor {
    fields: Vec<FieldDescriptor>,
    buffers: Vec<TextBuffer>,
    index_by_name: HashMap<String, usize>,
    /// Lazily created modal widgets, one slot per field position
    adapters: Vec<Option<Box<dyn FieldWidget>>>,
    focus_index: usize,
    expansion: Option<usize>,
    editing: bool,
    field_errors: HashMap<String, String>,
    form_errors: Vec<String>,
    /// Time of the last keystroke per field still waiting for its validation run
    last_keystroke: Vec<Option<Instant>>,
    outcome: Outcome,
    layout: LayoutMode,
    settings: EditorSettings,
    needs_full_repaint: bool,
    cursor: Option<Position>,
    clock: Box<dyn Clock>,
    factory: Box<dyn WidgetFactory>,
    hooks: Box<dyn FormHooks>,
}

impl std::fmt::Debug for FormEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormEditor")
            .field("fields", &self.fields)
            .field("focus_index", &self.focus_index)
            .field("expansion", &self.expansion)
            .field("editing", &self.editing)
            .field("field_errors", &self.field_errors)
            .field("form_errors", &self.form_errors)
            .field("outcome", &self.outcome)
            .field("layout", &self.layout)
            .field("hooks", &"<FormHooks>")
            .finish()
    }
}

impl FormEditor {
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.index_by_name.get(name).map(|&i| &self.fields[i])
    }

    pub fn focus_index(&self) -> usize {
        self.focus_index
    }

    pub fn focused_field(&self) -> Option<&FieldDescriptor> {
        self.fields.get(self.focus_index)
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn mode(&self) -> EditorMode {
        match self.outcome {
            Outcome::Confirmed => EditorMode::Confirmed,
            Outcome::Cancelled => EditorMode::Cancelled,
            Outcome::Pending if self.expansion.is_some() => EditorMode::Expanded,
            Outcome::Pending if self.editing => EditorMode::InlineEditing,
            Outcome::Pending => EditorMode::Navigating,
        }
    }

    /// Name of the field whose widget currently owns the screen.
    pub fn expanded_field(&self) -> Option<&str> {
        self.expansion.map(|i| self.fields[i].name.as_str())
    }

    pub fn field_error(&self, name: &str) -> Option<&str> {
        self.field_errors.get(name).map(String::as_str)
    }

    pub fn form_errors(&self) -> &[String] {
        &self.form_errors
    }

    /// Raw edit buffer of a text-backed field.
    pub fn buffer(&self, name: &str) -> Option<String> {
        let &i = self.index_by_name.get(name)?;
        self.fields[i].kind.has_buffer().then(|| self.buffers[i].text())
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn set_layout(&mut self, layout: LayoutMode) {
        if self.layout != layout {
            self.layout = layout;
            self.needs_full_repaint = true;
        }
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Read and clear the flag raised when a modal widget closed over regions the
    /// form layouts do not repaint on their own.
    pub fn take_full_repaint(&mut self) -> bool {
        std::mem::take(&mut self.needs_full_repaint)
    }

    /// Terminal caret position computed by the last render, if a text field is focused.
    pub fn cursor_position(&self) -> Option<Position> {
        self.cursor
    }
}

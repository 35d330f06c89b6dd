// src/widgets/mod.rs
// Modal field widgets the editor hands the screen to while a field is expanded

pub mod calendar;
pub mod path_browser;
pub mod project_picker;
pub mod tag_editor;

use chrono::NaiveDate;
use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect};

use crate::form::{FieldDescriptor, FieldKind, FieldValue};

pub use calendar::CalendarPicker;
pub use path_browser::{PathBrowser, PathMode};
pub use project_picker::ProjectPicker;
pub use tag_editor::TagEditor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetStatus {
    Active,
    Completed,
    Cancelled,
}

/// Contract between the form editor and one modal widget.
pub trait FieldWidget: std::fmt::Debug {
    /// (Re)activate the widget seeded with the field's current value. Seeds the
    /// widget cannot use fall back to its own default.
    fn open(&mut self, seed: &FieldValue, today: NaiveDate);

    /// Returns whether the key was used.
    fn handle_key(&mut self, key: KeyEvent) -> bool;

    fn status(&self) -> WidgetStatus;

    /// Value to copy back into the field. A completed widget may return `None`,
    /// which the editor treats like a cancel.
    fn value(&self) -> Option<FieldValue>;

    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// Builds the widget for an expandable field on its first expansion.
pub trait WidgetFactory: std::fmt::Debug {
    fn create(&self, field: &FieldDescriptor) -> Option<Box<dyn FieldWidget>>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinWidgets;

impl WidgetFactory for BuiltinWidgets {
    fn create(&self, field: &FieldDescriptor) -> Option<Box<dyn FieldWidget>> {
        let title = field.label.as_str();
        match field.kind {
            FieldKind::Date => Some(Box::new(CalendarPicker::new(title))),
            FieldKind::HierarchicalPick => Some(Box::new(ProjectPicker::new(
                title,
                field.constraints.options.clone(),
            ))),
            FieldKind::TagSet => Some(Box::new(TagEditor::new(title))),
            FieldKind::FilePath => Some(Box::new(PathBrowser::new(title, PathMode::File))),
            FieldKind::FolderPath => Some(Box::new(PathBrowser::new(title, PathMode::Folder))),
            FieldKind::PlainText
            | FieldKind::MultilineText
            | FieldKind::Number
            | FieldKind::Action => None,
        }
    }
}

pub(crate) fn is_plain_char(key: &KeyEvent) -> Option<char> {
    use crossterm::event::{KeyCode, KeyModifiers};
    match key.code {
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => Some(c),
        _ => None,
    }
}

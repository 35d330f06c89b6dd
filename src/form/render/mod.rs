// src/form/render/mod.rs
// Both layouts are pure functions over a `FormView` snapshot. `FormEditor::render`
// builds the snapshot, picks the layout and records the caret.

mod inline;
pub mod style;
mod vertical;

pub use inline::render_inline;
pub use vertical::render_vertical;

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    widgets::{Clear, Widget},
};

use super::{FieldDescriptor, FieldKind, FormEditor, LayoutMode};

/// What one field looks like this frame.
#[derive(Debug, Clone)]
pub struct FieldView<'a> {
    pub field: &'a FieldDescriptor,
    pub focused: bool,
    /// Raw buffer for the focused text field, formatted value otherwise
    pub text: String,
    /// Char index of the edit caret inside `text`, for the focused text field only
    pub caret: Option<usize>,
    pub error: Option<&'a str>,
}

impl FieldView<'_> {
    pub fn width(&self) -> u16 {
        self.field.constraints.display_width(self.field.kind)
    }

    pub fn is_action(&self) -> bool {
        self.field.kind == FieldKind::Action
    }
}

/// Immutable snapshot of the editor handed to a layout.
#[derive(Debug, Clone)]
pub struct FormView<'a> {
    pub title: &'a str,
    pub fields: Vec<FieldView<'a>>,
    pub focus: usize,
    /// First whole-form error, the only one painted
    pub form_error: Option<&'a str>,
    pub show_help: bool,
}

impl FormEditor {
    pub fn view(&self) -> FormView<'_> {
        let fields = self
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let focused = index == self.focus_index;
                let typing = focused && field.kind.is_text_like();
                let text = if typing {
                    self.buffers[index].text()
                } else {
                    field.value.as_display_string()
                };
                FieldView {
                    field,
                    focused,
                    text,
                    caret: typing.then(|| self.buffers[index].cursor()),
                    error: self.field_errors.get(&field.name).map(String::as_str),
                }
            })
            .collect();

        FormView {
            title: &self.settings.title,
            fields,
            focus: self.focus_index,
            form_error: self.form_errors.first().map(String::as_str),
            show_help: self.settings.show_help,
        }
    }

    /// Paint one frame into `area`. Runs the debounce poll first, then either the
    /// expanded widget or the current layout.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        self.poll_validation();

        if self.take_full_repaint() {
            Clear.render(area, buf);
        }

        if let Some(index) = self.expansion {
            if let Some(widget) = self.adapters[index].as_ref() {
                widget.render(area, buf);
            }
            self.cursor = None;
            return;
        }

        let view = self.view();
        let cursor = match self.layout {
            LayoutMode::Inline => render_inline(&view, area, buf),
            LayoutMode::Vertical => render_vertical(&view, area, buf),
        };
        self.cursor = cursor;
    }
}

/// Write `text` padded to exactly `width` columns starting at (`x`, `y`).
pub(crate) fn put(buf: &mut Buffer, x: u16, y: u16, text: &str, width: u16, style: ratatui::style::Style) {
    if width == 0 {
        return;
    }
    let padded = crate::util::string::StringUtils::pad_to_width(text, width as usize);
    buf.set_stringn(x, y, padded, width as usize, style);
}

/// Caret column for a view's text drawn in `width` columns, plus the visible text.
pub(crate) fn visible_text(view: &FieldView, width: u16) -> (String, Option<u16>) {
    match view.caret {
        Some(cursor) => {
            let chars: Vec<char> = view.text.chars().collect();
            let (text, col) = crate::util::string::StringUtils::window_around_cursor(&chars, cursor, width as usize);
            (text, Some(col as u16))
        }
        None => (view.text.clone(), None),
    }
}

pub(crate) fn caret_position(x: u16, y: u16, col: Option<u16>) -> Option<Position> {
    col.map(|c| Position::new(x + c, y))
}

// src/form/editing.rs
// Direct (non-modal) editing of the focused field

use crossterm::event::{KeyCode, KeyEvent};

use crate::error::{FormError, Result};
use crate::log_debug;
use crate::widgets::is_plain_char;
use super::extract::extract;
use super::{FieldKind, FieldValue, FormEditor, SEGMENT_SEPARATOR};

impl FormEditor {
    /// Keys for the focused field that are not navigation, commit or open.
    pub(super) fn handle_field_key(&mut self, key: KeyEvent) -> bool {
        let index = self.focus_index;
        let kind = self.fields[index].kind;

        match kind {
            FieldKind::Number => match key.code {
                KeyCode::Left => self.step_number(index, false),
                KeyCode::Right => self.step_number(index, true),
                _ => false,
            },
            _ if kind.is_text_like() => self.edit_buffer(index, key),
            _ => false,
        }
    }

    fn edit_buffer(&mut self, index: usize, key: KeyEvent) -> bool {
        let buffer = &mut self.buffers[index];
        let changed = if let Some(c) = is_plain_char(&key) {
            if let Some(max) = self.fields[index].constraints.max_length {
                if buffer.len() >= max {
                    return true;
                }
            }
            buffer.insert(c);
            true
        } else {
            match key.code {
                KeyCode::Backspace => buffer.backspace(),
                KeyCode::Delete => buffer.delete(),
                KeyCode::Left => {
                    buffer.move_left();
                    self.editing = true;
                    return true;
                }
                KeyCode::Right => {
                    buffer.move_right();
                    self.editing = true;
                    return true;
                }
                KeyCode::Home => {
                    buffer.home();
                    return true;
                }
                KeyCode::End => {
                    buffer.end();
                    return true;
                }
                _ => return false,
            }
        };

        self.editing = true;
        if changed {
            self.after_keystroke(index);
        }
        true
    }

    /// Alt+Enter / Ctrl+J in a multiline field.
    pub(super) fn insert_segment_break(&mut self) -> bool {
        let index = self.focus_index;
        if self.fields[index].kind != FieldKind::MultilineText {
            return false;
        }
        self.buffers[index].insert(SEGMENT_SEPARATOR);
        self.editing = true;
        self.after_keystroke(index);
        true
    }

    /// Step a number by its configured step. A step that would leave
    /// `[min, max]` leaves the value where it is.
    pub fn step_number(&mut self, index: usize, up: bool) -> bool {
        let Some(field) = self.fields.get(index) else {
            return false;
        };
        let Some(current) = field.value.as_number() else {
            return false;
        };

        let step = field.constraints.step();
        let next = field.constraints.snap(if up { current + step } else { current - step });
        if !field.constraints.in_range(next) {
            log_debug!("{} stays at {} ({} out of range)", field.name, current, next);
            return true;
        }

        self.fields[index].value = FieldValue::Number(next);
        self.record_keystroke(index);
        self.notify_field_changed(index);
        true
    }

    /// Bookkeeping after the buffer of `index` changed: clear its advisory error,
    /// restart its debounce timer and re-extract the typed value.
    pub(super) fn after_keystroke(&mut self, index: usize) {
        self.record_keystroke(index);
        self.sync_from_buffer(index);
    }

    pub(super) fn record_keystroke(&mut self, index: usize) {
        self.field_errors.remove(&self.fields[index].name);
        self.last_keystroke[index] = Some(self.clock.now());
    }

    pub(super) fn sync_from_buffer(&mut self, index: usize) {
        let today = self.clock.today();
        let value = extract(&self.fields[index], &self.buffers[index].text(), today);
        if value != self.fields[index].value {
            self.fields[index].value = value;
            self.notify_field_changed(index);
        }
    }

    /// Replace a field's edit buffer as if the operator had typed `text`.
    pub fn set_buffer(&mut self, name: &str, text: &str) -> Result<()> {
        let index = self.index_of(name)?;
        let field = &self.fields[index];
        if !field.kind.has_buffer() {
            return Err(FormError::ValueMismatch {
                name: field.name.clone(),
                kind: field.kind,
            });
        }

        self.buffers[index].set_text(text);
        self.after_keystroke(index);
        Ok(())
    }

    /// Store a typed value directly and reseed the field's buffer from it.
    pub fn set_value(&mut self, name: &str, value: FieldValue) -> Result<()> {
        let index = self.index_of(name)?;
        let field = &self.fields[index];
        if !field.kind.accepts(&value) {
            return Err(FormError::ValueMismatch {
                name: field.name.clone(),
                kind: field.kind,
            });
        }

        self.store_value(index, value);
        self.record_keystroke(index);
        Ok(())
    }

    /// Write `value` into the descriptor and its buffer, notifying on change.
    pub(super) fn store_value(&mut self, index: usize, value: FieldValue) {
        let value = self.fields[index].kind.normalize(value);
        self.buffers[index].set_text(&value.as_display_string());
        if self.fields[index].value != value {
            self.fields[index].value = value;
            self.notify_field_changed(index);
        }
    }

    pub(super) fn index_of(&self, name: &str) -> Result<usize> {
        self.index_by_name
            .get(name)
            .copied()
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }
}

use crate::log_debug;
use super::FormEditor;

impl FormEditor {
    /// Move focus forward, wrapping past the last field.
    pub fn focus_next(&mut self) -> bool {
        self.move_focus(true)
    }

    /// Move focus backward, wrapping past the first field.
    pub fn focus_prev(&mut self) -> bool {
        self.move_focus(false)
    }

    fn move_focus(&mut self, forward: bool) -> bool {
        let count = self.fields.len();
        if count == 0 || self.expansion.is_some() || self.outcome.is_terminal() {
            return false;
        }

        self.focus_index = if forward {
            (self.focus_index + 1) % count
        } else {
            (self.focus_index + count - 1) % count
        };
        self.editing = false;
        self.form_errors.clear();
        if let Some(buffer) = self.buffers.get_mut(self.focus_index) {
            buffer.end();
        }

        log_debug!("Focus -> {} ({})", self.focus_index, self.fields[self.focus_index].name);
        true
    }

    /// Focus a field by name.
    pub fn focus(&mut self, name: &str) -> bool {
        match self.index_by_name.get(name) {
            Some(&index) if self.expansion.is_none() => {
                self.focus_index = index;
                self.editing = false;
                true
            }
            _ => false,
        }
    }
}

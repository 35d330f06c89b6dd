// src/form/validation.rs
// Whole-form validation on commit, and the debounced per-field checks polled
// at the top of every render

use std::time::Duration;

use crate::log_debug;
use super::{FieldDescriptor, FieldKind, FieldValue, FormEditor};

/// The first problem with a field's current value, if any. Shared by the
/// commit-time pass and the advisory per-field pass.
pub fn field_problem(field: &FieldDescriptor) -> Option<String> {
    if field.kind == FieldKind::Action {
        return None;
    }

    if field.required && field.value.is_empty() {
        return Some(format!("{} is required", field.label));
    }

    let c = &field.constraints;
    if let FieldValue::Number(n) = field.value {
        if !c.in_range(n) {
            return Some(match (c.min, c.max) {
                (Some(min), Some(max)) => format!("{} must be between {} and {}", field.label, min, max),
                (Some(min), None) => format!("{} must be at least {}", field.label, min),
                (None, Some(max)) => format!("{} must be at most {}", field.label, max),
                (None, None) => format!("{} is out of range", field.label),
            });
        }
    }

    if let Some(max) = c.max_length {
        if field.value.char_len() > max {
            return Some(format!("{} must be at most {} characters", field.label, max));
        }
    }

    None
}

impl FormEditor {
    /// Re-extract every field and collect problems in field order. Clears the
    /// previous form errors first.
    pub(super) fn validate_form(&mut self) -> bool {
        self.form_errors.clear();
        for index in 0..self.fields.len() {
            if self.fields[index].kind.has_buffer() {
                self.sync_from_buffer(index);
            }
        }

        self.form_errors = self.fields.iter().filter_map(field_problem).collect();
        self.form_errors.is_empty()
    }

    /// Run the advisory check for every field whose last keystroke is older
    /// than the debounce window. Returns whether any field error changed.
    pub fn poll_validation(&mut self) -> bool {
        let now = self.clock.now();
        let window = Duration::from_millis(self.settings.debounce_ms);
        let mut changed = false;

        for index in 0..self.fields.len() {
            let Some(at) = self.last_keystroke[index] else {
                continue;
            };
            if now.saturating_duration_since(at) <= window {
                continue;
            }
            self.last_keystroke[index] = None;

            let field = &self.fields[index];
            let problem = field_problem(field);
            log_debug!("Debounced check on {}: {:?}", field.name, problem);
            let name = field.name.clone();
            let before = match &problem {
                Some(message) => self.field_errors.insert(name, message.clone()),
                None => self.field_errors.remove(&name),
            };
            changed |= before != problem;
        }

        changed
    }
}

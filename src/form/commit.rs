// src/form/commit.rs
// The two terminal transitions

use crate::{log_info, log_warn};
use super::hooks::guarded;
use super::{FormEditor, Outcome};

impl FormEditor {
    /// Validate the whole form and confirm it if nothing is wrong. On failure the
    /// editor stays in navigation with `form_errors` populated.
    pub fn commit(&mut self) -> bool {
        if self.outcome.is_terminal() || self.expansion.is_some() {
            return false;
        }

        self.editing = false;
        if !self.validate_form() {
            log_warn!("Commit refused: {}", self.form_errors.join("; "));
            let messages = self.form_errors.clone();
            let hooks = &mut self.hooks;
            guarded("validation_failed", || hooks.validation_failed(&messages));
            return false;
        }

        self.outcome = Outcome::Confirmed;
        log_info!("Form confirmed");
        let values = self.current_values();
        let hooks = &mut self.hooks;
        guarded("confirmed", || hooks.confirmed(&values));
        true
    }

    /// Abort the session. An open modal widget is closed without asking it.
    pub fn cancel(&mut self) {
        if self.outcome.is_terminal() {
            return;
        }
        if self.expansion.is_some() {
            self.close_expansion();
        }

        self.editing = false;
        self.outcome = Outcome::Cancelled;
        log_info!("Form cancelled");
        let hooks = &mut self.hooks;
        guarded("cancelled", || hooks.cancelled());
    }

    pub(super) fn notify_field_changed(&mut self, index: usize) {
        let field = &self.fields[index];
        let hooks = &mut self.hooks;
        guarded("field_changed", || hooks.field_changed(&field.name, &field.value));
    }
}

#[cfg(test)]
mod tests {
    use crate::form::{EditorMode, FieldDescriptor, FieldKind, FormEditor, Outcome};

    fn editor() -> FormEditor {
        let mut editor = FormEditor::new();
        editor
            .configure(vec![
                FieldDescriptor::new("title", "Title", FieldKind::PlainText).required(),
                FieldDescriptor::new("due", "Due", FieldKind::Date),
            ])
            .unwrap();
        editor
    }

    #[test]
    fn test_required_field_blocks_commit() {
        let mut form = editor();
        assert!(!form.commit());
        assert_eq!(form.form_errors(), ["Title is required".to_string()]);
        assert_eq!(form.mode(), EditorMode::Navigating);
    }

    #[test]
    fn test_errors_clear_at_start_of_next_pass() {
        let mut form = editor();
        form.commit();
        form.set_buffer("title", "Ship").unwrap();
        assert!(form.commit());
        assert!(form.form_errors().is_empty());
        assert_eq!(form.outcome(), Outcome::Confirmed);
    }

    #[test]
    fn test_cancel_closes_expansion() {
        let mut form = editor();
        form.focus("due");
        form.open_expansion();
        form.cancel();
        assert_eq!(form.expanded_field(), None);
        assert_eq!(form.mode(), EditorMode::Cancelled);
        assert!(!form.commit());
    }
}

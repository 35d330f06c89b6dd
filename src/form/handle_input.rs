use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{FieldKind, FormEditor};

/// Ctrl+C aborts the whole form from any state, modal or not.
fn is_abort(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c'))
}

fn is_open(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::F(2) => true,
        KeyCode::Char('o') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn is_segment_break(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => key.modifiers.contains(KeyModifiers::ALT),
        KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

impl FormEditor {
    /// Feed one input event. Returns whether it was consumed.
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        if self.outcome.is_terminal() || key.kind == KeyEventKind::Release {
            return false;
        }

        if is_abort(&key) {
            self.cancel();
            return true;
        }

        if let Some(index) = self.expansion {
            return self.route_to_widget(index, key);
        }

        if key.code == KeyCode::Esc {
            self.cancel();
            return true;
        }
        if self.fields.is_empty() {
            return false;
        }

        if is_segment_break(&key) {
            return self.insert_segment_break();
        }
        if is_open(&key) {
            return self.open_expansion();
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
            KeyCode::Enter => self.handle_enter(),
            _ => self.handle_field_key(key),
        }
    }

    fn handle_enter(&mut self) -> bool {
        let kind = self.fields[self.focus_index].kind;
        match kind {
            FieldKind::Action => {
                self.commit();
                true
            }
            FieldKind::FilePath | FieldKind::FolderPath => self.open_expansion(),
            _ if kind.is_text_like() => {
                self.commit();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{EditorMode, FieldDescriptor, FieldValue, Outcome};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn sample_editor() -> FormEditor {
        let mut editor = FormEditor::new();
        editor
            .configure(vec![
                FieldDescriptor::new("title", "Title", FieldKind::PlainText),
                FieldDescriptor::new("notes", "Notes", FieldKind::MultilineText),
                FieldDescriptor::new("count", "Count", FieldKind::Number).with_range(0.0, 5.0, 1.0),
                FieldDescriptor::new("save", "Save", FieldKind::Action),
            ])
            .unwrap();
        editor
    }

    #[test]
    fn test_typing_enters_inline_editing_and_tab_leaves_it() {
        let mut editor = sample_editor();
        assert_eq!(editor.mode(), EditorMode::Navigating);
        assert!(editor.handle_input(key(KeyCode::Char('H'))));
        assert!(editor.handle_input(key(KeyCode::Char('i'))));
        assert_eq!(editor.mode(), EditorMode::InlineEditing);
        assert_eq!(editor.field("title").unwrap().value, FieldValue::Text("Hi".to_string()));

        assert!(editor.handle_input(key(KeyCode::Tab)));
        assert_eq!(editor.mode(), EditorMode::Navigating);
        assert_eq!(editor.focus_index(), 1);
    }

    #[test]
    fn test_segment_break_in_multiline() {
        let mut editor = sample_editor();
        editor.handle_input(key(KeyCode::Down));
        editor.handle_input(key(KeyCode::Char('a')));
        editor.handle_input(KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT));
        editor.handle_input(key(KeyCode::Char('b')));
        assert_eq!(
            editor.field("notes").unwrap().value,
            FieldValue::Lines(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_enter_on_number_is_ignored() {
        let mut editor = sample_editor();
        editor.focus("count");
        assert!(!editor.handle_input(key(KeyCode::Enter)));
        assert_eq!(editor.outcome(), Outcome::Pending);
    }

    #[test]
    fn test_enter_on_action_confirms() {
        let mut editor = sample_editor();
        editor.focus("save");
        assert!(editor.handle_input(key(KeyCode::Enter)));
        assert_eq!(editor.outcome(), Outcome::Confirmed);
        assert!(!editor.handle_input(key(KeyCode::Tab)));
    }

    #[test]
    fn test_escape_and_ctrl_c_cancel() {
        let mut editor = sample_editor();
        assert!(editor.handle_input(key(KeyCode::Esc)));
        assert_eq!(editor.outcome(), Outcome::Cancelled);

        let mut editor = sample_editor();
        assert!(editor.handle_input(ctrl('c')));
        assert_eq!(editor.mode(), EditorMode::Cancelled);
    }

    #[test]
    fn test_open_on_plain_text_is_not_consumed() {
        let mut editor = sample_editor();
        assert!(!editor.handle_input(KeyEvent::new(KeyCode::F(2), KeyModifiers::NONE)));
        assert_eq!(editor.mode(), EditorMode::Navigating);
    }
}

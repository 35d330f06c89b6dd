use chrono::NaiveDate;
use color_eyre::eyre::eyre;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use form_editor::util::clock::ManualClock;
use form_editor::{
    EditorMode, FieldDescriptor, FieldKind, FieldValue, FieldWidget, FormEditor, FormHooks, LayoutMode, Outcome,
    WidgetFactory, WidgetStatus,
};
use proptest::prelude::*;
use ratatui::{buffer::Buffer, layout::Rect};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
}

fn type_text(editor: &mut FormEditor, text: &str) {
    for c in text.chars() {
        editor.handle_input(key(KeyCode::Char(c)));
    }
}

fn row(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width)
        .map(|x| buf[(x, y)].symbol().to_string())
        .collect()
}

fn task_form(clock: &ManualClock) -> FormEditor {
    let mut editor = FormEditor::new().with_clock(clock.clone());
    editor
        .configure(vec![
            FieldDescriptor::new("title", "Title", FieldKind::PlainText).required(),
            FieldDescriptor::new("due", "Due", FieldKind::Date),
        ])
        .unwrap();
    editor
}

#[test]
fn test_required_title_then_confirm_with_relative_due() {
    let clock = ManualClock::new(today());
    let mut editor = task_form(&clock);

    editor.handle_input(key(KeyCode::Enter));
    assert_eq!(editor.form_errors(), ["Title is required".to_string()]);
    assert_eq!(editor.mode(), EditorMode::Navigating);
    assert_eq!(editor.outcome(), Outcome::Pending);

    type_text(&mut editor, "Ship");
    editor.handle_input(key(KeyCode::Tab));
    type_text(&mut editor, "tomorrow");
    assert_eq!(editor.mode(), EditorMode::InlineEditing);
    editor.handle_input(key(KeyCode::Enter));

    assert_eq!(editor.mode(), EditorMode::Confirmed);
    let values = editor.current_values();
    assert_eq!(values["title"], FieldValue::Text("Ship".to_string()));
    assert_eq!(
        values["due"],
        FieldValue::Date(NaiveDate::from_ymd_opt(2025, 3, 16).unwrap().and_hms_opt(0, 0, 0).unwrap())
    );
    assert_eq!(editor.values_json()["due"], serde_json::json!("2025-03-16T00:00:00"));
}

#[test]
fn test_debounce_runs_once_after_last_keystroke() {
    let clock = ManualClock::new(today());
    let mut editor = task_form(&clock);

    type_text(&mut editor, "x");
    clock.advance_ms(200);
    editor.handle_input(key(KeyCode::Backspace));

    // 200ms after the first keystroke but only 0ms after the last
    clock.advance_ms(200);
    assert!(!editor.poll_validation());
    assert_eq!(editor.field_error("title"), None);

    // Exactly the threshold is not enough
    clock.advance_ms(100);
    assert!(!editor.poll_validation());

    clock.advance_ms(1);
    assert!(editor.poll_validation());
    assert_eq!(editor.field_error("title"), Some("Title is required"));

    // Already ran for that keystroke
    clock.advance_ms(1000);
    assert!(!editor.poll_validation());

    // Typing clears the advisory error at once
    type_text(&mut editor, "y");
    assert_eq!(editor.field_error("title"), None);
    clock.advance_ms(301);
    editor.poll_validation();
    assert_eq!(editor.field_error("title"), None);
}

#[test]
fn test_field_errors_render_only_in_vertical_layout() {
    let clock = ManualClock::new(today());
    let mut editor = task_form(&clock);
    type_text(&mut editor, "x");
    editor.handle_input(key(KeyCode::Backspace));
    clock.advance_ms(301);

    let area = Rect::new(0, 0, 40, 8);
    let mut buf = Buffer::empty(area);
    editor.render(area, &mut buf);
    assert!(row(&buf, 2).contains("↳ Title is required"));

    editor.set_layout(LayoutMode::Inline);
    let area = Rect::new(0, 0, 40, 2);
    let mut buf = Buffer::empty(area);
    editor.render(area, &mut buf);
    assert!(!row(&buf, 0).contains("required"));
    assert!(!row(&buf, 1).contains("required"));
}

#[test]
fn test_shorter_value_overwrites_longer_one() {
    let clock = ManualClock::new(today());
    let mut editor = task_form(&clock);
    editor.set_buffer("title", "Shipping everything").unwrap();

    let area = Rect::new(0, 0, 40, 8);
    let mut buf = Buffer::empty(area);
    editor.render(area, &mut buf);
    assert!(row(&buf, 1).contains("Shipping everything"));

    editor.set_buffer("title", "Ok").unwrap();
    editor.render(area, &mut buf);
    let line = row(&buf, 1);
    assert!(line.contains("Ok"));
    assert!(!line.contains("everything"));
    assert!(!line.contains("ipping"));

    editor.set_layout(LayoutMode::Inline);
    let area = Rect::new(0, 0, 40, 2);
    let mut buf = Buffer::empty(area);
    editor.set_buffer("title", "Shipping everything").unwrap();
    editor.render(area, &mut buf);
    editor.set_buffer("title", "Ok").unwrap();
    editor.render(area, &mut buf);
    assert!(row(&buf, 0).starts_with("Ok "));
    assert!(!row(&buf, 0).contains("ipping"));
}

#[test]
fn test_calendar_expansion_round_trip() {
    let clock = ManualClock::new(today());
    let mut editor = task_form(&clock);
    editor.handle_input(key(KeyCode::Tab));
    editor.handle_input(key(KeyCode::F(2)));
    assert_eq!(editor.mode(), EditorMode::Expanded);
    assert_eq!(editor.expanded_field(), Some("due"));

    // Seeded with today since the buffer is empty
    editor.handle_input(key(KeyCode::Down));
    editor.handle_input(key(KeyCode::Enter));

    assert_eq!(editor.mode(), EditorMode::Navigating);
    assert_eq!(editor.buffer("due").as_deref(), Some("2025-03-22"));
    assert!(editor.take_full_repaint());
    assert!(!editor.take_full_repaint());
}

#[test]
fn test_ctrl_c_aborts_from_expansion() {
    let clock = ManualClock::new(today());
    let mut editor = task_form(&clock);
    editor.focus("due");
    editor.handle_input(ctrl('o'));
    assert_eq!(editor.mode(), EditorMode::Expanded);

    editor.handle_input(ctrl('c'));
    assert_eq!(editor.mode(), EditorMode::Cancelled);
    assert_eq!(editor.expanded_field(), None);
    assert!(!editor.handle_input(key(KeyCode::Tab)));
}

#[test]
fn test_escape_in_widget_cancels_only_the_widget() {
    let clock = ManualClock::new(today());
    let mut editor = task_form(&clock);
    editor.focus("due");
    editor.open_expansion();
    editor.handle_input(key(KeyCode::Esc));
    assert_eq!(editor.mode(), EditorMode::Navigating);

    editor.handle_input(key(KeyCode::Esc));
    assert_eq!(editor.mode(), EditorMode::Cancelled);
}

#[test]
fn test_tag_editor_reentry_keeps_membership() {
    let mut editor = FormEditor::new();
    editor
        .configure(vec![FieldDescriptor::new("tags", "Tags", FieldKind::TagSet)])
        .unwrap();
    type_text(&mut editor, "b, a, bad tag, b, c");
    let before = editor.field("tags").unwrap().value.clone();
    assert_eq!(
        before,
        FieldValue::Tags(vec!["b".to_string(), "a".to_string(), "c".to_string()])
    );

    editor.open_expansion();
    editor.handle_input(key(KeyCode::Enter));
    assert_eq!(editor.mode(), EditorMode::Navigating);
    assert_eq!(editor.field("tags").unwrap().value, before);
    assert_eq!(editor.buffer("tags").as_deref(), Some("b, a, c"));
}

#[derive(Default)]
struct Recorded {
    changes: Vec<String>,
    confirmed: Option<HashMap<String, FieldValue>>,
    failures: Vec<Vec<String>>,
    cancelled: bool,
}

struct RecordingHooks(Rc<RefCell<Recorded>>);

impl FormHooks for RecordingHooks {
    fn field_changed(&mut self, name: &str, _value: &FieldValue) -> color_eyre::Result<()> {
        self.0.borrow_mut().changes.push(name.to_string());
        Ok(())
    }

    fn confirmed(&mut self, values: &HashMap<String, FieldValue>) -> color_eyre::Result<()> {
        self.0.borrow_mut().confirmed = Some(values.clone());
        Ok(())
    }

    fn cancelled(&mut self) -> color_eyre::Result<()> {
        self.0.borrow_mut().cancelled = true;
        Ok(())
    }

    fn validation_failed(&mut self, messages: &[String]) -> color_eyre::Result<()> {
        self.0.borrow_mut().failures.push(messages.to_vec());
        Ok(())
    }
}

#[test]
fn test_hooks_fire_for_each_transition() {
    let recorded = Rc::new(RefCell::new(Recorded::default()));
    let mut editor = FormEditor::new().with_hooks(RecordingHooks(recorded.clone()));
    editor
        .configure(vec![
            FieldDescriptor::new("title", "Title", FieldKind::PlainText).required(),
            FieldDescriptor::new("qty", "Qty", FieldKind::Number).with_range(0.0, 3.0, 1.0),
            FieldDescriptor::new("save", "Save", FieldKind::Action),
        ])
        .unwrap();

    editor.focus("save");
    editor.handle_input(key(KeyCode::Enter));
    assert_eq!(recorded.borrow().failures, vec![vec!["Title is required".to_string()]]);

    editor.focus("qty");
    editor.handle_input(key(KeyCode::Right));
    editor.focus("title");
    type_text(&mut editor, "Go");
    editor.focus("save");
    editor.handle_input(key(KeyCode::Enter));

    let recorded = recorded.borrow();
    assert_eq!(recorded.changes, vec!["qty", "title", "title"]);
    let values = recorded.confirmed.as_ref().unwrap();
    assert_eq!(values["qty"], FieldValue::Number(1.0));
    assert!(!values.contains_key("save"));
    assert!(!recorded.cancelled);
}

struct HostileHooks;

impl FormHooks for HostileHooks {
    fn field_changed(&mut self, _name: &str, _value: &FieldValue) -> color_eyre::Result<()> {
        Err(eyre!("store unavailable"))
    }

    fn confirmed(&mut self, _values: &HashMap<String, FieldValue>) -> color_eyre::Result<()> {
        panic!("confirmed hook crashed");
    }
}

#[test]
fn test_failing_hooks_never_escape() {
    let mut editor = FormEditor::new().with_hooks(HostileHooks);
    editor
        .configure(vec![FieldDescriptor::new("title", "Title", FieldKind::PlainText)])
        .unwrap();

    type_text(&mut editor, "abc");
    assert_eq!(editor.buffer("title").as_deref(), Some("abc"));
    editor.handle_input(key(KeyCode::Enter));
    assert_eq!(editor.outcome(), Outcome::Confirmed);
}

/// Widget that completes on Enter without ever producing a value.
#[derive(Debug, Default)]
struct SilentWidget {
    status: Option<WidgetStatus>,
}

impl FieldWidget for SilentWidget {
    fn open(&mut self, _seed: &FieldValue, _today: NaiveDate) {
        self.status = Some(WidgetStatus::Active);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Enter {
            self.status = Some(WidgetStatus::Completed);
            return true;
        }
        false
    }

    fn status(&self) -> WidgetStatus {
        self.status.unwrap_or(WidgetStatus::Active)
    }

    fn value(&self) -> Option<FieldValue> {
        None
    }

    fn render(&self, _area: Rect, _buf: &mut Buffer) {}
}

#[derive(Debug, Default)]
struct CountingFactory {
    created: Rc<Cell<usize>>,
}

impl WidgetFactory for CountingFactory {
    fn create(&self, _field: &FieldDescriptor) -> Option<Box<dyn FieldWidget>> {
        self.created.set(self.created.get() + 1);
        Some(Box::new(SilentWidget::default()))
    }
}

#[test]
fn test_widgets_are_cached_until_configure() {
    let created = Rc::new(Cell::new(0));
    let clock = ManualClock::new(today());
    let mut editor = FormEditor::new()
        .with_clock(clock.clone())
        .with_widget_factory(CountingFactory { created: created.clone() });
    let fields = vec![
        FieldDescriptor::new("due", "Due", FieldKind::Date)
            .with_value(FieldValue::Date(today().and_hms_opt(0, 0, 0).unwrap())),
    ];
    editor.configure(fields.clone()).unwrap();

    editor.open_expansion();
    editor.handle_input(key(KeyCode::Enter));
    // Completion without a value is a cancel
    assert_eq!(editor.mode(), EditorMode::Navigating);
    assert_eq!(editor.buffer("due").as_deref(), Some("2025-03-15"));

    editor.open_expansion();
    editor.handle_input(key(KeyCode::Enter));
    assert_eq!(created.get(), 1);

    editor.configure(fields).unwrap();
    editor.open_expansion();
    assert_eq!(created.get(), 2);
}

fn any_key() -> impl Strategy<Value = KeyEvent> {
    prop_oneof![
        Just(key(KeyCode::Tab)),
        Just(key(KeyCode::BackTab)),
        Just(key(KeyCode::Up)),
        Just(key(KeyCode::Down)),
        Just(key(KeyCode::Left)),
        Just(key(KeyCode::Right)),
        Just(key(KeyCode::Backspace)),
        Just(key(KeyCode::F(2))),
        Just(key(KeyCode::Enter)),
        Just(key(KeyCode::Esc)),
        Just(key(KeyCode::Char('t'))),
        Just(key(KeyCode::Char('1'))),
    ]
}

proptest! {
    #[test]
    fn test_focus_and_expansion_stay_consistent(keys in prop::collection::vec(any_key(), 0..60)) {
        let clock = ManualClock::new(today());
        let mut editor = FormEditor::new().with_clock(clock);
        editor
            .configure(vec![
                FieldDescriptor::new("title", "Title", FieldKind::PlainText).required(),
                FieldDescriptor::new("due", "Due", FieldKind::Date),
                FieldDescriptor::new("qty", "Qty", FieldKind::Number).with_range(0.0, 5.0, 1.0),
                FieldDescriptor::new("tags", "Tags", FieldKind::TagSet),
            ])
            .unwrap();

        for k in keys {
            editor.handle_input(k);
            prop_assert!(editor.focus_index() < editor.fields().len());
            match editor.expanded_field() {
                Some(name) => {
                    prop_assert_eq!(editor.mode(), EditorMode::Expanded);
                    prop_assert_eq!(name, editor.focused_field().unwrap().name.as_str());
                }
                None => prop_assert_ne!(editor.mode(), EditorMode::Expanded),
            }
            if let FieldValue::Number(n) = editor.field("qty").unwrap().value {
                prop_assert!((0.0..=5.0).contains(&n));
            }
        }
    }
}

mod widget;

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};

use crate::form::FieldValue;
use crate::form::extract::parse_tags;
use super::{is_plain_char, WidgetStatus};

/// Modal list editor for tag sets.
#[derive(Debug)]
pub struct TagEditor {
    title: String,
    tags: Vec<String>,
    input: String,
    selected: usize,
    message: Option<String>,
    status: WidgetStatus,
}

impl TagEditor {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            tags: Vec::new(),
            input: String::new(),
            selected: 0,
            message: None,
            status: WidgetStatus::Active,
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    fn add_from_input(&mut self) {
        let parsed = parse_tags(&self.input);
        if parsed.is_empty() {
            self.message = Some("Tags may only use letters, digits, '_' and '-'".to_string());
        } else {
            for tag in parsed {
                if !self.tags.contains(&tag) {
                    self.tags.push(tag);
                }
            }
            self.selected = self.tags.len().saturating_sub(1);
            self.message = None;
        }
        self.input.clear();
    }

    fn remove_selected(&mut self) {
        if self.selected < self.tags.len() {
            self.tags.remove(self.selected);
            self.selected = self.selected.min(self.tags.len().saturating_sub(1));
        }
    }
}

impl super::FieldWidget for TagEditor {
    fn open(&mut self, seed: &FieldValue, _today: NaiveDate) {
        // Re-normalise through the same rules the inline buffer uses
        self.tags = match seed {
            FieldValue::Tags(tags) => parse_tags(&tags.join(",")),
            _ => Vec::new(),
        };
        self.input.clear();
        self.selected = 0;
        self.message = None;
        self.status = WidgetStatus::Active;
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.status != WidgetStatus::Active {
            return false;
        }

        if let Some(c) = is_plain_char(&key) {
            self.input.push(c);
            return true;
        }

        match key.code {
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                if self.selected + 1 < self.tags.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Delete => self.remove_selected(),
            KeyCode::Enter => {
                if self.input.trim().is_empty() {
                    self.status = WidgetStatus::Completed;
                } else {
                    self.add_from_input();
                }
            }
            KeyCode::Esc => self.status = WidgetStatus::Cancelled,
            _ => return false,
        }
        true
    }

    fn status(&self) -> WidgetStatus {
        self.status
    }

    fn value(&self) -> Option<FieldValue> {
        match self.status {
            WidgetStatus::Completed => Some(FieldValue::Tags(self.tags.clone())),
            _ => None,
        }
    }

    fn render(&self, area: ratatui::layout::Rect, buf: &mut ratatui::buffer::Buffer) {
        self.render_tags(area, buf);
    }
}

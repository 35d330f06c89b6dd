mod widget;

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};

use crate::form::FieldValue;
use super::{is_plain_char, WidgetStatus};

/// Separator between hierarchy levels in candidate names (`Work:Client:Site`).
pub const LEVEL_SEPARATOR: char = ':';

/// Fuzzy picker over a caller-supplied list of hierarchical names.
#[derive(Debug)]
pub struct ProjectPicker {
    title: String,
    candidates: Vec<String>,
    query: String,
    selected: usize,
    chosen: Option<String>,
    status: WidgetStatus,
}

/// Case-insensitive subsequence match.
pub fn fuzzy_match(query: &str, candidate: &str) -> bool {
    let mut wanted = query.chars().flat_map(char::to_lowercase).filter(|c| !c.is_whitespace()).peekable();
    for c in candidate.chars().flat_map(char::to_lowercase) {
        match wanted.peek() {
            Some(w) if *w == c => {
                wanted.next();
            }
            Some(_) => {}
            None => break,
        }
    }
    wanted.peek().is_none()
}

impl ProjectPicker {
    pub fn new(title: &str, candidates: Vec<String>) -> Self {
        Self {
            title: title.to_string(),
            candidates,
            query: String::new(),
            selected: 0,
            chosen: None,
            status: WidgetStatus::Active,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filtered(&self) -> Vec<&str> {
        self.candidates
            .iter()
            .filter(|c| fuzzy_match(&self.query, c))
            .map(String::as_str)
            .collect()
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.filtered().get(self.selected).copied()
    }

    fn move_selection(&mut self, down: bool) {
        let count = self.filtered().len();
        if count == 0 {
            self.selected = 0;
            return;
        }
        self.selected = if down {
            (self.selected + 1) % count
        } else {
            (self.selected + count - 1) % count
        };
    }
}

impl super::FieldWidget for ProjectPicker {
    fn open(&mut self, seed: &FieldValue, _today: NaiveDate) {
        self.query.clear();
        self.chosen = None;
        self.status = WidgetStatus::Active;
        // Highlight the current key when it is one of the candidates, otherwise
        // start from an empty search at the top.
        self.selected = match seed {
            FieldValue::Key(key) => self.candidates.iter().position(|c| c == key).unwrap_or(0),
            _ => 0,
        };
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.status != WidgetStatus::Active {
            return false;
        }

        if let Some(c) = is_plain_char(&key) {
            self.query.push(c);
            self.selected = 0;
            return true;
        }

        match key.code {
            KeyCode::Backspace => {
                self.query.pop();
                self.selected = 0;
            }
            KeyCode::Up => self.move_selection(false),
            KeyCode::Down | KeyCode::Tab => self.move_selection(true),
            KeyCode::Enter => {
                let query = self.query.trim().to_string();
                self.chosen = match self.highlighted() {
                    Some(candidate) => Some(candidate.to_string()),
                    None if !query.is_empty() => Some(query),
                    None => None,
                };
                self.status = WidgetStatus::Completed;
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
        if self.status != WidgetStatus::Completed {
            return None;
        }
        self.chosen.clone().map(FieldValue::Key)
    }

    fn render(&self, area: ratatui::layout::Rect, buf: &mut ratatui::buffer::Buffer) {
        self.render_list(area, buf);
    }
}

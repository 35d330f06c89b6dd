mod widget;

use chrono::{Datelike, Days, Months, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};

use crate::form::FieldValue;
use super::WidgetStatus;

/// Month-grid date picker.
#[derive(Debug)]
pub struct CalendarPicker {
    title: String,
    selected: NaiveDate,
    today: NaiveDate,
    status: WidgetStatus,
}

impl CalendarPicker {
    pub fn new(title: &str) -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            title: title.to_string(),
            selected: today,
            today,
            status: WidgetStatus::Active,
        }
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    fn shift_days(&mut self, days: i64) {
        let moved = if days >= 0 {
            self.selected.checked_add_days(Days::new(days as u64))
        } else {
            self.selected.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        if let Some(date) = moved {
            self.selected = date;
        }
    }

    fn shift_months(&mut self, forward: bool) {
        let moved = if forward {
            self.selected.checked_add_months(Months::new(1))
        } else {
            self.selected.checked_sub_months(Months::new(1))
        };
        if let Some(date) = moved {
            self.selected = date;
        }
    }

    fn first_of_month(&self) -> NaiveDate {
        self.selected.with_day(1).unwrap_or(self.selected)
    }

    fn last_of_month(&self) -> NaiveDate {
        self.first_of_month()
            .checked_add_months(Months::new(1))
            .and_then(|d| d.checked_sub_days(Days::new(1)))
            .unwrap_or(self.selected)
    }
}

impl super::FieldWidget for CalendarPicker {
    fn open(&mut self, seed: &FieldValue, today: NaiveDate) {
        self.today = today;
        self.selected = match seed {
            FieldValue::Date(dt) => dt.date(),
            _ => today,
        };
        self.status = WidgetStatus::Active;
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.status != WidgetStatus::Active {
            return false;
        }

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.shift_days(-1),
            KeyCode::Right | KeyCode::Char('l') => self.shift_days(1),
            KeyCode::Up | KeyCode::Char('k') => self.shift_days(-7),
            KeyCode::Down | KeyCode::Char('j') => self.shift_days(7),
            KeyCode::PageUp => self.shift_months(false),
            KeyCode::PageDown => self.shift_months(true),
            KeyCode::Home => self.selected = self.first_of_month(),
            KeyCode::End => self.selected = self.last_of_month(),
            KeyCode::Char('t') => self.selected = self.today,
            KeyCode::Enter => self.status = WidgetStatus::Completed,
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
        self.selected.and_hms_opt(0, 0, 0).map(FieldValue::Date)
    }

    fn render(&self, area: ratatui::layout::Rect, buf: &mut ratatui::buffer::Buffer) {
        self.render_month(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::FieldWidget;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_unparsable_seed_falls_back_to_today() {
        let mut picker = CalendarPicker::new("Due");
        picker.open(&FieldValue::Empty, d(2025, 3, 15));
        assert_eq!(picker.selected(), d(2025, 3, 15));
    }

    #[test]
    fn test_navigation_and_completion() {
        let mut picker = CalendarPicker::new("Due");
        let seed = FieldValue::Date(d(2025, 1, 31).and_hms_opt(0, 0, 0).unwrap());
        picker.open(&seed, d(2025, 3, 15));

        picker.handle_key(key(KeyCode::PageDown));
        assert_eq!(picker.selected(), d(2025, 2, 28));
        picker.handle_key(key(KeyCode::Down));
        assert_eq!(picker.selected(), d(2025, 3, 7));
        picker.handle_key(key(KeyCode::Left));
        assert_eq!(picker.value(), None);

        picker.handle_key(key(KeyCode::Enter));
        assert_eq!(picker.status(), WidgetStatus::Completed);
        assert_eq!(
            picker.value(),
            Some(FieldValue::Date(d(2025, 3, 6).and_hms_opt(0, 0, 0).unwrap()))
        );
    }

    #[test]
    fn test_escape_cancels_without_value() {
        let mut picker = CalendarPicker::new("Due");
        picker.open(&FieldValue::Empty, d(2025, 3, 15));
        picker.handle_key(key(KeyCode::Esc));
        assert_eq!(picker.status(), WidgetStatus::Cancelled);
        assert_eq!(picker.value(), None);

        // Reopening reactivates
        picker.open(&FieldValue::Empty, d(2025, 3, 15));
        assert_eq!(picker.status(), WidgetStatus::Active);
    }
}

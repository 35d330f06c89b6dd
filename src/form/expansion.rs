// src/form/expansion.rs
// Handing the screen to a field's modal widget and folding its result back

use crossterm::event::KeyEvent;

use crate::widgets::WidgetStatus;
use crate::{log_debug, log_info, log_warn};
use super::extract::extract;
use super::{FieldKind, FieldValue, FormEditor};

impl FormEditor {
    /// Expand the focused field into its modal widget. The widget is created on
    /// the first expansion and reused afterwards.
    pub fn open_expansion(&mut self) -> bool {
        if self.outcome.is_terminal() || self.expansion.is_some() {
            return false;
        }
        let index = self.focus_index;
        let Some(field) = self.fields.get(index) else {
            return false;
        };
        if !field.kind.is_expandable() {
            return false;
        }

        if self.adapters[index].is_none() {
            match self.factory.create(field) {
                Some(widget) => {
                    log_debug!("Created {:?} widget for {}", field.kind, field.name);
                    self.adapters[index] = Some(widget);
                }
                None => {
                    log_warn!("No widget available for {} ({:?})", field.name, field.kind);
                    return false;
                }
            }
        }

        let seed = self.seed_for(index);
        let today = self.clock.today();
        if let Some(widget) = self.adapters[index].as_mut() {
            widget.open(&seed, today);
        }

        self.expansion = Some(index);
        self.editing = false;
        log_info!("Expanded {}", self.fields[index].name);
        true
    }

    /// Value a widget opens with: whatever the buffer currently parses to.
    fn seed_for(&self, index: usize) -> FieldValue {
        let field = &self.fields[index];
        match field.kind {
            FieldKind::FilePath | FieldKind::FolderPath => field.value.clone(),
            _ => extract(field, &self.buffers[index].text(), self.clock.today()),
        }
    }

    pub(super) fn route_to_widget(&mut self, index: usize, key: KeyEvent) -> bool {
        let Some(widget) = self.adapters[index].as_mut() else {
            // Expansion without a widget cannot happen through open_expansion
            self.close_expansion();
            return true;
        };

        let handled = widget.handle_key(key);
        let status = widget.status();
        let value = widget.value();

        match status {
            WidgetStatus::Active => handled,
            WidgetStatus::Completed => {
                match value {
                    Some(value) if self.fields[index].kind.accepts(&value) => {
                        self.store_value(index, value);
                        self.record_keystroke(index);
                        log_info!("{} set from widget", self.fields[index].name);
                    }
                    Some(_) => {
                        log_warn!("Widget for {} returned a value of the wrong kind", self.fields[index].name);
                    }
                    None => log_debug!("Widget for {} completed without a value", self.fields[index].name),
                }
                self.close_expansion();
                true
            }
            WidgetStatus::Cancelled => {
                log_debug!("Widget for {} cancelled", self.fields[index].name);
                self.close_expansion();
                true
            }
        }
    }

    /// Back to navigation. The modal drew over regions the form does not
    /// repaint itself, so a full repaint is requested.
    pub(super) fn close_expansion(&mut self) {
        self.expansion = None;
        self.needs_full_repaint = true;
    }
}

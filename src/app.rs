// src/app.rs
// Demo loop: one frame, then one input event, until the form is confirmed or cancelled

use chrono::Local;
use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    DefaultTerminal, Frame,
};
use std::collections::HashMap;
use std::time::Duration;

use crate::config::FormSpec;
use crate::form::{EditorMode, FieldValue, FormEditor, FormHooks, LayoutMode};
use crate::{log_info, log_warn};

/// How long to wait for input before drawing again, so debounced field errors
/// show up without a keypress.
const FRAME_INTERVAL: Duration = Duration::from_millis(100);

const FORM_WIDTH: u16 = 72;
const MODAL_WIDTH: u16 = 64;
const MODAL_HEIGHT: u16 = 18;

/// Hooks that only log. The embedding screen would persist values here.
#[derive(Debug, Default)]
pub struct LoggingHooks;

impl FormHooks for LoggingHooks {
    fn field_changed(&mut self, name: &str, value: &FieldValue) -> Result<()> {
        log_info!("{} -> {}", name, value.as_display_string());
        Ok(())
    }

    fn confirmed(&mut self, values: &HashMap<String, FieldValue>) -> Result<()> {
        log_info!("Confirmed {} values", values.len());
        Ok(())
    }

    fn cancelled(&mut self) -> Result<()> {
        log_info!("Cancelled by operator");
        Ok(())
    }

    fn validation_failed(&mut self, messages: &[String]) -> Result<()> {
        log_warn!("Validation failed: {}", messages.join("; "));
        Ok(())
    }
}

#[derive(Debug)]
pub struct App {
    editor: FormEditor,
}

impl App {
    pub fn new(spec: FormSpec, inline: bool) -> crate::error::Result<Self> {
        let today = Local::now().date_naive();
        let fields = spec.descriptors(today)?;

        let mut editor = FormEditor::with_settings(spec.settings).with_hooks(LoggingHooks);
        editor.configure(fields)?;
        if inline {
            editor.set_layout(LayoutMode::Inline);
        }
        Ok(Self { editor })
    }

    /// Run until the form reaches a terminal outcome and hand the editor back.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<FormEditor> {
        while !self.editor.outcome().is_terminal() {
            terminal.draw(|frame| self.draw(frame))?;

            if !event::poll(FRAME_INTERVAL)? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                self.editor.handle_input(key);
            }
        }
        Ok(self.editor)
    }

    fn draw(&mut self, frame: &mut Frame) {
        let area = self.form_area(frame.area());
        self.editor.render(area, frame.buffer_mut());
        if let Some(position) = self.editor.cursor_position() {
            frame.set_cursor_position(position);
        }
    }

    fn form_area(&self, screen: Rect) -> Rect {
        if self.editor.mode() == EditorMode::Expanded {
            return centered(screen, MODAL_WIDTH, MODAL_HEIGHT);
        }
        match self.editor.layout() {
            LayoutMode::Inline => Rect { height: screen.height.min(2), ..screen },
            LayoutMode::Vertical => {
                let rows = self.editor.fields().len() as u16 * 2 + 4;
                centered(screen, FORM_WIDTH, rows)
            }
        }
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fits_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let cell = centered(area, 60, 10);
        assert_eq!((cell.width, cell.height), (60, 10));
        assert_eq!(cell.x, 20);
        assert_eq!(cell.y, 15);

        let small = centered(Rect::new(0, 0, 30, 5), 60, 10);
        assert_eq!((small.width, small.height), (30, 5));
    }

    #[test]
    fn test_demo_form_loads() {
        let spec = FormSpec::from_yaml_str(include_str!("../demos/task.yaml")).unwrap();
        let app = App::new(spec, true).unwrap();
        assert_eq!(app.editor.layout(), LayoutMode::Inline);
        assert_eq!(app.editor.fields().len(), 9);
    }
}

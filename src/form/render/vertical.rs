// src/form/render/vertical.rs
// Bordered box with one field per row, error lines under invalid fields and a
// footer holding the first form error and the key help.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Widget},
};

use crate::form::FieldKind;
use crate::util::string::StringUtils;
use super::{caret_position, put, style, visible_text, FieldView, FormView};

const HELP: &str = "[Tab/↑↓] Move  [F2] Open  [Enter] Save  [Esc] Cancel";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Row {
    Field(usize),
    Error(usize),
}

/// Hint shown in an empty, unfocused value cell.
fn placeholder(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Date => "yyyy-mm-dd, today, +3",
        FieldKind::HierarchicalPick => "project:sub",
        FieldKind::TagSet => "tag, tag",
        FieldKind::FilePath | FieldKind::FolderPath => "F2 to browse",
        _ => "",
    }
}

pub fn render_vertical(view: &FormView, area: Rect, buf: &mut Buffer) -> Option<Position> {
    let block = Block::bordered()
        .title(format!(" {} ", view.title))
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    block.render(area, buf);

    if inner.width < 4 || inner.height == 0 {
        return None;
    }

    let help_rows = u16::from(view.show_help && inner.height > 2);
    let error_rows = u16::from(inner.height > help_rows + 1);
    let body_height = inner.height - help_rows - error_rows;

    let longest = view
        .fields
        .iter()
        .map(|f| StringUtils::width(&f.field.label) + 1)
        .max()
        .unwrap_or(0) as u16;
    let label_width = longest.min(inner.width / 3).max(1);
    let value_x = inner.x + label_width + 1;
    let value_width = inner.right().saturating_sub(value_x);

    let mut rows = Vec::with_capacity(view.fields.len());
    for (index, field) in view.fields.iter().enumerate() {
        rows.push(Row::Field(index));
        if field.error.is_some() && !field.is_action() {
            rows.push(Row::Error(index));
        }
    }

    // Scroll just far enough to keep the focused row on screen
    let focus_row = rows
        .iter()
        .position(|r| *r == Row::Field(view.focus))
        .unwrap_or(0);
    let scroll = (focus_row + 1).saturating_sub(body_height as usize);

    let mut cursor = None;
    let mut y = inner.y;
    for row in rows.iter().skip(scroll).take(body_height as usize) {
        match *row {
            Row::Field(index) => {
                let field = &view.fields[index];
                put(buf, inner.x, y, "", label_width + 1, Style::default());
                if field.is_action() {
                    render_button(field, value_x, y, value_width, buf);
                } else {
                    let label = format!("{}:", field.field.label);
                    let label_style = style::dim_unless_focused(field.focused, Style::default().fg(Color::Cyan));
                    put(buf, inner.x, y, &label, label_width, label_style);
                    if let Some(pos) = render_value(field, value_x, y, value_width, buf) {
                        cursor = Some(pos);
                    }
                }
            }
            Row::Error(index) => {
                let message = view.fields[index].error.unwrap_or("");
                put(buf, inner.x, y, "", label_width + 1, Style::default());
                put(buf, value_x, y, &format!("↳ {}", message), value_width, style::error());
            }
        }
        y += 1;
    }

    // Blank rows left over from a longer previous frame
    while y < inner.y + body_height {
        put(buf, inner.x, y, "", inner.width, Style::default());
        y += 1;
    }

    if error_rows > 0 {
        put(buf, inner.x, y, view.form_error.unwrap_or(""), inner.width, style::error());
        y += 1;
    }
    if help_rows > 0 {
        put(buf, inner.x, y, HELP, inner.width, style::help());
    }

    cursor
}

fn render_value(field: &FieldView, x: u16, y: u16, width: u16, buf: &mut Buffer) -> Option<Position> {
    if width == 0 {
        return None;
    }

    if field.focused && field.field.kind == FieldKind::Number {
        put(buf, x, y, &format!("◂ {} ▸", field.text), width, style::focused_value());
        return None;
    }
    if field.focused {
        let (text, col) = visible_text(field, width);
        put(buf, x, y, &text, width, style::focused_value());
        return caret_position(x, y, col);
    }

    if field.text.is_empty() {
        put(buf, x, y, placeholder(field.field.kind), width, style::placeholder());
    } else {
        put(buf, x, y, &field.text, width, Style::default().fg(Color::White));
    }
    None
}

fn render_button(field: &FieldView, x: u16, y: u16, width: u16, buf: &mut Buffer) {
    let text = format!("[ {} ]", field.field.label);
    let button_width = (StringUtils::width(&text) as u16).min(width);
    put(buf, x, y, &text, button_width, style::button(field.focused));
    put(buf, x + button_width, y, "", width - button_width, Style::default());
}

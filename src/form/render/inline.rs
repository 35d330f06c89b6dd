// src/form/render/inline.rs
// One row of fields packed left to right, for editing a record inside a list.
// Field errors are not painted here; only the first form error gets the second row.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
};

use super::{caret_position, put, style, visible_text, FormView};

pub fn render_inline(view: &FormView, area: Rect, buf: &mut Buffer) -> Option<Position> {
    if area.width == 0 || area.height == 0 {
        return None;
    }

    let y = area.y;
    let right = area.right();
    let mut x = area.x;
    let mut cursor = None;

    for field in &view.fields {
        let width = field.width().min(right.saturating_sub(x));
        if width == 0 {
            break;
        }

        if field.is_action() {
            let text = format!("[ {} ]", field.field.label);
            put(buf, x, y, &text, width, style::button(field.focused));
        } else if field.focused {
            let (text, col) = visible_text(field, width);
            put(buf, x, y, &text, width, style::focused_value());
            cursor = caret_position(x, y, col);
        } else if field.text.is_empty() {
            put(buf, x, y, &field.field.label, width, style::placeholder());
        } else {
            put(buf, x, y, &field.text, width, Style::default());
        }

        x += width;
        if x < right {
            put(buf, x, y, " ", 1, Style::default());
            x += 1;
        }
    }

    // Blank whatever the previous frame may have left past the last field
    if x < right {
        put(buf, x, y, "", right - x, Style::default());
    }

    if area.height > 1 {
        put(buf, area.x, y + 1, view.form_error.unwrap_or(""), area.width, style::error());
    }

    cursor
}

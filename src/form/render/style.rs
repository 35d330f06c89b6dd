use ratatui::style::{Color, Modifier, Style, Stylize};

pub fn dim_unless_focused(is_focused: bool, style: Style) -> Style {
    if is_focused { style.bold() } else { style.dim() }
}

pub fn focused_value() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

pub fn placeholder() -> Style {
    Style::default().fg(Color::DarkGray).italic()
}

pub fn error() -> Style {
    Style::default().fg(Color::Red)
}

pub fn button(is_focused: bool) -> Style {
    if is_focused {
        Style::default().fg(Color::Black).bg(Color::Green).bold()
    } else {
        Style::default().fg(Color::Green).bold()
    }
}

pub fn help() -> Style {
    Style::default().fg(Color::Yellow)
}

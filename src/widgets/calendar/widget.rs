use chrono::{Datelike, Weekday};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
};

use super::CalendarPicker;

impl CalendarPicker {
    pub(super) fn render_month(&self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan));

        let first = self.first_of_month();
        let last = self.last_of_month();

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(Span::styled(
            first.format("%B %Y").to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            "Mo Tu We Th Fr Sa Su",
            Style::default().fg(Color::DarkGray),
        )));

        let lead = first.weekday().num_days_from_monday() as usize;
        let mut spans: Vec<Span> = vec![Span::raw("   ".repeat(lead))];
        let mut day = first;
        loop {
            let mut style = Style::default().fg(Color::White);
            if day == self.today {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            if day == self.selected {
                style = style.fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD);
            }
            spans.push(Span::styled(format!("{:>2}", day.day()), style));

            if day.weekday() == Weekday::Sun {
                lines.push(Line::from(std::mem::take(&mut spans)));
            } else {
                spans.push(Span::raw(" "));
            }

            if day == last {
                break;
            }
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
        if !spans.is_empty() {
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[←→] Day  [↑↓] Week  [PgUp/PgDn] Month  [t] Today  [Enter] Pick  [Esc] Cancel",
            Style::default().fg(Color::Yellow),
        )));

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Left)
            .render(area, buf);
    }
}

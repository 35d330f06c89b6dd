use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use super::{LEVEL_SEPARATOR, ProjectPicker};

impl ProjectPicker {
    pub(super) fn render_list(&self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Query
                Constraint::Min(1),    // Candidates
                Constraint::Length(1), // Help
            ])
            .split(inner);

        Paragraph::new(Line::from(vec![
            Span::styled("Search: ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{}_", self.query), Style::default().fg(Color::White)),
        ]))
        .render(chunks[0], buf);

        let filtered = self.filtered();
        let items: Vec<ListItem> = if filtered.is_empty() {
            let hint = if self.query.trim().is_empty() {
                "No projects".to_string()
            } else {
                format!("No match - Enter uses \"{}\"", self.query.trim())
            };
            vec![ListItem::new(hint).style(Style::default().fg(Color::DarkGray))]
        } else {
            filtered
                .iter()
                .map(|name| {
                    let depth = name.matches(LEVEL_SEPARATOR).count();
                    let leaf = name.rsplit(LEVEL_SEPARATOR).next().unwrap_or(name);
                    ListItem::new(format!("{}{}", "  ".repeat(depth), leaf))
                })
                .collect()
        };

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        let mut state = ListState::default();
        if !filtered.is_empty() {
            state.select(Some(self.selected));
        }
        StatefulWidget::render(list, chunks[1], buf, &mut state);

        Paragraph::new("[Type] Filter  [↑↓] Move  [Enter] Pick  [Esc] Cancel")
            .style(Style::default().fg(Color::Yellow))
            .render(chunks[2], buf);
    }
}

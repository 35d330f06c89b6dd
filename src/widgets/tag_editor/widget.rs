use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use super::TagEditor;

impl TagEditor {
    pub(super) fn render_tags(&self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::bordered()
            .title(format!(" {} ({}) ", self.title, self.tags.len()))
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Tags
                Constraint::Length(1), // Input
                Constraint::Length(1), // Message
                Constraint::Length(1), // Help
            ])
            .split(inner);

        let items: Vec<ListItem> = self
            .tags
            .iter()
            .map(|tag| ListItem::new(format!("#{}", tag)))
            .collect();
        let list = List::new(items).highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        let mut state = ListState::default();
        if !self.tags.is_empty() {
            state.select(Some(self.selected));
        }
        StatefulWidget::render(list, chunks[0], buf, &mut state);

        Paragraph::new(Line::from(vec![
            Span::styled("Add: ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{}_", self.input), Style::default().fg(Color::White)),
        ]))
        .render(chunks[1], buf);

        if let Some(message) = &self.message {
            Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Red))
                .render(chunks[2], buf);
        }

        Paragraph::new("[Enter] Add / Done  [↑↓] Select  [Del] Remove  [Esc] Cancel")
            .style(Style::default().fg(Color::Yellow))
            .render(chunks[3], buf);
    }
}

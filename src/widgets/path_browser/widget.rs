use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Clear, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use super::{BrowserRow, PathBrowser, PathMode};

impl PathBrowser {
    pub(super) fn render_listing(&self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::bordered()
            .title(format!(" {} - {} ", self.title, self.dir.display()))
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Listing
                Constraint::Length(1), // Help
            ])
            .split(inner);

        let items: Vec<ListItem> = match &self.error {
            Some(error) => vec![ListItem::new(error.as_str()).style(Style::default().fg(Color::Red))],
            None => self
                .rows()
                .iter()
                .map(|row| match row {
                    BrowserRow::SelectCurrent => ListItem::new("[ select this folder ]")
                        .style(Style::default().fg(Color::Green)),
                    BrowserRow::Parent => ListItem::new("../"),
                    BrowserRow::Entry(i) => {
                        let entry = &self.entries[*i];
                        if entry.is_dir {
                            ListItem::new(format!("{}/", entry.name)).style(Style::default().fg(Color::Blue))
                        } else {
                            ListItem::new(entry.name.as_str())
                        }
                    }
                })
                .collect(),
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
        if self.error.is_none() {
            state.select(Some(self.selected));
        }
        StatefulWidget::render(list, chunks[0], buf, &mut state);

        let help = match self.mode {
            PathMode::File => "[Enter] Open / Pick  [Backspace] Up  [Esc] Cancel",
            PathMode::Folder => "[Enter] Open  [Backspace] Up  [Esc] Cancel",
        };
        Paragraph::new(help)
            .style(Style::default().fg(Color::Yellow))
            .render(chunks[1], buf);
    }
}

mod widget;

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use std::path::{Path, PathBuf};

use crate::form::FieldValue;
use crate::log_warn;
use super::WidgetStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathMode {
    File,
    Folder,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BrowserRow {
    /// Folder mode only: pick the directory being shown
    SelectCurrent,
    Parent,
    Entry(usize),
}

/// Filesystem browser for file and folder fields.
#[derive(Debug)]
pub struct PathBrowser {
    title: String,
    mode: PathMode,
    dir: PathBuf,
    entries: Vec<DirEntry>,
    selected: usize,
    chosen: Option<PathBuf>,
    error: Option<String>,
    status: WidgetStatus,
}

impl PathBrowser {
    pub fn new(title: &str, mode: PathMode) -> Self {
        Self {
            title: title.to_string(),
            mode,
            dir: PathBuf::new(),
            entries: Vec::new(),
            selected: 0,
            chosen: None,
            error: None,
            status: WidgetStatus::Active,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn entries(&self) -> &[DirEntry] {
        &self.entries
    }

    pub fn rows(&self) -> Vec<BrowserRow> {
        let mut rows = Vec::new();
        if self.mode == PathMode::Folder {
            rows.push(BrowserRow::SelectCurrent);
        }
        if self.dir.parent().is_some() {
            rows.push(BrowserRow::Parent);
        }
        rows.extend((0..self.entries.len()).map(BrowserRow::Entry));
        rows
    }

    /// Starting directory and the entry to highlight in it. Paths that do not
    /// exist fall back to the working directory, then the home directory.
    fn resolve_start(seed: &FieldValue) -> (PathBuf, Option<PathBuf>) {
        if let FieldValue::Path(raw) = seed {
            let raw = raw.trim();
            if !raw.is_empty() {
                let path = PathBuf::from(raw);
                if path.is_dir() {
                    return (path, None);
                }
                if let Some(parent) = path.parent().filter(|p| p.is_dir()) {
                    let highlight = path.exists().then(|| path.clone());
                    return (parent.to_path_buf(), highlight);
                }
            }
        }

        let fallback = std::env::current_dir()
            .ok()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("/"));
        (fallback, None)
    }

    fn load(&mut self, dir: PathBuf) {
        self.entries.clear();
        self.selected = 0;
        self.error = None;

        match std::fs::read_dir(&dir) {
            Ok(read) => {
                for entry in read.flatten() {
                    let name = entry.file_name().to_string_lossy().into_owned();
                    if name.starts_with('.') {
                        continue;
                    }
                    let path = entry.path();
                    let is_dir = path.is_dir();
                    if self.mode == PathMode::Folder && !is_dir {
                        continue;
                    }
                    self.entries.push(DirEntry { name, path, is_dir });
                }
                self.entries.sort_by(|a, b| {
                    b.is_dir
                        .cmp(&a.is_dir)
                        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
                });
            }
            Err(e) => {
                log_warn!("Cannot read directory {}: {}", dir.display(), e);
                self.error = Some(format!("Cannot read {}: {}", dir.display(), e));
            }
        }
        self.dir = dir;
    }

    fn go_up(&mut self) {
        if let Some(parent) = self.dir.parent().map(Path::to_path_buf) {
            let previous = self.dir.clone();
            self.load(parent);
            self.highlight(&previous);
        }
    }

    fn highlight(&mut self, path: &Path) {
        let rows = self.rows();
        if let Some(pos) = rows.iter().position(|row| match row {
            BrowserRow::Entry(i) => self.entries[*i].path == path,
            _ => false,
        }) {
            self.selected = pos;
        }
    }

    fn activate(&mut self) {
        let rows = self.rows();
        let Some(row) = rows.get(self.selected).cloned() else {
            return;
        };

        match row {
            BrowserRow::SelectCurrent => {
                self.chosen = Some(self.dir.clone());
                self.status = WidgetStatus::Completed;
            }
            BrowserRow::Parent => self.go_up(),
            BrowserRow::Entry(i) => {
                let entry = self.entries[i].clone();
                if entry.is_dir {
                    self.load(entry.path);
                } else if self.mode == PathMode::File {
                    self.chosen = Some(entry.path);
                    self.status = WidgetStatus::Completed;
                }
            }
        }
    }
}

impl super::FieldWidget for PathBrowser {
    fn open(&mut self, seed: &FieldValue, _today: NaiveDate) {
        let (dir, highlight) = Self::resolve_start(seed);
        self.chosen = None;
        self.status = WidgetStatus::Active;
        self.load(dir);
        if let Some(path) = highlight {
            self.highlight(&path);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.status != WidgetStatus::Active {
            return false;
        }

        let row_count = self.rows().len();
        match key.code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                if self.selected + 1 < row_count {
                    self.selected += 1;
                }
            }
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = row_count.saturating_sub(1),
            KeyCode::Enter => self.activate(),
            KeyCode::Backspace | KeyCode::Left => self.go_up(),
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
        self.chosen
            .as_ref()
            .map(|p| FieldValue::Path(p.to_string_lossy().into_owned()))
    }

    fn render(&self, area: ratatui::layout::Rect, buf: &mut ratatui::buffer::Buffer) {
        self.render_listing(area, buf);
    }
}

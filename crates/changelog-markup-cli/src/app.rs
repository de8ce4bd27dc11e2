use anyhow::{Context, Result};
use changelog_markup_engine::{
    Document, RenderMode,
    media::{image_placeholder_tag, video_placeholder_tag},
};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{text::Line, widgets::ListState};
use std::path::PathBuf;

use crate::view;

pub struct App {
    pub entries: Vec<PathBuf>,
    pub list_state: ListState,
    pub mode: RenderMode,
    /// Source of the selected entry; the live buffer while editing.
    pub source: String,
    pub editing: bool,
    pub dirty: bool,
    pub status: Option<String>,
    preview_max_lines: usize,
}

impl App {
    pub fn new(entries: Vec<PathBuf>, preview_max_lines: usize) -> Self {
        let mut app = Self {
            entries,
            list_state: ListState::default(),
            mode: RenderMode::Full,
            source: String::new(),
            editing: false,
            dirty: false,
            status: None,
            preview_max_lines,
        };

        // Select first entry if available
        if !app.entries.is_empty() {
            app.list_state.select(Some(0));
            app.load_selected();
        }

        app
    }

    pub fn selected_path(&self) -> Option<&PathBuf> {
        self.list_state.selected().and_then(|i| self.entries.get(i))
    }

    /// Re-parses the current source. Runs on every frame, so on every keystroke
    /// while editing.
    pub fn rendered_lines(&self) -> Vec<Line<'static>> {
        let nodes = Document::parse(&self.source).render(self.mode);
        view::document_lines(&nodes, self.preview_max_lines)
    }

    pub fn next_entry(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.entries.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
        self.load_selected();
    }

    pub fn previous_entry(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.entries.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
        self.load_selected();
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            RenderMode::Full => RenderMode::Preview,
            RenderMode::Preview => RenderMode::Full,
        };
    }

    fn load_selected(&mut self) {
        self.dirty = false;
        let Some(path) = self.selected_path().cloned() else {
            self.source.clear();
            return;
        };
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                self.source = content;
                self.status = None;
            }
            Err(e) => {
                log::warn!("failed to read {}: {e}", path.display());
                self.source.clear();
                self.status = Some(format!("Error reading {}: {e}", path.display()));
            }
        }
    }

    pub fn start_editing(&mut self) {
        if self.selected_path().is_some() {
            self.editing = true;
            self.status = Some("Editing: changes render live".to_string());
        }
    }

    /// Leaves edit mode, discarding unsaved changes.
    pub fn cancel_editing(&mut self) {
        self.editing = false;
        self.load_selected();
    }

    pub fn insert_char(&mut self, c: char) {
        self.source.push(c);
        self.dirty = true;
    }

    pub fn backspace(&mut self) {
        if self.source.pop().is_some() {
            self.dirty = true;
        }
    }

    /// Appends `line` as a line of its own, as the editor toolbar does.
    pub fn insert_line(&mut self, line: &str) {
        if !self.source.is_empty() && !self.source.ends_with('\n') {
            self.source.push('\n');
        }
        self.source.push_str(line);
        self.dirty = true;
    }

    pub fn save(&mut self) -> Result<()> {
        let path = self
            .selected_path()
            .cloned()
            .context("no entry selected")?;
        std::fs::write(&path, &self.source)
            .with_context(|| format!("failed to write {}", path.display()))?;
        self.dirty = false;
        self.status = Some(format!("Saved {}", path.display()));
        log::info!("saved {}", path.display());
        Ok(())
    }

    /// Applies one key press. Returns `true` when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        if self.editing {
            self.handle_edit_key(key);
            return false;
        }
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Down | KeyCode::Char('j') => self.next_entry(),
            KeyCode::Up | KeyCode::Char('k') => self.previous_entry(),
            KeyCode::Char('p') => self.toggle_mode(),
            KeyCode::Char('e') => self.start_editing(),
            _ => {}
        }
        false
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') => {
                    if let Err(e) = self.save() {
                        self.status = Some(format!("Error: {e:#}"));
                    }
                }
                KeyCode::Char('g') => self.insert_line(&image_placeholder_tag()),
                KeyCode::Char('y') => self.insert_line(&video_placeholder_tag()),
                _ => {}
            }
            return;
        }
        match key.code {
            KeyCode::Esc => self.cancel_editing(),
            KeyCode::Enter => self.insert_char('\n'),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Char(c) => self.insert_char(c),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app_with_entries(files: &[(&str, &str)]) -> (TempDir, App) {
        let dir = tempfile::tempdir().unwrap();
        let paths = files
            .iter()
            .map(|(name, content)| {
                let path = dir.path().join(name);
                std::fs::write(&path, content).unwrap();
                path
            })
            .collect();
        (dir, App::new(paths, 6))
    }

    #[test]
    fn selects_and_loads_first_entry() {
        let (_dir, app) = app_with_entries(&[("a.md", "# A"), ("b.md", "# B")]);
        assert_eq!(app.list_state.selected(), Some(0));
        assert_eq!(app.source, "# A");
    }

    #[test]
    fn navigation_wraps() {
        let (_dir, mut app) = app_with_entries(&[("a.md", "# A"), ("b.md", "# B")]);
        app.previous_entry();
        assert_eq!(app.source, "# B");
        app.next_entry();
        assert_eq!(app.source, "# A");
    }

    #[test]
    fn empty_entry_list() {
        let mut app = App::new(vec![], 6);
        app.next_entry();
        app.previous_entry();
        app.start_editing();
        assert!(!app.editing);
        assert!(app.source.is_empty());
    }

    #[test]
    fn p_toggles_preview() {
        let (_dir, mut app) = app_with_entries(&[("a.md", "# A")]);
        app.handle_key(key(KeyCode::Char('p')));
        assert_eq!(app.mode, RenderMode::Preview);
        app.handle_key(key(KeyCode::Char('p')));
        assert_eq!(app.mode, RenderMode::Full);
    }

    #[test]
    fn live_edit_rerenders_every_keystroke() {
        let (_dir, mut app) = app_with_entries(&[("a.md", "- a")]);
        app.handle_key(key(KeyCode::Char('e')));
        assert!(app.editing);

        app.handle_key(key(KeyCode::Enter));
        for c in "- b".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(app.source, "- a\n- b");
        assert_eq!(app.rendered_lines().len(), 2);

        // `q` is text while editing
        assert!(!app.handle_key(key(KeyCode::Char('q'))));
        assert_eq!(app.source, "- a\n- bq");
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.source, "- a\n- b");
    }

    #[test]
    fn toolbar_keys_insert_placeholder_lines() {
        let (_dir, mut app) = app_with_entries(&[("a.md", "intro")]);
        app.start_editing();
        app.handle_key(ctrl('g'));
        app.handle_key(ctrl('y'));
        assert_eq!(
            app.source,
            "intro\n[image][][Insert image URL here]\n[video][][Insert YouTube video URL here]"
        );
    }

    #[test]
    fn escape_discards_changes() {
        let (_dir, mut app) = app_with_entries(&[("a.md", "keep")]);
        app.start_editing();
        app.handle_key(key(KeyCode::Char('!')));
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.editing);
        assert!(!app.dirty);
        assert_eq!(app.source, "keep");
    }

    #[test]
    fn ctrl_s_writes_back() {
        let (dir, mut app) = app_with_entries(&[("a.md", "old")]);
        app.start_editing();
        app.handle_key(key(KeyCode::Char('!')));
        app.handle_key(ctrl('s'));
        assert!(!app.dirty);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("a.md")).unwrap(),
            "old!"
        );
    }

    #[test]
    fn q_quits_when_browsing() {
        let mut app = App::new(vec![], 6);
        assert!(app.handle_key(key(KeyCode::Char('q'))));
    }

    #[test]
    fn unreadable_entry_sets_status() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(vec![dir.path().join("missing.md")], 6);
        assert!(app.source.is_empty());
        assert!(app.status.as_deref().unwrap().starts_with("Error reading"));
    }
}

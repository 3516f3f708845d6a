//! In-memory host capabilities for the CLI and tests

use crate::core::candidate::CandidateList;
use crate::core::keycode::{KeyCode, KeyEvent};

use super::{CandidateWindow, TextClient};

/// A text field kept in memory
#[derive(Debug, Default)]
pub struct MemoryClient {
    marked: String,
    committed: String,
}

impl MemoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current marked text
    pub fn marked_text(&self) -> &str {
        &self.marked
    }

    /// Everything inserted so far
    pub fn committed_text(&self) -> &str {
        &self.committed
    }
}

impl TextClient for MemoryClient {
    fn set_marked_text(&mut self, text: &str) {
        self.marked = text.to_string();
    }

    fn insert_text(&mut self, text: &str) {
        self.marked.clear();
        self.committed.push_str(text);
    }
}

/// A candidate window without a UI.
///
/// Up/Down move the highlight and wrap around; Left/Right move by page. The
/// first candidate is highlighted whenever the contents change.
#[derive(Debug, Default)]
pub struct CandidatePanel {
    candidates: CandidateList,
    visible: bool,
    raised: bool,
}

impl CandidatePanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_raised(&self) -> bool {
        self.raised
    }

    pub fn candidates(&self) -> &CandidateList {
        &self.candidates
    }

    /// Rows of the visible page, numbered from 1, with `>` on the highlight.
    /// Annotations are shown when the candidates carry them.
    pub fn page_lines(&self) -> Vec<String> {
        if !self.visible {
            return Vec::new();
        }
        let start = self.candidates.page_start();
        self.candidates
            .page_candidates()
            .iter()
            .enumerate()
            .map(|(i, candidate)| {
                let marker = if start + i == self.candidates.cursor() { '>' } else { ' ' };
                format!("{}{}. {}", marker, i + 1, candidate)
            })
            .collect()
    }
}

impl CandidateWindow for CandidatePanel {
    fn update(&mut self, candidates: CandidateList) {
        self.candidates = candidates;
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
        self.raised = false;
    }

    fn raise(&mut self) {
        self.raised = true;
    }

    fn interpret_key_event(&mut self, key: &KeyEvent) {
        if !self.visible {
            return;
        }
        match key.key_code {
            KeyCode::UP => {
                self.candidates.move_prev();
            }
            KeyCode::DOWN => {
                self.candidates.move_next();
            }
            KeyCode::LEFT => {
                self.candidates.prev_page();
            }
            KeyCode::RIGHT => {
                self.candidates.next_page();
            }
            _ => {}
        }
    }

    fn highlighted(&self) -> Option<&str> {
        if self.visible {
            self.candidates.selected_text()
        } else {
            None
        }
    }
}

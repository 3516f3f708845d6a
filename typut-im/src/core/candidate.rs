//! Candidate list management
//!
//! Handles the list of typographic candidates with pagination support.

use std::fmt;

use typut_engine::build_candidates_annotated;

/// A single candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The candidate text
    pub text: String,
    /// Optional annotation (style name, case variant)
    pub annotation: Option<String>,
}

impl Candidate {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            annotation: None,
        }
    }

    pub fn with_annotation(text: impl Into<String>, annotation: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            annotation: Some(annotation.into()),
        }
    }
}

/// The text, followed by the annotation in parentheses when present
impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.annotation {
            Some(annotation) => write!(f, "{}  ({})", self.text, annotation),
            None => write!(f, "{}", self.text),
        }
    }
}

/// A list of candidates with pagination and selection support
#[derive(Debug, Clone)]
pub struct CandidateList {
    /// All candidates
    candidates: Vec<Candidate>,
    /// Currently selected candidate index
    cursor: usize,
    /// Number of candidates per page
    page_size: usize,
}

impl CandidateList {
    /// Default page size for candidate display
    pub const DEFAULT_PAGE_SIZE: usize = 9;

    /// Create a new candidate list
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates,
            cursor: 0,
            page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }

    /// Build the candidate list for a composition.
    ///
    /// With `annotate`, each case variant and styled rendering carries its label.
    pub fn for_composition(raw: &str, annotate: bool) -> Self {
        let candidates = build_candidates_annotated(raw)
            .into_iter()
            .map(|c| match c.kind.label() {
                Some(label) if annotate => Candidate::with_annotation(c.text, label),
                _ => Candidate::new(c.text),
            })
            .collect();
        Self::new(candidates)
    }

    /// Set the number of candidates per page (at least 1)
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self.cursor = 0;
        self
    }

    /// Get all candidates
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Get the number of candidates
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Get the current cursor position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get the page size
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Get the current page number (0-indexed)
    pub fn current_page(&self) -> usize {
        self.cursor / self.page_size
    }

    /// Get the total number of pages
    pub fn total_pages(&self) -> usize {
        self.candidates.len().div_ceil(self.page_size)
    }

    /// Get the start index of the current page
    pub fn page_start(&self) -> usize {
        self.current_page() * self.page_size
    }

    /// Get the candidates for the current page
    pub fn page_candidates(&self) -> &[Candidate] {
        let start = self.page_start();
        let end = (start + self.page_size).min(self.candidates.len());
        &self.candidates[start..end]
    }

    /// Get the currently selected candidate
    pub fn selected(&self) -> Option<&Candidate> {
        self.candidates.get(self.cursor)
    }

    /// Get the currently selected text
    pub fn selected_text(&self) -> Option<&str> {
        self.selected().map(|c| c.text.as_str())
    }

    /// Move to the next candidate
    pub fn move_next(&mut self) -> bool {
        if self.cursor + 1 < self.candidates.len() {
            self.cursor += 1;
            true
        } else if !self.candidates.is_empty() {
            // Wrap to beginning
            self.cursor = 0;
            true
        } else {
            false
        }
    }

    /// Move to the previous candidate
    pub fn move_prev(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else if !self.candidates.is_empty() {
            // Wrap to end
            self.cursor = self.candidates.len() - 1;
            true
        } else {
            false
        }
    }

    /// Move to the next page
    pub fn next_page(&mut self) -> bool {
        if self.candidates.is_empty() {
            return false;
        }

        let next_page_start = self.page_start() + self.page_size;
        if next_page_start < self.candidates.len() {
            self.cursor = next_page_start;
            true
        } else {
            // Wrap to first page
            self.cursor = 0;
            true
        }
    }

    /// Move to the previous page
    pub fn prev_page(&mut self) -> bool {
        if self.candidates.is_empty() {
            return false;
        }

        let current_page = self.current_page();
        if current_page > 0 {
            self.cursor = (current_page - 1) * self.page_size;
            true
        } else {
            // Wrap to last page
            let last_page = self.total_pages().saturating_sub(1);
            self.cursor = last_page * self.page_size;
            true
        }
    }
}

impl Default for CandidateList {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

//! CompositionBuffer: the not-yet-committed input fragments.
//!
//! Fragments are kept in insertion order so that deletion removes exactly
//! what the last key added, even when that was more than one character.

/// Ordered fragments of marked text.
#[derive(Debug, Clone, Default)]
pub(super) struct CompositionBuffer {
    fragments: Vec<String>,
}

impl CompositionBuffer {
    /// Create a new empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all fragments.
    pub fn clear(&mut self) {
        self.fragments.clear();
    }

    /// Append a fragment.
    pub fn push(&mut self, fragment: &str) {
        self.fragments.push(fragment.to_string());
    }

    /// Remove the last fragment.
    pub fn pop(&mut self) -> Option<String> {
        self.fragments.pop()
    }

    /// True when no fragment is left.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Number of fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Concatenation of all fragments.
    pub fn text(&self) -> String {
        self.fragments.concat()
    }
}

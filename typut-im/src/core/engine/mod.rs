//! Input controller - runs the state machine and owns the composition
//!
//! This module contains the `InputController` struct that classifies key
//! events, feeds them through the `InputState` transition table, and turns the
//! resulting `ClientAction` into host-facing `EngineAction`s.

mod composition;
mod effects;
mod types;

pub use types::*;

use composition::CompositionBuffer;

#[cfg(test)]
mod tests;

use tracing::{debug, trace};

use super::action::UserAction;
use super::candidate::CandidateList;
use super::keycode::KeyEvent;
use super::state::InputState;

/// The main IME controller
pub struct InputController {
    /// Current interaction mode
    state: InputState,
    /// Uncommitted input fragments
    composition: CompositionBuffer,
    /// Candidate most recently reported by the candidate window
    selected_candidate: Option<String>,
    /// Controller configuration
    config: EngineConfig,
}

impl InputController {
    /// Create a new controller
    pub fn new() -> Self {
        Self {
            state: InputState::Idle,
            composition: CompositionBuffer::new(),
            selected_candidate: None,
            config: EngineConfig::default(),
        }
    }

    /// Create with configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::new()
        }
    }

    /// Get the current state
    pub fn state(&self) -> InputState {
        self.state
    }

    /// Get the concatenated composition
    pub fn composition(&self) -> String {
        self.composition.text()
    }

    /// Get the selected candidate, if the candidate window reported one
    pub fn selected_candidate(&self) -> Option<&str> {
        self.selected_candidate.as_deref()
    }

    /// Build the candidate list for the current composition.
    ///
    /// Recomputed on every call.
    pub fn candidates(&self) -> CandidateList {
        CandidateList::for_composition(&self.composition.text(), self.config.annotate_candidates)
            .with_page_size(self.config.page_size)
    }

    /// The candidate window highlighted a different entry
    pub fn candidate_selection_changed(&mut self, text: impl Into<String>) {
        let text = text.into();
        trace!("candidate selection changed: {:?}", text);
        self.selected_candidate = Some(text);
    }

    /// The candidate window confirmed an entry
    pub fn candidate_selected(&mut self, text: impl Into<String>) {
        let text = text.into();
        debug!("candidate selected: {:?}", text);
        self.selected_candidate = Some(text);
    }

    /// Reset to Idle, dropping any composition
    pub fn reset(&mut self) {
        self.state = InputState::Idle;
        self.composition.clear();
        self.selected_candidate = None;
    }

    /// Process a key event
    pub fn process_key(&mut self, key: &KeyEvent) -> EngineResult {
        let action = UserAction::from_key_event(key);
        let (next, client_action) = self.state.transition(&action, key.modifiers.command_key);
        debug!(
            "key {} in {:?}: {:?} -> {:?}",
            key.key_code, self.state, action, client_action
        );
        self.state = next;
        self.perform(client_action, key)
    }
}

impl Default for InputController {
    fn default() -> Self {
        Self::new()
    }
}

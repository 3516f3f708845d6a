//! Type definitions for the input controller

use crate::config::settings::Settings;

use super::super::candidate::CandidateList;
use super::super::keycode::KeyEvent;

/// Action to be performed by the host/UI layer
#[derive(Debug, Clone)]
pub enum EngineAction {
    /// Replace the marked text in the client; empty removes it
    UpdateMarkedText(String),
    /// Fill the candidate window with candidates and show it
    ShowCandidates(CandidateList),
    /// Hide the candidate window
    HideCandidates,
    /// Lift the candidate window above floating panels
    RaiseCandidateWindow,
    /// Insert final text into the client
    Commit(String),
    /// Let the candidate window interpret the original key event
    ForwardToCandidates(KeyEvent),
}

/// Result of processing a key event
#[derive(Debug, Clone, Default)]
pub struct EngineResult {
    /// Whether the key was consumed by the IME
    pub consumed: bool,
    /// Actions to perform
    pub actions: Vec<EngineAction>,
}

impl EngineResult {
    pub fn consumed() -> Self {
        Self {
            consumed: true,
            actions: Vec::new(),
        }
    }

    pub fn not_consumed() -> Self {
        Self {
            consumed: false,
            actions: Vec::new(),
        }
    }

    pub fn with_action(mut self, action: EngineAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Text committed by this result, if any
    pub fn committed(&self) -> Option<&str> {
        self.actions.iter().find_map(|a| match a {
            EngineAction::Commit(text) => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Configuration for the input controller
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Number of candidates per page in the candidate window
    pub page_size: usize,
    /// Attach style and case labels to candidates
    pub annotate_candidates: bool,
}

impl EngineConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            page_size: settings.candidates.page_size,
            annotate_candidates: settings.candidates.annotate,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            page_size: CandidateList::DEFAULT_PAGE_SIZE,
            annotate_candidates: true,
        }
    }
}

//! Host integration
//!
//! The controller never talks to a UI toolkit directly. A host provides a
//! [`TextClient`] (the focused text field) and a [`CandidateWindow`], and a
//! [`Session`] applies the controller's actions to them.

mod headless;

pub use headless::{CandidatePanel, MemoryClient};

use tracing::trace;

use crate::config::Settings;
use crate::core::candidate::CandidateList;
use crate::core::engine::{EngineAction, EngineConfig, InputController};
use crate::core::keycode::KeyEvent;

/// The text field receiving input. Both calls replace the client's whole
/// marked range.
pub trait TextClient {
    /// Show `text` as marked (uncommitted) text; empty text removes it
    fn set_marked_text(&mut self, text: &str);
    /// Insert final text, replacing any marked text
    fn insert_text(&mut self, text: &str);
}

/// The candidate selection UI
pub trait CandidateWindow {
    /// Replace the contents
    fn update(&mut self, candidates: CandidateList);
    fn show(&mut self);
    fn hide(&mut self);
    /// Raise the window level above floating panels
    fn raise(&mut self);
    /// Let the window handle a navigation key
    fn interpret_key_event(&mut self, key: &KeyEvent);
    /// Currently highlighted candidate, for windows that report it synchronously.
    ///
    /// Hosts with asynchronous selection callbacks keep the default and call
    /// [`Session::candidate_selection_changed`] instead.
    fn highlighted(&self) -> Option<&str> {
        None
    }
}

/// A controller bound to one client and one candidate window
pub struct Session<C: TextClient, W: CandidateWindow> {
    controller: InputController,
    client: C,
    window: W,
}

impl<C: TextClient, W: CandidateWindow> Session<C, W> {
    pub fn new(controller: InputController, client: C, window: W) -> Self {
        Self {
            controller,
            client,
            window,
        }
    }

    /// Create a session configured from `settings`
    pub fn with_settings(settings: &Settings, client: C, window: W) -> Self {
        let controller = InputController::with_config(EngineConfig::from_settings(settings));
        Self::new(controller, client, window)
    }

    pub fn controller(&self) -> &InputController {
        &self.controller
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    /// Handle a key event. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let result = self.controller.process_key(key);
        self.apply_actions(result.actions);
        result.consumed
    }

    /// The candidate window highlighted `text`
    pub fn candidate_selection_changed(&mut self, text: &str) {
        self.controller.candidate_selection_changed(text);
    }

    /// The candidate window confirmed `text`
    pub fn candidate_selected(&mut self, text: &str) {
        self.controller.candidate_selected(text);
    }

    fn sync_highlight(&mut self) {
        if let Some(text) = self.window.highlighted() {
            let text = text.to_string();
            self.controller.candidate_selection_changed(text);
        }
    }

    fn apply_actions(&mut self, actions: Vec<EngineAction>) {
        for action in actions {
            trace!("apply {:?}", action);
            match action {
                EngineAction::UpdateMarkedText(text) => self.client.set_marked_text(&text),
                EngineAction::ShowCandidates(candidates) => {
                    self.window.update(candidates);
                    self.window.show();
                    self.sync_highlight();
                }
                EngineAction::HideCandidates => self.window.hide(),
                EngineAction::RaiseCandidateWindow => self.window.raise(),
                EngineAction::Commit(text) => self.client.insert_text(&text),
                EngineAction::ForwardToCandidates(key) => {
                    self.window.interpret_key_event(&key);
                    self.sync_highlight();
                }
            }
        }
    }
}

//! Execution of client actions against the composition

use tracing::{debug, trace};

use super::super::state::ClientAction;
use super::*;

impl InputController {
    /// Insert `text` and drop the composition and selection.
    fn finish_composition(&mut self, text: String) -> EngineResult {
        self.composition.clear();
        self.selected_candidate = None;
        EngineResult::consumed()
            .with_action(EngineAction::UpdateMarkedText(String::new()))
            .with_action(EngineAction::Commit(text))
            .with_action(EngineAction::HideCandidates)
    }

    /// Perform `action`; `key` is the event that triggered it.
    pub(super) fn perform(&mut self, action: ClientAction, key: &KeyEvent) -> EngineResult {
        match action {
            ClientAction::Ignore => EngineResult::not_consumed(),
            ClientAction::ShowCandidateWindow => {
                // The rebuilt list starts unhighlighted; the window reports its
                // highlight again
                self.selected_candidate = None;
                EngineResult::consumed()
                    .with_action(EngineAction::ShowCandidates(self.candidates()))
                    .with_action(EngineAction::RaiseCandidateWindow)
            }
            ClientAction::HideCandidateWindow => {
                EngineResult::consumed().with_action(EngineAction::HideCandidates)
            }
            ClientAction::AppendToMarkedText(text) => {
                self.composition.push(&text);
                EngineResult::consumed()
                    .with_action(EngineAction::HideCandidates)
                    .with_action(EngineAction::UpdateMarkedText(self.composition.text()))
            }
            ClientAction::CommitMarkedText => {
                let text = self.composition.text();
                self.finish_composition(text)
            }
            ClientAction::SubmitSelectedCandidate => {
                let text = match self.selected_candidate.take() {
                    Some(text) => text,
                    None => self.composition.text(),
                };
                self.finish_composition(text)
            }
            ClientAction::InsertText(text) => {
                EngineResult::consumed().with_action(EngineAction::Commit(text))
            }
            ClientAction::RemoveLastMarkedText => {
                let removed = self.composition.pop();
                trace!("removed {:?}, {} fragments left", removed, self.composition.len());
                if self.composition.is_empty() {
                    debug!("composition emptied, forcing Idle");
                    self.state = InputState::Idle;
                }
                EngineResult::consumed()
                    .with_action(EngineAction::HideCandidates)
                    .with_action(EngineAction::UpdateMarkedText(self.composition.text()))
            }
            ClientAction::ForwardToCandidateWindow => EngineResult::consumed()
                .with_action(EngineAction::ForwardToCandidates(key.clone())),
        }
    }
}

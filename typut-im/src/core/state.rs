//! Input state machine
//!
//! Defines the states of the IME and the transition table between them.
//! `transition` is pure: the caller stores the returned state.

use tracing::trace;

use super::action::UserAction;

/// The current interaction mode of the IME
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputState {
    /// No composition, waiting for user to type
    #[default]
    Idle,
    /// Marked text is being built
    Composing,
    /// Candidate window is open and navigable
    Selecting,
}

/// The single effect the controller performs for a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientAction {
    /// Do nothing; the key is not consumed
    Ignore,
    ShowCandidateWindow,
    HideCandidateWindow,
    AppendToMarkedText(String),
    CommitMarkedText,
    SubmitSelectedCandidate,
    InsertText(String),
    RemoveLastMarkedText,
    /// Hand the triggering key event to the candidate window
    ForwardToCandidateWindow,
}

impl InputState {
    /// Check if the engine is in the Idle state
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Compute the next state and the effect for `action`.
    ///
    /// Any action performed with the command modifier held is ignored so that
    /// system shortcuts reach the application.
    pub fn transition(self, action: &UserAction, command_modifier: bool) -> (InputState, ClientAction) {
        use ClientAction as C;
        use InputState as S;
        use UserAction as A;

        if command_modifier {
            return (self, C::Ignore);
        }

        let next = match (self, action) {
            (S::Idle, A::Input(text)) => (S::Composing, C::AppendToMarkedText(text.clone())),
            (S::Idle, _) => (S::Idle, C::Ignore),

            (S::Composing, A::Input(text)) => (S::Composing, C::AppendToMarkedText(text.clone())),
            (S::Composing, A::Space) => (S::Composing, C::AppendToMarkedText(" ".to_string())),
            (S::Composing, A::Delete) => (S::Composing, C::RemoveLastMarkedText),
            (S::Composing, A::Enter) => (S::Idle, C::CommitMarkedText),
            (S::Composing, A::Tab) => (S::Selecting, C::ShowCandidateWindow),
            (S::Composing, A::Escape | A::Navigation(_) | A::Unknown) => (S::Composing, C::Ignore),

            (S::Selecting, A::Input(text)) => (S::Composing, C::AppendToMarkedText(text.clone())),
            (S::Selecting, A::Space) => (S::Composing, C::AppendToMarkedText(" ".to_string())),
            (S::Selecting, A::Tab) => (S::Selecting, C::ShowCandidateWindow),
            (S::Selecting, A::Enter) => (S::Idle, C::SubmitSelectedCandidate),
            (S::Selecting, A::Delete) => (S::Composing, C::RemoveLastMarkedText),
            (S::Selecting, A::Navigation(_)) => (S::Selecting, C::ForwardToCandidateWindow),
            (S::Selecting, A::Escape | A::Unknown) => (S::Selecting, C::Ignore),
        };
        trace!("{:?} --{:?}--> {:?} / {:?}", self, action, next.0, next.1);
        next
    }
}

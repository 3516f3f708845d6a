//! User actions: what a key event means to the composition state machine

use tracing::trace;
use unicode_general_category::{GeneralCategory, get_general_category};

use super::keycode::{KeyCode, KeyEvent};

/// Arrow key direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    Up,
    Down,
    Left,
    Right,
}

/// A classified key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Text to add to the composition
    Input(String),
    Delete,
    Enter,
    Tab,
    Space,
    Escape,
    Navigation(NavigationDirection),
    Unknown,
}

/// Unicode punctuation (general category P*).
///
/// ASCII symbols such as `+`, `$`, `<` and `|` are category S and do not count.
fn is_punctuation(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}

/// Whether typed characters are accepted verbatim as input
fn is_composable(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_alphabetic() || c.is_numeric() || is_punctuation(c))
}

impl UserAction {
    /// Classify a key event.
    ///
    /// Dedicated keys map by key code. Any other key becomes input: its characters
    /// when they are letters, numbers or punctuation, otherwise the key code in
    /// decimal.
    pub fn from_key_event(event: &KeyEvent) -> Self {
        let action = match event.key_code {
            KeyCode::RETURN => UserAction::Enter,
            KeyCode::TAB => UserAction::Tab,
            KeyCode::SPACE => UserAction::Space,
            KeyCode::DELETE => UserAction::Delete,
            KeyCode::ESCAPE => UserAction::Escape,
            KeyCode::LEFT => UserAction::Navigation(NavigationDirection::Left),
            KeyCode::RIGHT => UserAction::Navigation(NavigationDirection::Right),
            KeyCode::DOWN => UserAction::Navigation(NavigationDirection::Down),
            KeyCode::UP => UserAction::Navigation(NavigationDirection::Up),
            KeyCode::JIS_EISU => UserAction::Unknown,
            code => match event.text() {
                Some(text) if is_composable(text) => UserAction::Input(text.to_string()),
                _ => UserAction::Input(code.to_string()),
            },
        };
        trace!("classified {:?} as {:?}", event, action);
        action
    }
}

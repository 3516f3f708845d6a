//! Tests for the input controller

use super::*;
use crate::core::keycode::{KeyCode, KeyModifiers};
use crate::core::state::ClientAction;

mod basic;
mod selecting;

fn press(ch: char) -> KeyEvent {
    KeyEvent::typed(ch)
}

fn press_key(key_code: KeyCode) -> KeyEvent {
    KeyEvent::press(key_code)
}

fn press_cmd(ch: char) -> KeyEvent {
    KeyEvent::typed(ch).with_command()
}

fn type_text(controller: &mut InputController, text: &str) {
    for ch in text.chars() {
        controller.process_key(&press(ch));
    }
}

fn last_marked_text(result: &EngineResult) -> Option<&str> {
    result.actions.iter().rev().find_map(|a| match a {
        EngineAction::UpdateMarkedText(text) => Some(text.as_str()),
        _ => None,
    })
}

fn shown_candidates(result: &EngineResult) -> Option<&CandidateList> {
    result.actions.iter().find_map(|a| match a {
        EngineAction::ShowCandidates(c) => Some(c),
        _ => None,
    })
}

fn hides_candidates(result: &EngineResult) -> bool {
    result
        .actions
        .iter()
        .any(|a| matches!(a, EngineAction::HideCandidates))
}

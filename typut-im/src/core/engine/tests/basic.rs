use super::*;

#[test]
fn test_first_input_starts_composing() {
    let mut controller = InputController::new();

    let result = controller.process_key(&press('a'));
    assert!(result.consumed);
    assert_eq!(controller.state(), InputState::Composing);
    assert_eq!(last_marked_text(&result).unwrap(), "a");
    assert!(hides_candidates(&result));
}

#[test]
fn test_marked_text_is_concatenation() {
    let mut controller = InputController::new();

    type_text(&mut controller, "ab");
    let result = controller.process_key(&press_key(KeyCode::SPACE));
    assert_eq!(last_marked_text(&result).unwrap(), "ab ");
    let result = controller.process_key(&press('C'));
    assert_eq!(last_marked_text(&result).unwrap(), "ab C");
    assert_eq!(controller.composition(), "ab C");
}

#[test]
fn test_enter_commits_marked_text() {
    let mut controller = InputController::new();

    type_text(&mut controller, "hi");
    let result = controller.process_key(&press_key(KeyCode::RETURN));
    assert!(result.consumed);
    assert_eq!(result.committed(), Some("hi"));
    assert!(hides_candidates(&result));
    assert_eq!(last_marked_text(&result), Some(""));
    assert_eq!(controller.state(), InputState::Idle);
    assert_eq!(controller.composition(), "");
}

#[test]
fn test_idle_keys_not_consumed() {
    let mut controller = InputController::new();

    for key in [
        KeyCode::RETURN,
        KeyCode::TAB,
        KeyCode::SPACE,
        KeyCode::DELETE,
        KeyCode::ESCAPE,
        KeyCode::UP,
        KeyCode::JIS_EISU,
    ] {
        let result = controller.process_key(&press_key(key));
        assert!(!result.consumed, "{:?} should pass through", key);
        assert!(result.actions.is_empty());
        assert_eq!(controller.state(), InputState::Idle);
    }
}

#[test]
fn test_escape_keeps_composition() {
    let mut controller = InputController::new();

    type_text(&mut controller, "ab");
    let result = controller.process_key(&press_key(KeyCode::ESCAPE));
    assert!(!result.consumed);
    assert_eq!(controller.state(), InputState::Composing);
    assert_eq!(controller.composition(), "ab");
}

#[test]
fn test_navigation_ignored_while_composing() {
    let mut controller = InputController::new();

    type_text(&mut controller, "ab");
    let result = controller.process_key(&press_key(KeyCode::LEFT));
    assert!(!result.consumed);
    assert_eq!(controller.state(), InputState::Composing);
}

#[test]
fn test_symbol_key_inserts_key_code() {
    let mut controller = InputController::new();

    let result = controller.process_key(&press('+'));
    assert!(result.consumed);
    assert_eq!(controller.composition(), "24");
}

#[test]
fn test_insert_text_leaves_composition() {
    let mut controller = InputController::new();

    type_text(&mut controller, "ab");
    let result = controller.perform(
        ClientAction::InsertText("→".into()),
        &press_key(KeyCode::RETURN),
    );
    assert!(result.consumed);
    assert_eq!(result.committed(), Some("→"));
    assert_eq!(controller.composition(), "ab");
    assert_eq!(controller.state(), InputState::Composing);
}

#[test]
fn test_hide_candidate_window_action() {
    let mut controller = InputController::new();

    let result = controller.perform(ClientAction::HideCandidateWindow, &press_key(KeyCode::TAB));
    assert!(result.consumed);
    assert!(hides_candidates(&result));
    assert_eq!(result.actions.len(), 1);
}

#[test]
fn test_reset() {
    let mut controller = InputController::new();

    type_text(&mut controller, "abc");
    controller.process_key(&press_key(KeyCode::TAB));
    controller.candidate_selection_changed("ABC");
    controller.reset();
    assert_eq!(controller.state(), InputState::Idle);
    assert_eq!(controller.composition(), "");
    assert_eq!(controller.selected_candidate(), None);
}

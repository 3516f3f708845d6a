use super::*;

#[test]
fn test_tab_shows_candidates() {
    let mut controller = InputController::new();

    type_text(&mut controller, "abc");
    let result = controller.process_key(&press_key(KeyCode::TAB));
    assert!(result.consumed);
    assert_eq!(controller.state(), InputState::Selecting);

    let candidates = shown_candidates(&result).unwrap();
    assert_eq!(candidates.candidates()[0].text, "abc");
    assert_eq!(candidates.candidates()[1].text, "Abc");
    assert!(
        result
            .actions
            .iter()
            .any(|a| matches!(a, EngineAction::RaiseCandidateWindow))
    );
}

#[test]
fn test_tab_again_rebuilds_candidates() {
    let mut controller = InputController::new();

    type_text(&mut controller, "ab");
    controller.process_key(&press_key(KeyCode::TAB));
    controller.candidate_selection_changed("AB");
    let result = controller.process_key(&press_key(KeyCode::TAB));
    assert_eq!(controller.state(), InputState::Selecting);
    assert!(shown_candidates(&result).is_some());
    assert_eq!(controller.selected_candidate(), None);
}

#[test]
fn test_reshow_without_reported_highlight_submits_raw() {
    let mut controller = InputController::new();

    type_text(&mut controller, "ab");
    controller.process_key(&press_key(KeyCode::TAB));
    controller.candidate_selection_changed("AB");
    controller.process_key(&press_key(KeyCode::TAB));
    let result = controller.process_key(&press_key(KeyCode::RETURN));
    assert_eq!(result.committed(), Some("ab"));
}

#[test]
fn test_navigation_forwards_original_event() {
    let mut controller = InputController::new();

    type_text(&mut controller, "ab");
    controller.process_key(&press_key(KeyCode::TAB));
    let down = press_key(KeyCode::DOWN);
    let result = controller.process_key(&down);
    assert!(result.consumed);
    assert_eq!(controller.state(), InputState::Selecting);
    assert!(
        result
            .actions
            .iter()
            .any(|a| matches!(a, EngineAction::ForwardToCandidates(k) if *k == down))
    );
}

#[test]
fn test_enter_submits_selected_candidate() {
    let mut controller = InputController::new();

    type_text(&mut controller, "hi");
    controller.process_key(&press_key(KeyCode::TAB));
    controller.candidate_selection_changed("ℎ𝑖");
    let result = controller.process_key(&press_key(KeyCode::RETURN));
    assert_eq!(result.committed(), Some("ℎ𝑖"));
    assert!(hides_candidates(&result));
    assert_eq!(controller.state(), InputState::Idle);
    assert_eq!(controller.composition(), "");
    assert_eq!(controller.selected_candidate(), None);
}

#[test]
fn test_enter_without_selection_submits_raw() {
    let mut controller = InputController::new();

    type_text(&mut controller, "hi");
    controller.process_key(&press_key(KeyCode::TAB));
    let result = controller.process_key(&press_key(KeyCode::RETURN));
    assert_eq!(result.committed(), Some("hi"));
    assert_eq!(controller.state(), InputState::Idle);
}

#[test]
fn test_typing_leaves_selection() {
    let mut controller = InputController::new();

    type_text(&mut controller, "ab");
    controller.process_key(&press_key(KeyCode::TAB));
    let result = controller.process_key(&press('c'));
    assert!(hides_candidates(&result));
    assert_eq!(controller.state(), InputState::Composing);
    assert_eq!(controller.composition(), "abc");

    controller.process_key(&press_key(KeyCode::TAB));
    let result = controller.process_key(&press_key(KeyCode::SPACE));
    assert_eq!(last_marked_text(&result).unwrap(), "abc ");
    assert_eq!(controller.state(), InputState::Composing);
}

#[test]
fn test_escape_and_unknown_ignored_while_selecting() {
    let mut controller = InputController::new();

    type_text(&mut controller, "ab");
    controller.process_key(&press_key(KeyCode::TAB));
    for key in [KeyCode::ESCAPE, KeyCode::JIS_EISU] {
        let result = controller.process_key(&press_key(key));
        assert!(!result.consumed);
        assert_eq!(controller.state(), InputState::Selecting);
    }
}

#[test]
fn test_candidate_selected_overwrites_selection() {
    let mut controller = InputController::new();

    type_text(&mut controller, "ab");
    controller.process_key(&press_key(KeyCode::TAB));
    controller.candidate_selection_changed("Ab");
    controller.candidate_selected("AB");
    assert_eq!(controller.selected_candidate(), Some("AB"));
}

//! Held-button tracking through the agent.

use crate::helpers::agent;
use pointer_agent::{ButtonId, OperationMode};

#[test]
fn test_double_press_keeps_one_entry() {
    let mut agent = agent();
    agent.press(0, 0.0, 0.0);
    agent.press(0, 1.0, 1.0);

    let held = agent.pressed_buttons();
    assert_eq!(held.len(), 1);
    assert_eq!(held.iter().collect::<Vec<_>>(), vec![ButtonId::Left]);
}

#[test]
fn test_multiple_buttons_held() {
    let mut agent = agent();
    agent.press(0, 0.0, 0.0);
    agent.press(2, 0.0, 0.0);

    assert!(agent.is_button_pressed(ButtonId::Left));
    assert!(agent.is_button_pressed(ButtonId::Right));
    assert!(!agent.is_button_pressed(ButtonId::Middle));

    agent.release(0);
    assert!(!agent.is_button_pressed(ButtonId::Left));
    assert!(agent.is_button_pressed(ButtonId::Right));
}

#[test]
fn test_unmapped_button_code_is_ignored() {
    let mut agent = agent();
    agent.press(4, 7.0, 8.0);

    assert!(agent.pressed_buttons().is_empty());
    // The press itself still happens.
    assert_eq!(agent.mode(), OperationMode::DragReady);
    assert_eq!(agent.host().names(), vec!["press"]);

    agent.release(4);
    assert_eq!(agent.mode(), OperationMode::None);
    assert_eq!(agent.host().names(), vec!["press", "release"]);
}

#[test]
fn test_release_of_unheld_button_is_noop() {
    let mut agent = agent();
    agent.press(2, 0.0, 0.0);
    agent.release(1);

    assert!(agent.is_button_pressed(ButtonId::Right));
    assert_eq!(agent.mode(), OperationMode::None);
}

//! Movement deltas, idle moves, focus loss and pass-through channels.

use crate::helpers::{agent, warmed_agent};
use pointer_agent::{ButtonId, CursorStyle, InputScope, OperationMode, Point};

#[test]
fn test_first_move_has_zero_movement() {
    for scope in [InputScope::Local, InputScope::Global] {
        let mut agent = agent();
        agent.move_to(120.0, 80.0, scope);

        assert_eq!(agent.movement(), Point::zero());
        assert_eq!(agent.position(), Point::new(120.0, 80.0));
        assert!(agent.host().events.is_empty());
    }
}

#[test]
fn test_idle_local_move_raises_move_with_delta() {
    let mut agent = warmed_agent(10.0, 10.0);
    agent.move_to(13.0, 6.0, InputScope::Local);

    assert_eq!(agent.host().names(), vec!["move"]);
    let (_, args) = agent.host().last().unwrap();
    assert_eq!(args.movement, Point::new(3.0, -4.0));
    assert_eq!(args.position, Point::new(13.0, 6.0));
}

#[test]
fn test_idle_local_move_without_delta_is_silent() {
    let mut agent = warmed_agent(10.0, 10.0);
    agent.move_to(10.0, 10.0, InputScope::Local);

    assert!(agent.host().events.is_empty());
    assert_eq!(agent.movement(), Point::zero());
}

#[test]
fn test_idle_global_move_tracks_silently() {
    let mut agent = warmed_agent(0.0, 0.0);
    agent.move_to(7.0, 2.0, InputScope::Global);

    assert!(agent.host().events.is_empty());
    assert_eq!(agent.movement(), Point::new(7.0, 2.0));
    assert_eq!(agent.position(), Point::new(7.0, 2.0));
}

#[test]
fn test_duplicate_delivery_yields_one_move() {
    let mut agent = warmed_agent(0.0, 0.0);
    agent.move_to(5.0, 5.0, InputScope::Local);
    agent.move_to(5.0, 5.0, InputScope::Global);

    assert_eq!(agent.host().names(), vec!["move"]);
    assert_eq!(agent.movement(), Point::zero());
}

#[test]
fn test_press_resets_movement() {
    let mut agent = warmed_agent(0.0, 0.0);
    agent.move_to(9.0, 9.0, InputScope::Local);
    assert_eq!(agent.movement(), Point::new(9.0, 9.0));

    agent.press(0, 9.0, 9.0);
    assert_eq!(agent.movement(), Point::zero());
    let (_, args) = agent.host().last().unwrap();
    assert_eq!(args.movement, Point::zero());
}

#[test]
fn test_focus_lost_clears_buttons_in_any_mode() {
    let mut idle = agent();
    idle.focus_lost();
    assert!(idle.pressed_buttons().is_empty());

    let mut ready = agent();
    ready.press(0, 0.0, 0.0);
    ready.press(1, 0.0, 0.0);
    ready.focus_lost();
    assert!(ready.pressed_buttons().is_empty());
    assert_eq!(ready.mode(), OperationMode::DragReady);

    let mut dragging = agent();
    dragging.press(2, 0.0, 0.0);
    dragging.move_to(10.0, 10.0, InputScope::Global);
    dragging.focus_lost();
    assert!(!dragging.is_button_pressed(ButtonId::Right));
    assert!(dragging.host().events.iter().all(|(e, _)| e.name() != "release"));
}

#[test]
fn test_enter_and_leave_are_pass_through() {
    let mut agent = warmed_agent(3.0, 4.0);
    agent.press(0, 3.0, 4.0);
    let before = agent.snapshot();

    agent.enter();
    agent.leave();

    assert_eq!(agent.host().names(), vec!["press", "enter", "leave"]);
    assert_eq!(agent.snapshot(), before);
    assert_eq!(agent.mode(), OperationMode::DragReady);
}

#[test]
fn test_snapshot_is_independent_of_later_moves() {
    let mut agent = warmed_agent(1.0, 1.0);
    agent.move_to(2.0, 3.0, InputScope::Local);
    let taken = agent.snapshot();

    agent.move_to(50.0, 60.0, InputScope::Local);

    assert_eq!(taken.position, Point::new(2.0, 3.0));
    assert_eq!(taken.movement, Point::new(1.0, 2.0));
    let (_, first_move) = agent.host().events[0];
    assert_eq!(first_move, taken);
}

#[test]
fn test_cursor_hint_is_forwarded_only() {
    let mut agent = warmed_agent(1.0, 1.0);
    let before = agent.snapshot();

    agent.set_cursor_hint(CursorStyle::Grabbing);
    agent.set_cursor_hint(CursorStyle::Default);

    assert_eq!(agent.host().cursors, vec![CursorStyle::Grabbing, CursorStyle::Default]);
    assert!(agent.host().events.is_empty());
    assert_eq!(agent.snapshot(), before);
}

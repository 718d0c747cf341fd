//! Wheel channel and default-action suppression.

use crate::helpers::{RecordingHost, agent};
use pointer_agent::{Dispatch, PointerAgent, PointerEvent, PointerSnapshot};

#[test]
fn test_handled_wheel_prevents_default() {
    let mut agent = PointerAgent::new(RecordingHost::consuming(&[PointerEvent::Wheel]));
    let dispatch = agent.wheel(-120.0);

    assert_eq!(dispatch, Dispatch::Handled);
    assert!(dispatch.prevents_default());
}

#[test]
fn test_unhandled_wheel_keeps_default() {
    let mut agent = agent();
    let dispatch = agent.wheel(120.0);

    assert_eq!(dispatch, Dispatch::Unhandled);
    assert!(!dispatch.prevents_default());
}

#[test]
fn test_undecided_handler_keeps_default() {
    let mut agent = PointerAgent::new(|_: PointerEvent, _: &PointerSnapshot| Dispatch::from(None));
    assert!(!agent.wheel(3.0).prevents_default());
}

#[test]
fn test_wheel_delta_reaches_snapshot() {
    let mut agent = agent();
    agent.wheel(-240.0);

    assert_eq!(agent.wheel_delta(), -240.0);
    let (event, args) = agent.host().last().unwrap();
    assert_eq!(*event, PointerEvent::Wheel);
    assert_eq!(args.wheeldelta, -240.0);
}

#[test]
fn test_only_wheel_consumption_matters_for_other_channels() {
    let mut agent = PointerAgent::new(RecordingHost::consuming(&[PointerEvent::Press]));
    assert!(agent.press(0, 0.0, 0.0).is_handled());
    assert!(!agent.wheel(1.0).prevents_default());
}

#[test]
fn test_closure_host_sees_each_event() {
    let mut seen = Vec::new();
    {
        let mut agent = PointerAgent::new(|event: PointerEvent, args: &PointerSnapshot| -> Dispatch {
            seen.push((event, args.wheeldelta));
            (event == PointerEvent::Wheel).into()
        });
        agent.enter();
        assert!(agent.wheel(2.5).prevents_default());
        agent.leave();
    }
    assert_eq!(
        seen,
        vec![
            (PointerEvent::Enter, 0.0),
            (PointerEvent::Wheel, 2.5),
            (PointerEvent::Leave, 2.5),
        ]
    );
}

use std::mem::size_of;

use taggedunion::{dispatch, tagged_union, InactiveAlternative};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeMove {
    pub delta_x: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub code: u16,
    pub down: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scroll {
    pub delta_x: i32,
    pub delta_y: i32,
}

tagged_union! {
    /// Something the mouse did.
    pub union MouseEvent: MouseEventKind {
        RelativeMove,
        Button,
        Scroll,
    }
}

fn describe_by_index(event: &MouseEvent) -> Option<String> {
    dispatch!(*event => {
        RelativeMove(movement) => format!("move {}", movement.delta_x),
        Button(button) => format!("button code={} down={}", button.code, button.down),
        Scroll(scroll) => format!("scroll {} x {}", scroll.delta_x, scroll.delta_y),
        _ => String::from("unknown event"),
    })
}

fn button_code(event: &MouseEvent) -> Option<Option<u16>> {
    dispatch!(*event => {
        Button(button) => Some(button.code),
        _ => None,
    })
}

fn describe_by_kind(event: &MouseEvent) -> Option<String> {
    dispatch!(*event => MouseEventKind {
        RelativeMove(movement) => format!("move {}", movement.delta_x),
        Button(button) => format!("button code={} down={}", button.code, button.down),
        Scroll(scroll) => format!("scroll {} x {}", scroll.delta_x, scroll.delta_y),
    })
}

#[test]
fn button_round_trip() {
    let event = MouseEvent::create(Button { code: 123, down: true });

    assert_eq!(MouseEvent::index_of::<Button, _>(), 1);
    assert_eq!(event.active_index(), MouseEvent::index_of::<Button, _>());
    assert_eq!(event.kind(), Some(MouseEventKind::Button));
    assert_eq!(event.get::<Button, _>(), Ok(&Button { code: 123, down: true }));

    let err: InactiveAlternative = event.get::<RelativeMove, _>().unwrap_err();
    assert_eq!(err.index, 0);
    assert_eq!(err.active, 1);
    assert!(event.get::<Scroll, _>().is_err());
}

#[test]
fn scroll_from_value() {
    let event: MouseEvent = Scroll { delta_x: -2, delta_y: 3 }.into();

    assert_eq!(event.active_index(), MouseEvent::index_of::<Scroll, _>());
    assert_eq!(event.kind(), Some(MouseEventKind::Scroll));
    assert_eq!(event.copied::<Scroll, _>(), Ok(Scroll { delta_x: -2, delta_y: 3 }));
}

#[test]
fn default_is_uninhabited() {
    let event = MouseEvent::default();

    assert_eq!(event.active_index(), MouseEvent::NONE);
    assert_eq!(event.kind(), None);
    assert!(event.get::<RelativeMove, _>().unwrap_err().is_uninhabited());
    assert!(event.get::<Button, _>().is_err());
    assert!(event.get::<Scroll, _>().is_err());
    assert_eq!(describe_by_kind(&event), None);
    assert_eq!(describe_by_index(&event), None);
}

#[test]
fn both_dispatch_styles_agree() {
    let events = [
        MouseEvent::create(RelativeMove { delta_x: 1 }),
        MouseEvent::create(Button { code: 123, down: true }),
        MouseEvent::create(Scroll { delta_x: -2, delta_y: 3 }),
    ];
    let expected = ["move 1", "button code=123 down=true", "scroll -2 x 3"];

    for (event, expected) in events.iter().zip(expected) {
        assert_eq!(describe_by_index(event).as_deref(), Some(expected));
        assert_eq!(describe_by_kind(event).as_deref(), Some(expected));
    }
}

#[test]
fn partial_dispatch_falls_back_only_for_held_events() {
    let button = MouseEvent::create(Button { code: 7, down: false });
    let scroll = MouseEvent::create(Scroll { delta_x: 0, delta_y: 1 });

    assert_eq!(button_code(&button), Some(Some(7)));
    assert_eq!(button_code(&scroll), Some(None));
    assert_eq!(button_code(&MouseEvent::new()), None);
}

#[test]
fn copies_do_not_share_storage() {
    let original = MouseEvent::create(Scroll { delta_x: 5, delta_y: 6 });
    let mut copy = original;

    copy.get_mut::<Scroll, _>().unwrap().delta_y = 60;

    assert_eq!(copy.kind(), original.kind());
    assert_eq!(original.copied::<Scroll, _>(), Ok(Scroll { delta_x: 5, delta_y: 6 }));
    assert_eq!(copy.copied::<Scroll, _>(), Ok(Scroll { delta_x: 5, delta_y: 60 }));
}

#[test]
fn reassignment_changes_kind() {
    let mut event = MouseEvent::from(RelativeMove { delta_x: 4 });
    event.set(Button { code: 1, down: false });

    assert_eq!(event.kind(), Some(MouseEventKind::Button));
    assert!(event.get::<RelativeMove, _>().is_err());
}

#[test]
fn footprint_is_largest_payload_plus_tag() {
    assert_eq!(size_of::<MouseEvent>(), size_of::<Scroll>() + 4);
    assert_eq!(size_of::<<MouseEventKind as taggedunion::Alternatives>::Tag>(), 1);
}

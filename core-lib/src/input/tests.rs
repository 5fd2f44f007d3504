use super::{Button, Controller, ParseButtonError, SERIAL_FRAME_BITS};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use test_case::test_case;

#[test]
fn test_new_controller_has_nothing_pressed() {
    let pad = Controller::new();
    assert_eq!(pad.serialize(), 0);
    assert!(pad.pressed_buttons().is_empty());
}

#[test]
fn test_index_round_trip() {
    for (i, button) in Button::ALL.into_iter().enumerate() {
        assert_eq!(button.to_index(), i);
        assert_eq!(Button::from_index(i), Some(button));
    }
    assert_eq!(Button::from_index(12), None);
}

#[test_case("b", Button::B)]
#[test_case("Y", Button::Y)]
#[test_case("SELECT", Button::Select)]
#[test_case("Start", Button::Start)]
#[test_case("up", Button::Up)]
#[test_case("dOwN", Button::Down)]
#[test_case(" left ", Button::Left)]
#[test_case("right", Button::Right)]
#[test_case("A", Button::A)]
#[test_case("x", Button::X)]
#[test_case("l", Button::L)]
#[test_case("R", Button::R)]
fn test_parse_button_names(name: &str, expected: Button) {
    assert_eq!(name.parse::<Button>(), Ok(expected));
}

#[test_case(""; "empty")]
#[test_case("turbo"; "unknown")]
#[test_case("start2"; "suffix")]
fn test_parse_unknown_name_fails(name: &str) {
    assert_eq!(
        name.parse::<Button>(),
        Err(ParseButtonError(name.to_string()))
    );
}

#[test]
fn test_serialize_bit_order() {
    let mut pad = Controller::new();
    pad.press(Button::B);
    assert_eq!(pad.serialize(), 0x0001);
    pad.press(Button::Right);
    assert_eq!(pad.serialize(), 0x0081);
    pad.press(Button::R);
    assert_eq!(pad.serialize(), 0x0881);
    pad.release(Button::B);
    assert_eq!(pad.serialize(), 0x0880);
}

#[test]
fn test_named_press_and_release() {
    let mut pad = Controller::new();
    pad.press_named("a");
    pad.release_named("b");
    assert!(pad.is_pressed(Button::A));
    assert!(!pad.is_pressed(Button::B));
    assert_eq!(pad.serialize(), 1 << 8);

    pad.release_named("A");
    assert_eq!(pad.serialize(), 0);
}

#[test]
fn test_release_all_clears_state() {
    let mut pad = Controller::new();
    for button in Button::ALL {
        pad.press(button);
    }
    assert_eq!(pad.serialize(), 0x0FFF);
    pad.release_all();
    assert_eq!(pad.serialize(), 0);
    assert!(pad.pressed_buttons().is_empty());
}

#[test]
fn test_unknown_name_is_ignored() {
    let mut pad = Controller::new();
    pad.press_named("start");
    let before = pad.clone();
    pad.press_named("turbo");
    pad.release_named("coin");
    assert_eq!(pad, before);
}

#[test]
fn test_pressed_buttons_snapshot() {
    let mut pad = Controller::new();
    for name in ["r", "up", "start", "x", "b"] {
        pad.press_named(name);
    }
    insta::assert_debug_snapshot!(pad.pressed_buttons(), @r###"
    [
        B,
        Start,
        Up,
        X,
        R,
    ]
    "###);
}

#[test]
fn test_latch_and_serial_read() {
    let mut pad = Controller::new();
    pad.press(Button::B);
    pad.press(Button::Start);
    pad.press(Button::A);
    pad.latch();

    let bits: Vec<u8> = (0..SERIAL_FRAME_BITS).map(|_| pad.read_bit()).collect();
    assert_eq!(bits, vec![1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0]);

    // Register exhausted
    assert_eq!(pad.read_bit(), 1);
    assert_eq!(pad.read_bit(), 1);
}

#[test]
fn test_latch_snapshots_state() {
    let mut pad = Controller::new();
    pad.press(Button::Y);
    pad.latch();
    pad.release(Button::Y);
    assert_eq!(pad.read_bit(), 0);
    assert_eq!(pad.read_bit(), 1);

    // Relatch restarts from B
    pad.latch();
    assert_eq!(pad.read_bit(), 0);
    assert_eq!(pad.read_bit(), 0);
}

proptest! {
    #[test]
    fn test_serial_frame_matches_serialize(mask in 0u16..0x1000) {
        let mut pad = Controller::new();
        for button in Button::ALL {
            if mask & (1 << button.to_index()) != 0 {
                pad.press(button);
            }
        }
        prop_assert_eq!(pad.serialize(), mask);
        prop_assert_eq!(pad.serialize() & 0xF000, 0);

        pad.latch();
        let mut frame = 0u16;
        for i in 0..SERIAL_FRAME_BITS {
            frame |= u16::from(pad.read_bit()) << i;
        }
        prop_assert_eq!(frame, mask);
    }
}

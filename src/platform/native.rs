//=========================================================================
// Native Codes
//
// Integer action/key/button codes shared by the callback layer, and the
// conversions from winit types into them.
//
// Responsibilities:
// - Define native action codes (release / press / repeat)
// - Map winit physical keys to integer key codes
// - Map winit mouse buttons to integer button codes
// - Provide fallbacks (`KeyCode::UNKNOWN`) for unmapped inputs
//
//=========================================================================

//=== External Crates =====================================================

use winit::event::{ElementState, MouseButton as WinitMouseButton};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

//=== Internal Modules ====================================================

use crate::core::input::{KeyCode, MouseCode};

//=== NativeAction ========================================================

/// Action reported alongside a key or mouse-button callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeAction {
    Release = 0,
    Press = 1,
    Repeat = 2,
}

impl NativeAction {
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Returns `None` for codes outside release/press/repeat.
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Release),
            1 => Some(Self::Press),
            2 => Some(Self::Repeat),
            _ => None,
        }
    }

    /// Native action for a winit element state. A held key reported again
    /// by the OS becomes `Repeat`.
    pub(crate) fn from_state(state: ElementState, repeat: bool) -> Self {
        match (state, repeat) {
            (ElementState::Released, _) => Self::Release,
            (ElementState::Pressed, false) => Self::Press,
            (ElementState::Pressed, true) => Self::Repeat,
        }
    }
}

//=== Key Conversion ======================================================
//
// Printable keys map to their ASCII uppercase code; everything else uses
// the extended range starting at 256. Keys without a code here become
// `KeyCode::UNKNOWN`.
//

impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Printable ----------------------------------------------------
            Space => KeyCode::SPACE,
            Quote => KeyCode::APOSTROPHE,
            Comma => KeyCode::COMMA,
            Minus => KeyCode::MINUS,
            Period => KeyCode::PERIOD,
            Slash => KeyCode::SLASH,
            Semicolon => KeyCode::SEMICOLON,
            Equal => KeyCode::EQUAL,
            BracketLeft => KeyCode::LEFT_BRACKET,
            Backslash => KeyCode::BACKSLASH,
            BracketRight => KeyCode::RIGHT_BRACKET,
            Backquote => KeyCode::GRAVE_ACCENT,

            //--- Digits -------------------------------------------------------
            Digit0 => KeyCode::D0, Digit1 => KeyCode::D1,
            Digit2 => KeyCode::D2, Digit3 => KeyCode::D3,
            Digit4 => KeyCode::D4, Digit5 => KeyCode::D5,
            Digit6 => KeyCode::D6, Digit7 => KeyCode::D7,
            Digit8 => KeyCode::D8, Digit9 => KeyCode::D9,

            //--- Letters ------------------------------------------------------
            KeyA => KeyCode::A, KeyB => KeyCode::B, KeyC => KeyCode::C,
            KeyD => KeyCode::D, KeyE => KeyCode::E, KeyF => KeyCode::F,
            KeyG => KeyCode::G, KeyH => KeyCode::H, KeyI => KeyCode::I,
            KeyJ => KeyCode::J, KeyK => KeyCode::K, KeyL => KeyCode::L,
            KeyM => KeyCode::M, KeyN => KeyCode::N, KeyO => KeyCode::O,
            KeyP => KeyCode::P, KeyQ => KeyCode::Q, KeyR => KeyCode::R,
            KeyS => KeyCode::S, KeyT => KeyCode::T, KeyU => KeyCode::U,
            KeyV => KeyCode::V, KeyW => KeyCode::W, KeyX => KeyCode::X,
            KeyY => KeyCode::Y, KeyZ => KeyCode::Z,

            //--- Editing / Navigation -----------------------------------------
            Escape => KeyCode::ESCAPE,
            Enter => KeyCode::ENTER,
            Tab => KeyCode::TAB,
            Backspace => KeyCode::BACKSPACE,
            Insert => KeyCode::INSERT,
            Delete => KeyCode::DELETE,
            ArrowRight => KeyCode::RIGHT,
            ArrowLeft => KeyCode::LEFT,
            ArrowDown => KeyCode::DOWN,
            ArrowUp => KeyCode::UP,
            PageUp => KeyCode::PAGE_UP,
            PageDown => KeyCode::PAGE_DOWN,
            Home => KeyCode::HOME,
            End => KeyCode::END,

            //--- Function Keys ------------------------------------------------
            F1 => KeyCode::F1, F2 => KeyCode::F2, F3 => KeyCode::F3,
            F4 => KeyCode::F4, F5 => KeyCode::F5, F6 => KeyCode::F6,
            F7 => KeyCode::F7, F8 => KeyCode::F8, F9 => KeyCode::F9,
            F10 => KeyCode::F10, F11 => KeyCode::F11, F12 => KeyCode::F12,

            //--- Modifiers ----------------------------------------------------
            ShiftLeft => KeyCode::LEFT_SHIFT,
            ControlLeft => KeyCode::LEFT_CONTROL,
            AltLeft => KeyCode::LEFT_ALT,
            SuperLeft => KeyCode::LEFT_SUPER,
            ShiftRight => KeyCode::RIGHT_SHIFT,
            ControlRight => KeyCode::RIGHT_CONTROL,
            AltRight => KeyCode::RIGHT_ALT,
            SuperRight => KeyCode::RIGHT_SUPER,

            //--- Fallback -----------------------------------------------------
            _ => KeyCode::UNKNOWN,
        }
    }
}

impl From<PhysicalKey> for KeyCode {
    fn from(key: PhysicalKey) -> Self {
        match key {
            PhysicalKey::Code(code) => KeyCode::from(code),
            PhysicalKey::Unidentified(_) => KeyCode::UNKNOWN,
        }
    }
}

//=== Mouse Conversion ====================================================

impl From<WinitMouseButton> for MouseCode {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseCode::LEFT,
            WinitMouseButton::Right => MouseCode::RIGHT,
            WinitMouseButton::Middle => MouseCode::MIDDLE,
            WinitMouseButton::Back => MouseCode::BACK,
            WinitMouseButton::Forward => MouseCode::FORWARD,
            WinitMouseButton::Other(n) => MouseCode(i32::from(n)),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_codes_round_trip() {
        for action in [NativeAction::Release, NativeAction::Press, NativeAction::Repeat] {
            assert_eq!(NativeAction::from_code(action.code()), Some(action));
        }
    }

    #[test]
    fn unknown_action_codes_are_none() {
        assert_eq!(NativeAction::from_code(99), None);
        assert_eq!(NativeAction::from_code(-1), None);
        assert_eq!(NativeAction::from_code(3), None);
    }

    #[test]
    fn element_state_maps_to_action() {
        assert_eq!(NativeAction::from_state(ElementState::Pressed, false), NativeAction::Press);
        assert_eq!(NativeAction::from_state(ElementState::Pressed, true), NativeAction::Repeat);
        assert_eq!(NativeAction::from_state(ElementState::Released, false), NativeAction::Release);
        assert_eq!(NativeAction::from_state(ElementState::Released, true), NativeAction::Release);
    }

    #[test]
    fn letters_map_to_ascii_codes() {
        assert_eq!(KeyCode::from(WinitKeyCode::KeyA), KeyCode(65));
        assert_eq!(KeyCode::from(WinitKeyCode::KeyZ), KeyCode(90));
        assert_eq!(KeyCode::from(WinitKeyCode::Digit0), KeyCode(48));
        assert_eq!(KeyCode::from(WinitKeyCode::Space), KeyCode(32));
    }

    #[test]
    fn unmapped_keys_are_unknown() {
        assert_eq!(KeyCode::from(WinitKeyCode::F24), KeyCode::UNKNOWN);
        assert_eq!(KeyCode::from(WinitKeyCode::NumpadAdd), KeyCode::UNKNOWN);
    }

    #[test]
    fn physical_key_wraps_code() {
        assert_eq!(KeyCode::from(PhysicalKey::Code(WinitKeyCode::Escape)), KeyCode::ESCAPE);
    }

    #[test]
    fn mouse_buttons_map_to_codes() {
        assert_eq!(MouseCode::from(WinitMouseButton::Left), MouseCode(0));
        assert_eq!(MouseCode::from(WinitMouseButton::Right), MouseCode(1));
        assert_eq!(MouseCode::from(WinitMouseButton::Middle), MouseCode(2));
        assert_eq!(MouseCode::from(WinitMouseButton::Other(7)), MouseCode(7));
    }
}

//=========================================================================
// Keyboard Events
//=========================================================================

use std::fmt;

use crate::core::input::KeyCode;

/// Key went down, or is being held and the OS reported a repeat.
///
/// `repeat_count` is `0` for the initial press and `1` for repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPressedEvent {
    pub key: KeyCode,
    pub repeat_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyReleasedEvent {
    pub key: KeyCode,
}

/// Text input. `key` holds the Unicode codepoint, not a physical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyTypedEvent {
    pub key: KeyCode,
}

impl fmt::Display for KeyPressedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyPressedEvent: {} ({} repeats)", self.key, self.repeat_count)
    }
}

impl fmt::Display for KeyReleasedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyReleasedEvent: {}", self.key)
    }
}

impl fmt::Display for KeyTypedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyTypedEvent: {}", self.key)
    }
}

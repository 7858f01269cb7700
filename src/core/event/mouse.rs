//=========================================================================
// Mouse Events
//=========================================================================

use std::fmt;

use crate::core::input::MouseCode;

/// Cursor position in window coordinates (pixels, top-left origin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseMovedEvent {
    pub x: f32,
    pub y: f32,
}

/// Wheel / trackpad scroll offsets. Positive `y_offset` scrolls up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseScrolledEvent {
    pub x_offset: f32,
    pub y_offset: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseButtonPressedEvent {
    pub button: MouseCode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseButtonReleasedEvent {
    pub button: MouseCode,
}

impl fmt::Display for MouseMovedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MouseMovedEvent: {}, {}", self.x, self.y)
    }
}

impl fmt::Display for MouseScrolledEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MouseScrolledEvent: {}, {}", self.x_offset, self.y_offset)
    }
}

impl fmt::Display for MouseButtonPressedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MouseButtonPressedEvent: {}", self.button)
    }
}

impl fmt::Display for MouseButtonReleasedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MouseButtonReleasedEvent: {}", self.button)
    }
}

//=========================================================================
// Input State
//
// Polling snapshot of keyboard and mouse, fed by engine events.
// Lets gameplay code ask "is W held?" instead of tracking key events
// itself.
//
// Responsibilities:
// - Track discrete inputs (pressed / released keys & buttons)
// - Track continuous inputs (cursor position)
// - Flag whether anything changed since the last `reset_changed()`
//
// Notes:
// The state never consumes an event: `on_event` reads it and leaves
// `handled` untouched, so layers still see everything.
//
//=========================================================================

//=== Standard Library Imports ============================================
use std::collections::HashSet;
use std::fmt;

//=== External Crates =====================================================
use log::trace;

//=== Internal Modules ====================================================
use super::{KeyCode, MouseCode};
use crate::core::event::{Event, EventData};

//=== DiscreteInput =======================================================
//
// Binary input elements. Presence in the set means "held".
//
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum DiscreteInput {
    Key(KeyCode),
    Button(MouseCode),
}

//=== InputState ==========================================================

/// Current keyboard/mouse snapshot.
pub struct InputState {
    discrete: HashSet<DiscreteInput>,
    mouse: (f32, f32),
    has_changed: bool,
}

impl InputState {
    //--- Constructor ------------------------------------------------------
    pub fn new() -> Self {
        const DISCRETE_BASE: usize = 128;
        Self {
            discrete: HashSet::with_capacity(DISCRETE_BASE),
            mouse: (0.0, 0.0),
            has_changed: false,
        }
    }

    //--- on_event() -------------------------------------------------------
    //
    // Folds one event into the snapshot. Non-input events are ignored.
    // Key repeats do not count as a change.
    //
    pub fn on_event(&mut self, event: &Event) {
        let changed = match *event.data() {
            //--- Discrete Inputs -----------------------------------------
            EventData::KeyPressed(e) => self.discrete.insert(DiscreteInput::Key(e.key)),
            EventData::KeyReleased(e) => self.discrete.remove(&DiscreteInput::Key(e.key)),
            EventData::MouseButtonPressed(e) => {
                self.discrete.insert(DiscreteInput::Button(e.button))
            }
            EventData::MouseButtonReleased(e) => {
                self.discrete.remove(&DiscreteInput::Button(e.button))
            }

            //--- Continuous Inputs ---------------------------------------
            EventData::MouseMoved(e) => {
                let changed = self.mouse != (e.x, e.y);
                self.mouse = (e.x, e.y);
                changed
            }

            //--- Window --------------------------------------------------
            //
            // Focus loss means release events may never arrive.
            //
            EventData::WindowLostFocus(_) => {
                let changed = !self.discrete.is_empty();
                self.discrete.clear();
                changed
            }

            _ => false,
        };

        if changed {
            trace!(target: "input", "Input state changed by {}", event);
            self.has_changed = true;
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Returns `true` if `key` is currently held.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.discrete.contains(&DiscreteInput::Key(key))
    }

    /// Returns `true` if `button` is currently held.
    pub fn is_mouse_button_pressed(&self, button: MouseCode) -> bool {
        self.discrete.contains(&DiscreteInput::Button(button))
    }

    /// Last known cursor position as `(x, y)`.
    pub fn mouse_position(&self) -> (f32, f32) {
        self.mouse
    }

    pub fn mouse_x(&self) -> f32 {
        self.mouse.0
    }

    pub fn mouse_y(&self) -> f32 {
        self.mouse.1
    }

    /// Whether anything changed since the last `reset_changed()`.
    pub fn has_changed(&self) -> bool {
        self.has_changed
    }

    //--- reset_changed() --------------------------------------------------
    //
    // Called at the end of each frame.
    //
    pub fn reset_changed(&mut self) {
        self.has_changed = false;
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

//=== Debug Trait =========================================================
//
// ```text
// InputState {
//     mouse: (420.0, 255.0),
//     has_changed: true,
//     pressed: ["Key(KeyCode(87))", "Button(MouseCode(0))"]
// }
// ```
//
impl fmt::Debug for InputState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pressed: Vec<_> = self
            .discrete
            .iter()
            .map(|k| format!("{:?}", k))
            .collect();

        f.debug_struct("InputState")
            .field("mouse", &self.mouse)
            .field("has_changed", &self.has_changed)
            .field("pressed", &pressed)
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

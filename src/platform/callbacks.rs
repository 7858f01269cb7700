//=========================================================================
// Platform Callbacks
//=========================================================================
//
// Translates native window/input callbacks into engine events.
//
// Architecture:
//   native callback (context + primitives) → Event → WindowData::emit()
//
// Every callback receives the window's `WindowData` explicitly. Policy is
// construct-or-skip: an action code outside release/press/repeat builds
// no event and never reaches the sink.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;

//=== Internal Dependencies ===============================================

use super::native::NativeAction;
use super::window_data::WindowData;
use crate::core::event::{
    Event, KeyPressedEvent, KeyReleasedEvent, KeyTypedEvent, MouseButtonPressedEvent,
    MouseButtonReleasedEvent, MouseMovedEvent, MouseScrolledEvent, WindowCloseEvent,
    WindowFocusEvent, WindowLostFocusEvent, WindowMovedEvent, WindowResizeEvent,
};
use crate::core::input::{KeyCode, MouseCode};

//--- Helpers -------------------------------------------------------------

fn emit(data: &mut WindowData, event: impl Into<Event>) {
    let mut event = event.into();
    data.emit(&mut event);
}

//=== Window ==============================================================

/// Window resized. Cached size is updated before the sink runs.
pub fn on_resize(data: &mut WindowData, width: u32, height: u32) {
    data.set_size(width, height);
    emit(data, WindowResizeEvent { width, height });
}

pub fn on_close(data: &mut WindowData) {
    emit(data, WindowCloseEvent);
}

pub fn on_focus(data: &mut WindowData, focused: bool) {
    if focused {
        emit(data, WindowFocusEvent);
    } else {
        emit(data, WindowLostFocusEvent);
    }
}

pub fn on_window_pos(data: &mut WindowData, x: i32, y: i32) {
    emit(data, WindowMovedEvent { x, y });
}

//=== Keyboard ============================================================

/// Key callback. Press and repeat both produce `KeyPressed` (repeat count
/// 0 and 1); release produces `KeyReleased`.
pub fn on_key(data: &mut WindowData, key: KeyCode, action: i32) {
    let event: Event = match NativeAction::from_code(action) {
        Some(NativeAction::Press) => KeyPressedEvent { key, repeat_count: 0 }.into(),
        Some(NativeAction::Release) => KeyReleasedEvent { key }.into(),
        Some(NativeAction::Repeat) => KeyPressedEvent { key, repeat_count: 1 }.into(),
        None => {
            trace!(target: "platform::input", "Ignoring key {} with action {}", key, action);
            return;
        }
    };
    emit(data, event);
}

/// Text input, one call per codepoint.
pub fn on_char(data: &mut WindowData, codepoint: char) {
    emit(data, KeyTypedEvent { key: KeyCode(codepoint as i32) });
}

//=== Mouse ===============================================================

/// Mouse button callback. Repeat is not meaningful for buttons and is
/// skipped like any unknown action.
pub fn on_mouse_button(data: &mut WindowData, button: MouseCode, action: i32) {
    let event: Event = match NativeAction::from_code(action) {
        Some(NativeAction::Press) => MouseButtonPressedEvent { button }.into(),
        Some(NativeAction::Release) => MouseButtonReleasedEvent { button }.into(),
        Some(NativeAction::Repeat) | None => {
            trace!(target: "platform::input", "Ignoring button {} with action {}", button, action);
            return;
        }
    };
    emit(data, event);
}

pub fn on_scroll(data: &mut WindowData, x_offset: f64, y_offset: f64) {
    emit(
        data,
        MouseScrolledEvent {
            x_offset: x_offset as f32,
            y_offset: y_offset as f32,
        },
    );
}

pub fn on_cursor_pos(data: &mut WindowData, x: f64, y: f64) {
    emit(
        data,
        MouseMovedEvent {
            x: x as f32,
            y: y as f32,
        },
    );
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::{EventCategory, EventData, EventKind};
    use crate::platform::window_data::WindowProps;
    use std::cell::RefCell;
    use std::rc::Rc;

    //--- Test Helpers -----------------------------------------------------

    type Captured = Rc<RefCell<Vec<Event>>>;

    fn capturing_window() -> (WindowData, Captured) {
        let captured: Captured = Rc::new(RefCell::new(Vec::new()));
        let mut data = WindowData::new(&WindowProps::default());
        let sink = Rc::clone(&captured);
        data.set_event_callback(move |e| sink.borrow_mut().push(e.clone()));
        (data, captured)
    }

    fn only(captured: &Captured) -> Event {
        let events = captured.borrow();
        assert_eq!(events.len(), 1, "Expected exactly one event, got {:?}", *events);
        events[0].clone()
    }

    const PRESS: i32 = NativeAction::Press as i32;
    const RELEASE: i32 = NativeAction::Release as i32;
    const REPEAT: i32 = NativeAction::Repeat as i32;

    //=====================================================================
    // Keyboard
    //=====================================================================

    #[test]
    fn key_press_produces_pressed_with_zero_repeats() {
        let (mut data, captured) = capturing_window();
        on_key(&mut data, KeyCode(65), PRESS);

        let event = only(&captured);
        assert_eq!(
            event.get::<KeyPressedEvent>(),
            Some(&KeyPressedEvent { key: KeyCode(65), repeat_count: 0 })
        );
    }

    #[test]
    fn key_repeat_produces_pressed_with_one_repeat() {
        let (mut data, captured) = capturing_window();
        on_key(&mut data, KeyCode(65), REPEAT);

        let event = only(&captured);
        assert_eq!(
            event.get::<KeyPressedEvent>(),
            Some(&KeyPressedEvent { key: KeyCode(65), repeat_count: 1 })
        );
    }

    #[test]
    fn key_release_produces_released() {
        let (mut data, captured) = capturing_window();
        on_key(&mut data, KeyCode(65), RELEASE);

        let event = only(&captured);
        assert_eq!(event.get::<KeyReleasedEvent>(), Some(&KeyReleasedEvent { key: KeyCode(65) }));
    }

    #[test]
    fn unknown_key_action_is_skipped() {
        let (mut data, captured) = capturing_window();
        on_key(&mut data, KeyCode(65), 99);
        assert!(captured.borrow().is_empty());
    }

    #[test]
    fn char_produces_typed() {
        let (mut data, captured) = capturing_window();
        on_char(&mut data, 'a');

        let event = only(&captured);
        assert_eq!(event.get::<KeyTypedEvent>(), Some(&KeyTypedEvent { key: KeyCode(97) }));
        assert!(event.is_in_category(EventCategory::KEYBOARD));
    }

    //=====================================================================
    // Mouse
    //=====================================================================

    #[test]
    fn mouse_press_and_release() {
        let (mut data, captured) = capturing_window();
        on_mouse_button(&mut data, MouseCode(0), PRESS);
        on_mouse_button(&mut data, MouseCode(0), RELEASE);

        let events = captured.borrow();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[0].get::<MouseButtonPressedEvent>(),
            Some(&MouseButtonPressedEvent { button: MouseCode(0) })
        );
        assert_eq!(
            events[1].get::<MouseButtonReleasedEvent>(),
            Some(&MouseButtonReleasedEvent { button: MouseCode(0) })
        );
    }

    #[test]
    fn mouse_repeat_and_unknown_actions_are_skipped() {
        let (mut data, captured) = capturing_window();
        on_mouse_button(&mut data, MouseCode(0), REPEAT);
        on_mouse_button(&mut data, MouseCode(0), 42);
        assert!(captured.borrow().is_empty());
    }

    #[test]
    fn scroll_uses_scrolled_kind() {
        let (mut data, captured) = capturing_window();
        on_scroll(&mut data, 0.0, -2.0);

        let event = only(&captured);
        assert_eq!(event.kind(), EventKind::MouseScrolled);
        assert_eq!(
            event.data(),
            &EventData::MouseScrolled(MouseScrolledEvent { x_offset: 0.0, y_offset: -2.0 })
        );
    }

    #[test]
    fn cursor_pos_produces_moved() {
        let (mut data, captured) = capturing_window();
        on_cursor_pos(&mut data, 12.5, 40.0);

        let event = only(&captured);
        assert_eq!(event.get::<MouseMovedEvent>(), Some(&MouseMovedEvent { x: 12.5, y: 40.0 }));
    }

    //=====================================================================
    // Window
    //=====================================================================

    #[test]
    fn resize_updates_cache_and_emits() {
        let (mut data, captured) = capturing_window();
        on_resize(&mut data, 800, 600);

        assert_eq!(data.size(), (800, 600));
        let event = only(&captured);
        assert_eq!(
            event.get::<WindowResizeEvent>(),
            Some(&WindowResizeEvent { width: 800, height: 600 })
        );
    }

    #[test]
    fn close_emits_close() {
        let (mut data, captured) = capturing_window();
        on_close(&mut data);
        assert_eq!(only(&captured).kind(), EventKind::WindowClose);
    }

    #[test]
    fn focus_emits_focus_or_lost_focus() {
        let (mut data, captured) = capturing_window();
        on_focus(&mut data, true);
        on_focus(&mut data, false);

        let kinds: Vec<_> = captured.borrow().iter().map(Event::kind).collect();
        assert_eq!(kinds, vec![EventKind::WindowFocus, EventKind::WindowLostFocus]);
    }

    #[test]
    fn window_pos_emits_moved() {
        let (mut data, captured) = capturing_window();
        on_window_pos(&mut data, -10, 25);
        assert_eq!(
            only(&captured).get::<WindowMovedEvent>(),
            Some(&WindowMovedEvent { x: -10, y: 25 })
        );
    }

    #[test]
    fn events_reach_sink_unhandled() {
        let (mut data, captured) = capturing_window();
        on_close(&mut data);
        on_key(&mut data, KeyCode::A, PRESS);
        assert!(captured.borrow().iter().all(|e| !e.handled));
    }

    #[test]
    fn callbacks_without_sink_do_not_panic() {
        let mut data = WindowData::new(&WindowProps::default());
        on_resize(&mut data, 1, 1);
        on_key(&mut data, KeyCode::A, PRESS);
        on_scroll(&mut data, 1.0, 1.0);
        assert_eq!(data.size(), (1, 1));
    }
}

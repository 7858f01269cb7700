//=========================================================================
// Event Dispatcher
//=========================================================================
//
// Routes one borrowed event to typed handlers.
//
// A layer's `on_event` typically wraps the incoming event once and calls
// `dispatch` for every variant it cares about:
//
// ```
// use cinder_engine::core::event::{
//     Event, EventDispatcher, KeyPressedEvent, WindowResizeEvent,
// };
//
// fn on_event(event: &mut Event) {
//     let mut dispatcher = EventDispatcher::new(event);
//     dispatcher.dispatch::<WindowResizeEvent, _>(|e| e.width == 0);
//     dispatcher.dispatch::<KeyPressedEvent, _>(|e| e.repeat_count > 0);
// }
// ```
//
// Kinds are unique per variant, so at most one handler runs per event.
//
//=========================================================================

use super::{Event, EventVariant};

/// Borrows a single [`Event`] for the length of one dispatch sequence.
pub struct EventDispatcher<'a> {
    event: &'a mut Event,
}

impl<'a> EventDispatcher<'a> {
    pub fn new(event: &'a mut Event) -> Self {
        Self { event }
    }

    /// Calls `handler` if the event is a `V`.
    ///
    /// On a match the handler runs exactly once, its result is stored in
    /// `event.handled` and `true` is returned. On a mismatch nothing is
    /// touched and `false` is returned.
    pub fn dispatch<V, F>(&mut self, handler: F) -> bool
    where
        V: EventVariant,
        F: FnOnce(&V) -> bool,
    {
        let (handled, data) = self.event.parts_mut();
        match V::from_data(data) {
            Some(variant) => {
                *handled = handler(variant);
                true
            }
            None => false,
        }
    }

    /// Read access to the wrapped event (kind, flags, `handled`).
    pub fn event(&self) -> &Event {
        self.event
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::{
        KeyPressedEvent, KeyReleasedEvent, MouseButtonPressedEvent, MouseMovedEvent,
        MouseScrolledEvent, WindowCloseEvent, WindowResizeEvent,
    };
    use crate::core::input::{KeyCode, MouseCode};

    //=====================================================================
    // Mismatch
    //=====================================================================

    #[test]
    fn mismatch_returns_false_without_calling_handler() {
        let mut event: Event = WindowCloseEvent.into();
        let mut called = false;

        let matched = EventDispatcher::new(&mut event)
            .dispatch::<WindowResizeEvent, _>(|_| {
                called = true;
                true
            });

        assert!(!matched);
        assert!(!called);
        assert!(!event.handled);
    }

    #[test]
    fn mismatch_leaves_handled_untouched() {
        let mut event: Event = KeyReleasedEvent { key: KeyCode::A }.into();
        event.handled = true;

        let matched = EventDispatcher::new(&mut event)
            .dispatch::<KeyPressedEvent, _>(|_| false);

        assert!(!matched);
        assert!(event.handled, "Non-matching dispatch must not reset handled");
    }

    #[test]
    fn scrolled_does_not_match_moved_handler() {
        let mut event: Event = MouseScrolledEvent { x_offset: 0.0, y_offset: 1.0 }.into();
        let matched = EventDispatcher::new(&mut event)
            .dispatch::<MouseMovedEvent, _>(|_| true);
        assert!(!matched);
    }

    //=====================================================================
    // Match
    //=====================================================================

    #[test]
    fn match_calls_handler_once_and_stores_result() {
        for result in [true, false] {
            let mut event: Event = WindowResizeEvent { width: 800, height: 600 }.into();
            let mut calls = 0;

            let matched = EventDispatcher::new(&mut event)
                .dispatch::<WindowResizeEvent, _>(|e| {
                    calls += 1;
                    assert_eq!((e.width, e.height), (800, 600));
                    result
                });

            assert!(matched);
            assert_eq!(calls, 1);
            assert_eq!(event.handled, result);
        }
    }

    #[test]
    fn handler_receives_typed_payload() {
        let mut event: Event = MouseButtonPressedEvent { button: MouseCode::RIGHT }.into();
        let mut seen = None;

        EventDispatcher::new(&mut event)
            .dispatch::<MouseButtonPressedEvent, _>(|e| {
                seen = Some(e.button);
                false
            });

        assert_eq!(seen, Some(MouseCode::RIGHT));
    }

    //=====================================================================
    // Chained Dispatch
    //=====================================================================

    #[test]
    fn chained_dispatch_fires_exactly_one_handler() {
        let mut event: Event = KeyPressedEvent { key: KeyCode::A, repeat_count: 0 }.into();
        let mut fired = Vec::new();

        let mut dispatcher = EventDispatcher::new(&mut event);
        dispatcher.dispatch::<WindowCloseEvent, _>(|_| { fired.push("close"); true });
        dispatcher.dispatch::<KeyPressedEvent, _>(|_| { fired.push("pressed"); true });
        dispatcher.dispatch::<KeyReleasedEvent, _>(|_| { fired.push("released"); true });
        dispatcher.dispatch::<MouseMovedEvent, _>(|_| { fired.push("moved"); true });

        assert!(dispatcher.event().handled);
        assert_eq!(fired, vec!["pressed"]);
    }
}

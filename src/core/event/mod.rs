//=========================================================================
// Engine Events
//
// Typed representation of everything the platform layer reports to the
// application: window lifecycle, per-frame app ticks, keyboard and mouse.
//
// Responsibilities:
// - Define the closed set of event kinds (`EventKind`)
// - Tag each kind with coarse categories (`EventCategory`)
// - Carry per-variant payloads behind a single `Event` value
// - Expose a sealed `EventVariant` trait used by the dispatcher
//
// Event Flow:
// ```text
// winit WindowEvent
//         ↓
//    platform::callbacks (construct-or-skip)
//         ↓
//    Event (this module)  ──► WindowData sink
//         ↓
//    EventDispatcher / LayerStack
// ```
//
//=========================================================================

//=== Submodules ==========================================================

mod app;
pub mod dispatcher;
mod key;
mod mouse;

//=== Standard Library Imports ============================================

use std::fmt;

//=== External Crates =====================================================

use bitflags::bitflags;

//=== Public API ==========================================================

pub use app::{
    AppRenderEvent, AppTickEvent, AppUpdateEvent, WindowCloseEvent, WindowFocusEvent,
    WindowLostFocusEvent, WindowMovedEvent, WindowResizeEvent,
};
pub use dispatcher::EventDispatcher;
pub use key::{KeyPressedEvent, KeyReleasedEvent, KeyTypedEvent};
pub use mouse::{
    MouseButtonPressedEvent, MouseButtonReleasedEvent, MouseMovedEvent, MouseScrolledEvent,
};

//=== EventKind ===========================================================

/// Discriminant identifying which variant an [`Event`] is.
///
/// `None` exists for completeness of the enumeration; no constructed
/// event ever reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    None,
    WindowClose,
    WindowResize,
    WindowFocus,
    WindowLostFocus,
    WindowMoved,
    AppTick,
    AppUpdate,
    AppRender,
    KeyReleased,
    KeyPressed,
    KeyTyped,
    MouseButtonPressed,
    MouseButtonReleased,
    MouseMoved,
    MouseScrolled,
}

impl EventKind {
    /// Static name of the kind, e.g. `"KeyPressed"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::WindowClose => "WindowClose",
            Self::WindowResize => "WindowResize",
            Self::WindowFocus => "WindowFocus",
            Self::WindowLostFocus => "WindowLostFocus",
            Self::WindowMoved => "WindowMoved",
            Self::AppTick => "AppTick",
            Self::AppUpdate => "AppUpdate",
            Self::AppRender => "AppRender",
            Self::KeyReleased => "KeyReleased",
            Self::KeyPressed => "KeyPressed",
            Self::KeyTyped => "KeyTyped",
            Self::MouseButtonPressed => "MouseButtonPressed",
            Self::MouseButtonReleased => "MouseButtonReleased",
            Self::MouseMoved => "MouseMoved",
            Self::MouseScrolled => "MouseScrolled",
        }
    }

    /// Fixed category set of the kind.
    pub const fn categories(self) -> EventCategory {
        match self {
            Self::None => EventCategory::empty(),

            Self::WindowClose
            | Self::WindowResize
            | Self::WindowFocus
            | Self::WindowLostFocus
            | Self::WindowMoved
            | Self::AppTick
            | Self::AppUpdate
            | Self::AppRender => EventCategory::APP,

            Self::KeyReleased | Self::KeyPressed | Self::KeyTyped => {
                EventCategory::KEYBOARD.union(EventCategory::INPUT)
            }

            Self::MouseButtonPressed
            | Self::MouseButtonReleased
            | Self::MouseMoved
            | Self::MouseScrolled => EventCategory::MOUSE.union(EventCategory::INPUT),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//=== EventCategory =======================================================

bitflags! {
    /// Coarse tags an event belongs to. An event may carry several.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct EventCategory: u8 {
        const APP      = 1 << 0;
        const INPUT    = 1 << 1;
        const KEYBOARD = 1 << 2;
        const MOUSE    = 1 << 3;
    }
}

//=== EventData ===========================================================

/// Variant payload of an [`Event`], one arm per concrete kind.
#[derive(Debug, Clone, PartialEq)]
pub enum EventData {
    WindowClose(WindowCloseEvent),
    WindowResize(WindowResizeEvent),
    WindowFocus(WindowFocusEvent),
    WindowLostFocus(WindowLostFocusEvent),
    WindowMoved(WindowMovedEvent),
    AppTick(AppTickEvent),
    AppUpdate(AppUpdateEvent),
    AppRender(AppRenderEvent),
    KeyPressed(KeyPressedEvent),
    KeyReleased(KeyReleasedEvent),
    KeyTyped(KeyTypedEvent),
    MouseButtonPressed(MouseButtonPressedEvent),
    MouseButtonReleased(MouseButtonReleasedEvent),
    MouseMoved(MouseMovedEvent),
    MouseScrolled(MouseScrolledEvent),
}

//=== Event ===============================================================

/// A single engine event.
///
/// Built inside a platform callback, lent to the window sink as
/// `&mut Event` and dropped when the callback returns. `handled` starts
/// `false` and is written by [`EventDispatcher::dispatch`] on a match.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Set by the handler of a matching dispatch.
    pub handled: bool,
    data: EventData,
}

impl Event {
    pub fn new(data: EventData) -> Self {
        Self { handled: false, data }
    }

    pub fn data(&self) -> &EventData {
        &self.data
    }

    /// Kind of the contained variant.
    pub fn kind(&self) -> EventKind {
        match self.data {
            EventData::WindowClose(_) => EventKind::WindowClose,
            EventData::WindowResize(_) => EventKind::WindowResize,
            EventData::WindowFocus(_) => EventKind::WindowFocus,
            EventData::WindowLostFocus(_) => EventKind::WindowLostFocus,
            EventData::WindowMoved(_) => EventKind::WindowMoved,
            EventData::AppTick(_) => EventKind::AppTick,
            EventData::AppUpdate(_) => EventKind::AppUpdate,
            EventData::AppRender(_) => EventKind::AppRender,
            EventData::KeyPressed(_) => EventKind::KeyPressed,
            EventData::KeyReleased(_) => EventKind::KeyReleased,
            EventData::KeyTyped(_) => EventKind::KeyTyped,
            EventData::MouseButtonPressed(_) => EventKind::MouseButtonPressed,
            EventData::MouseButtonReleased(_) => EventKind::MouseButtonReleased,
            EventData::MouseMoved(_) => EventKind::MouseMoved,
            EventData::MouseScrolled(_) => EventKind::MouseScrolled,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn categories(&self) -> EventCategory {
        self.kind().categories()
    }

    /// Returns `true` if the event shares at least one flag with `category`.
    pub fn is_in_category(&self, category: EventCategory) -> bool {
        self.categories().intersects(category)
    }

    /// Typed view of the payload if the event is a `V`.
    pub fn get<V: EventVariant>(&self) -> Option<&V> {
        V::from_data(&self.data)
    }

    /// Splits the event into its `handled` flag and payload so both can
    /// be borrowed at once.
    pub(crate) fn parts_mut(&mut self) -> (&mut bool, &EventData) {
        (&mut self.handled, &self.data)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            EventData::WindowClose(e) => fmt::Display::fmt(e, f),
            EventData::WindowResize(e) => fmt::Display::fmt(e, f),
            EventData::WindowFocus(e) => fmt::Display::fmt(e, f),
            EventData::WindowLostFocus(e) => fmt::Display::fmt(e, f),
            EventData::WindowMoved(e) => fmt::Display::fmt(e, f),
            EventData::AppTick(e) => fmt::Display::fmt(e, f),
            EventData::AppUpdate(e) => fmt::Display::fmt(e, f),
            EventData::AppRender(e) => fmt::Display::fmt(e, f),
            EventData::KeyPressed(e) => fmt::Display::fmt(e, f),
            EventData::KeyReleased(e) => fmt::Display::fmt(e, f),
            EventData::KeyTyped(e) => fmt::Display::fmt(e, f),
            EventData::MouseButtonPressed(e) => fmt::Display::fmt(e, f),
            EventData::MouseButtonReleased(e) => fmt::Display::fmt(e, f),
            EventData::MouseMoved(e) => fmt::Display::fmt(e, f),
            EventData::MouseScrolled(e) => fmt::Display::fmt(e, f),
        }
    }
}

//=== EventVariant ========================================================

mod sealed {
    pub trait Sealed {}
}

/// A concrete event payload type with a fixed kind.
///
/// Sealed: the variant set is closed and only implemented in this module.
pub trait EventVariant: sealed::Sealed + fmt::Display + Sized {
    const KIND: EventKind;

    /// Category set, always equal to `KIND.categories()`.
    const CATEGORIES: EventCategory = Self::KIND.categories();

    /// Returns the payload if `data` holds this variant.
    fn from_data(data: &EventData) -> Option<&Self>;
}

macro_rules! event_variant {
    ($($ty:ident => $arm:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl EventVariant for $ty {
                const KIND: EventKind = EventKind::$arm;

                fn from_data(data: &EventData) -> Option<&Self> {
                    match data {
                        EventData::$arm(e) => Some(e),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for Event {
                fn from(e: $ty) -> Self {
                    Event::new(EventData::$arm(e))
                }
            }
        )*
    };
}

event_variant! {
    WindowCloseEvent => WindowClose,
    WindowResizeEvent => WindowResize,
    WindowFocusEvent => WindowFocus,
    WindowLostFocusEvent => WindowLostFocus,
    WindowMovedEvent => WindowMoved,
    AppTickEvent => AppTick,
    AppUpdateEvent => AppUpdate,
    AppRenderEvent => AppRender,
    KeyPressedEvent => KeyPressed,
    KeyReleasedEvent => KeyReleased,
    KeyTypedEvent => KeyTyped,
    MouseButtonPressedEvent => MouseButtonPressed,
    MouseButtonReleasedEvent => MouseButtonReleased,
    MouseMovedEvent => MouseMoved,
    MouseScrolledEvent => MouseScrolled,
}

//=========================================================================
// Unit Tests
//=========================================================================

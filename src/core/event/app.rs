//=========================================================================
// Window & Application Events
//=========================================================================

use std::fmt;

//=== Window Events =======================================================

/// The user or the OS asked the window to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowCloseEvent;

/// Framebuffer-independent window size changed (in pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowResizeEvent {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowFocusEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowLostFocusEvent;

/// Window moved; position of the outer top-left corner on the desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowMovedEvent {
    pub x: i32,
    pub y: i32,
}

//=== Frame Events ========================================================
//
// Emitted by the platform once per frame, in the order
// Tick → Update → Render.
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppTickEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppUpdateEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppRenderEvent;

//=== Display =============================================================

impl fmt::Display for WindowResizeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WindowResizeEvent: {}, {}", self.width, self.height)
    }
}

impl fmt::Display for WindowMovedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WindowMovedEvent: {}, {}", self.x, self.y)
    }
}

macro_rules! display_name {
    ($($ty:ident),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(stringify!($ty))
                }
            }
        )*
    };
}

display_name!(
    WindowCloseEvent,
    WindowFocusEvent,
    WindowLostFocusEvent,
    AppTickEvent,
    AppUpdateEvent,
    AppRenderEvent,
);

//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use cinder_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine core
pub use crate::engine::{Engine, EngineBuilder};

// Events
pub use crate::core::event::{
    AppRenderEvent, AppTickEvent, AppUpdateEvent, Event, EventCategory, EventDispatcher,
    EventKind, EventVariant, KeyPressedEvent, KeyReleasedEvent, KeyTypedEvent,
    MouseButtonPressedEvent, MouseButtonReleasedEvent, MouseMovedEvent, MouseScrolledEvent,
    WindowCloseEvent, WindowFocusEvent, WindowLostFocusEvent, WindowMovedEvent,
    WindowResizeEvent,
};

// Input
pub use crate::core::input::{InputState, KeyCode, MouseCode};

// Layers
pub use crate::core::layer::{Layer, LayerStack};

// Platform
pub use crate::platform::{PlatformError, WindowProps};

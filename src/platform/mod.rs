//=========================================================================
// Platform Subsystem
//
// Bridges winit (OS-level window and input events) with the engine's
// typed events.
//
// Architecture:
// ```text
//  Event-loop thread (the only thread involved):
//  ┌────────────────────────────────────────────┐
//  │  winit Event Loop                          │
//  │   ↓ WindowEvent                            │
//  │  Platform::window_event()                  │
//  │   ↓ primitives + &mut WindowData           │
//  │  callbacks::on_*()  (construct-or-skip)    │
//  │   ↓ &mut Event                             │
//  │  WindowData sink  ──► LayerStack, input    │
//  │                                            │
//  │  RedrawRequested → AppTick, AppUpdate,     │
//  │                    AppRender, next redraw  │
//  └────────────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **Explicit context**: callbacks take `&mut WindowData` instead of
//   fishing it out of a window user pointer
// - **Single thread**: events are built and consumed synchronously inside
//   the winit callback; nothing is queued or sent across threads
// - **Main thread requirement**: winit mandates main thread on macOS/iOS,
//   so this runs on the thread that called `Engine::run()`
//
//=========================================================================

//=== Submodules ==========================================================

pub mod callbacks;
pub mod native;
mod window_data;

//=== External Crates =====================================================

use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{KeyEvent, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::event::{AppRenderEvent, AppTickEvent, AppUpdateEvent, Event};
use crate::core::input::{KeyCode, MouseCode};
use native::NativeAction;

//=== Public API ==========================================================

pub use window_data::{EventCallback, WindowData, WindowProps};

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are fatal: without an event loop or a window the engine cannot
/// run.
#[derive(Debug)]
pub enum PlatformError {
    /// Failed to create event loop (rare, indicates OS-level issue).
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop execution error.
    EventLoopExecution(winit::error::EventLoopError),

    /// The OS refused to create the window.
    WindowCreation(winit::error::OsError),
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
            Self::WindowCreation(e) => write!(f, "Window creation failed: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EventLoopCreation(e) | Self::EventLoopExecution(e) => Some(e),
            Self::WindowCreation(e) => Some(e),
        }
    }
}

//=== Platform ============================================================

/// Window owner and event translator.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(props, sink)`
/// 2. **Execution**: `platform.run()` blocks inside the winit loop
/// 3. **Event processing**: winit calls `ApplicationHandler` methods, each
///    translated through [`callbacks`] into the sink
/// 4. **Shutdown**: close request → `WindowClose` emitted → loop exits
///
/// # Thread Safety
///
/// Not `Send`: the sink and the window stay on the event-loop thread.
pub struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    /// Cached window state and event sink.
    data: WindowData,

    /// Window creation failure, reported by `run()` after the loop stops.
    error: Option<PlatformError>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates the platform. The window itself is created lazily once the
    /// loop resumes.
    pub fn new(props: WindowProps, sink: impl FnMut(&mut Event) + 'static) -> Self {
        let mut data = WindowData::new(&props);
        data.set_event_callback(sink);
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            data,
            error: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the winit event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the loop cannot be created or fails,
    /// or if the window could not be created.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread on platforms where winit
    /// requires it.
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;
        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)?;

        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    pub fn data(&self) -> &WindowData {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut WindowData {
        &mut self.data
    }

    //--- Internal Helpers -------------------------------------------------

    /// Emits the per-frame app events in order.
    fn emit_frame(&mut self) {
        let mut tick: Event = AppTickEvent.into();
        self.data.emit(&mut tick);

        let mut update: Event = AppUpdateEvent.into();
        self.data.emit(&mut update);

        let mut render: Event = AppRenderEvent.into();
        self.data.emit(&mut render);
    }

    fn handle_key(&mut self, key_event: &KeyEvent) {
        let key = KeyCode::from(key_event.physical_key);
        let action = NativeAction::from_state(key_event.state, key_event.repeat);
        callbacks::on_key(&mut self.data, key, action.code());

        if action != NativeAction::Release {
            if let Some(text) = &key_event.text {
                for c in text.chars().filter(|c| !c.is_control()) {
                    callbacks::on_char(&mut self.data, c);
                }
            }
        }
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when app becomes active (startup or mobile resume).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.data.title())
            .with_inner_size(LogicalSize::new(self.data.width(), self.data.height()));

        info!(
            target: "platform",
            "Creating window {} ({} {})",
            self.data.title(),
            self.data.width(),
            self.data.height()
        );

        match event_loop.create_window(attrs) {
            Ok(window) => {
                let size = window.inner_size();
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    size.width,
                    size.height,
                    window.scale_factor()
                );
                self.data.set_size(size.width, size.height);
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.error = Some(PlatformError::WindowCreation(e));
                event_loop.exit();
            }
        }
    }

    /// Translates one winit window event into engine events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                callbacks::on_close(&mut self.data);
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                callbacks::on_resize(&mut self.data, size.width, size.height);
            }

            WindowEvent::Focused(focused) => {
                callbacks::on_focus(&mut self.data, focused);
            }

            WindowEvent::Moved(position) => {
                callbacks::on_window_pos(&mut self.data, position.x, position.y);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                self.handle_key(&key_event);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let action = NativeAction::from_state(state, false);
                callbacks::on_mouse_button(&mut self.data, MouseCode::from(button), action.code());
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let (x, y) = match delta {
                    MouseScrollDelta::LineDelta(x, y) => (f64::from(x), f64::from(y)),
                    MouseScrollDelta::PixelDelta(p) => {
                        (p.x / PIXELS_PER_LINE, p.y / PIXELS_PER_LINE)
                    }
                };
                callbacks::on_scroll(&mut self.data, x, y);
            }

            WindowEvent::CursorMoved { position, .. } => {
                callbacks::on_cursor_pos(&mut self.data, position.x, position.y);
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary
                self.emit_frame();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {
                trace!(target: "platform", "Unhandled window event");
            }
        }
    }
}

/// Pixel scroll deltas (touchpads) are normalised to wheel lines.
const PIXELS_PER_LINE: f64 = 20.0;

//=========================================================================
// Unit Tests
//=========================================================================

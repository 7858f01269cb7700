//=========================================================================
// Window Data
//=========================================================================
//
// Per-window context block handed to every platform callback.
//
// Holds the event sink plus the cached window state that callbacks keep
// current (size) and that the frame loop reads (size, v-sync).
//
// Threading: a `WindowData` lives on the thread that runs the event
// loop and is only ever touched from there. The sink is not `Send`.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use crate::core::event::Event;

//=== WindowProps =========================================================

/// Initial window configuration.
///
/// Defaults: `"Cinder Engine"`, 1280×720, v-sync on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowProps {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
}

impl Default for WindowProps {
    fn default() -> Self {
        Self {
            title: "Cinder Engine".to_string(),
            width: 1280,
            height: 720,
            vsync: true,
        }
    }
}

//=== EventCallback =======================================================

/// Window event sink. Receives every translated event exactly once.
pub type EventCallback = Box<dyn FnMut(&mut Event)>;

//=== WindowData ==========================================================

pub struct WindowData {
    title: String,
    width: u32,
    height: u32,
    vsync: bool,
    event_callback: Option<EventCallback>,
}

impl WindowData {
    pub fn new(props: &WindowProps) -> Self {
        Self {
            title: props.title.clone(),
            width: props.width,
            height: props.height,
            vsync: props.vsync,
            event_callback: None,
        }
    }

    //--- Sink -------------------------------------------------------------

    /// Installs the sink, replacing any previous one.
    pub fn set_event_callback(&mut self, callback: impl FnMut(&mut Event) + 'static) {
        self.event_callback = Some(Box::new(callback));
    }

    pub fn has_event_callback(&self) -> bool {
        self.event_callback.is_some()
    }

    /// Hands `event` to the sink. Without a sink the event is dropped.
    pub fn emit(&mut self, event: &mut Event) {
        match self.event_callback.as_mut() {
            Some(callback) => callback(event),
            None => trace!(target: "platform", "No event callback, dropping {}", event),
        }
    }

    //--- Cached State -----------------------------------------------------

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub(crate) fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn is_vsync(&self) -> bool {
        self.vsync
    }

    pub fn set_vsync(&mut self, enabled: bool) {
        debug!(target: "platform", "V-sync {}", if enabled { "enabled" } else { "disabled" });
        self.vsync = enabled;
    }
}

impl std::fmt::Debug for WindowData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowData")
            .field("title", &self.title)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("vsync", &self.vsync)
            .field("has_event_callback", &self.event_callback.is_some())
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

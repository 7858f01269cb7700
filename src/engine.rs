//=========================================================================
// Cinder Engine
//
// Main entry point and coordinator for the engine.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Event loop]
//         │                          │
//         ├─ with_title()            ├─ installs window sink
//         ├─ with_size()             │    ├─ InputState::on_event
//         ├─ with_vsync()            │    ├─ AppUpdate → LayerStack::update
//         ├─ with_layer()            │    └─ LayerStack::on_event
//         └─ with_overlay()          └─ runs platform, blocks until exit
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::event::{AppRenderEvent, AppUpdateEvent, Event, EventDispatcher, WindowCloseEvent};
use crate::core::input::InputState;
use crate::core::layer::{Layer, LayerStack};
use crate::platform::{Platform, PlatformError, WindowProps};

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Title**: `"Cinder Engine"`
/// - **Size**: 1280×720
/// - **V-sync**: on
///
/// # Examples
///
/// ```no_run
/// use cinder_engine::EngineBuilder;
/// use cinder_engine::core::layer::Layer;
///
/// struct Sandbox;
///
/// impl Layer for Sandbox {
///     fn name(&self) -> &str { "sandbox" }
/// }
///
/// EngineBuilder::new()
///     .with_title("Sandbox")
///     .with_size(800, 600)
///     .with_layer(Sandbox)
///     .build()
///     .run()
///     .expect("engine failed");
/// ```
pub struct EngineBuilder {
    props: WindowProps,
    layers: Vec<Box<dyn Layer>>,
    overlays: Vec<Box<dyn Layer>>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            props: WindowProps::default(),
            layers: Vec::new(),
            overlays: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.props.title = title.into();
        self
    }

    /// Sets the initial window size in logical pixels.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be positive, got {}x{}", width, height);
        self.props.width = width;
        self.props.height = height;
        self
    }

    pub fn with_vsync(mut self, enabled: bool) -> Self {
        self.props.vsync = enabled;
        self
    }

    /// Replaces all window settings at once.
    pub fn with_props(mut self, props: WindowProps) -> Self {
        self.props = props;
        self
    }

    /// Adds a layer; layers are pushed in call order.
    pub fn with_layer(mut self, layer: impl Layer + 'static) -> Self {
        self.layers.push(Box::new(layer));
        self
    }

    /// Adds an overlay; overlays always sit above layers.
    pub fn with_overlay(mut self, overlay: impl Layer + 'static) -> Self {
        self.overlays.push(Box::new(overlay));
        self
    }

    /// Builds the engine, attaching layers then overlays.
    pub fn build(self) -> Engine {
        info!(
            target: "engine",
            "Building engine ({} {}x{}, vsync: {})",
            self.props.title,
            self.props.width,
            self.props.height,
            self.props.vsync
        );

        let mut layers = LayerStack::new();
        for layer in self.layers {
            layers.push_layer(layer);
        }
        for overlay in self.overlays {
            layers.push_overlay(overlay);
        }

        Engine {
            props: self.props,
            layers,
            input: InputState::new(),
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Cinder Engine runtime.
///
/// Owns the layer stack and input snapshot and feeds them from the
/// window's event sink. Everything runs on the thread that calls
/// [`Engine::run`].
pub struct Engine {
    props: WindowProps,
    layers: LayerStack,
    input: InputState,
}

impl Engine {
    //--- Execution --------------------------------------------------------

    /// Starts the engine runtime and blocks until the window closes.
    ///
    /// Initialises `env_logger` (honours `RUST_LOG`) unless a logger is
    /// already installed.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop or window cannot be
    /// created.
    pub fn run(self) -> Result<(), PlatformError> {
        let _ = env_logger::try_init();

        info!(target: "engine", "Starting engine runtime");

        let Engine { props, mut layers, mut input } = self;
        let platform = Platform::new(props, move |event| {
            Self::route_event(&mut input, &mut layers, event)
        });

        let result = platform.run();
        match &result {
            Ok(()) => info!(target: "engine", "Engine shutdown complete"),
            Err(e) => error!(target: "engine", "Platform error: {}", e),
        }
        result
    }

    pub fn props(&self) -> &WindowProps {
        &self.props
    }

    pub fn layers(&self) -> &LayerStack {
        &self.layers
    }

    //--- Event Routing ----------------------------------------------------
    //
    // Window sink body:
    //  1. Fold input events into the snapshot
    //  2. AppUpdate drives LayerStack::update
    //  3. Every event is offered to the layers, top down
    //  4. AppRender closes the frame (resets the change flag)
    //
    fn route_event(input: &mut InputState, layers: &mut LayerStack, event: &mut Event) {
        input.on_event(event);

        let mut dispatcher = EventDispatcher::new(event);
        dispatcher.dispatch::<AppUpdateEvent, _>(|_| {
            layers.update(input);
            false
        });
        dispatcher.dispatch::<WindowCloseEvent, _>(|_| {
            info!(target: "engine", "Window closing, shutting down");
            false
        });

        layers.on_event(event);

        if event.get::<AppRenderEvent>().is_some() {
            input.reset_changed();
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::{KeyPressedEvent, MouseMovedEvent};
    use crate::core::input::KeyCode;
    use std::cell::RefCell;
    use std::rc::Rc;

    //--- Test Helpers -----------------------------------------------------

    struct Probe {
        seen: Rc<RefCell<Vec<String>>>,
    }

    impl Layer for Probe {
        fn name(&self) -> &str {
            "probe"
        }

        fn on_update(&mut self, input: &InputState) {
            self.seen
                .borrow_mut()
                .push(format!("update a={}", input.is_key_pressed(KeyCode::A)));
        }

        fn on_event(&mut self, event: &mut Event) {
            self.seen.borrow_mut().push(event.to_string());
        }
    }

    fn probe_engine() -> (Engine, Rc<RefCell<Vec<String>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let engine = EngineBuilder::new()
            .with_layer(Probe { seen: Rc::clone(&seen) })
            .build();
        (engine, seen)
    }

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let engine = EngineBuilder::new().build();
        assert_eq!(engine.props(), &WindowProps::default());
        assert!(engine.layers().is_empty());
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let engine = EngineBuilder::new()
            .with_title("Sandbox")
            .with_size(800, 600)
            .with_vsync(false)
            .build();

        assert_eq!(engine.props().title, "Sandbox");
        assert_eq!((engine.props().width, engine.props().height), (800, 600));
        assert!(!engine.props().vsync);
    }

    #[test]
    #[should_panic(expected = "Window size must be positive")]
    fn builder_with_size_panics_on_zero() {
        EngineBuilder::new().with_size(0, 600);
    }

    #[test]
    fn builder_puts_overlays_above_layers() {
        struct Named(&'static str);
        impl Layer for Named {
            fn name(&self) -> &str {
                self.0
            }
        }

        let engine = EngineBuilder::new()
            .with_overlay(Named("hud"))
            .with_layer(Named("world"))
            .build();

        let names: Vec<_> = engine.layers().names().collect();
        assert_eq!(names, vec!["world", "hud"]);
    }

    //=====================================================================
    // Routing Tests
    //=====================================================================

    #[test]
    fn route_forwards_events_to_layers() {
        let (mut engine, seen) = probe_engine();
        let mut event: Event = MouseMovedEvent { x: 1.0, y: 2.0 }.into();

        Engine::route_event(&mut engine.input, &mut engine.layers, &mut event);

        assert_eq!(*seen.borrow(), vec!["MouseMovedEvent: 1, 2"]);
        assert_eq!(engine.input.mouse_position(), (1.0, 2.0));
    }

    #[test]
    fn route_update_runs_layer_update_with_current_input() {
        let (mut engine, seen) = probe_engine();

        let mut press: Event = KeyPressedEvent { key: KeyCode::A, repeat_count: 0 }.into();
        Engine::route_event(&mut engine.input, &mut engine.layers, &mut press);

        let mut update: Event = AppUpdateEvent.into();
        Engine::route_event(&mut engine.input, &mut engine.layers, &mut update);

        assert_eq!(
            *seen.borrow(),
            vec!["KeyPressedEvent: 65 (0 repeats)", "update a=true", "AppUpdateEvent"]
        );
    }

    #[test]
    fn route_render_resets_change_flag() {
        let (mut engine, _) = probe_engine();

        let mut moved: Event = MouseMovedEvent { x: 5.0, y: 5.0 }.into();
        Engine::route_event(&mut engine.input, &mut engine.layers, &mut moved);
        assert!(engine.input.has_changed());

        let mut render: Event = AppRenderEvent.into();
        Engine::route_event(&mut engine.input, &mut engine.layers, &mut render);
        assert!(!engine.input.has_changed());
    }

    #[test]
    fn route_close_reaches_layers_unhandled() {
        let (mut engine, seen) = probe_engine();
        let mut close: Event = WindowCloseEvent.into();

        Engine::route_event(&mut engine.input, &mut engine.layers, &mut close);

        assert!(!close.handled);
        assert_eq!(*seen.borrow(), vec!["WindowCloseEvent"]);
    }
}

//=========================================================================
// Cinder Engine: Library Root
//
// This crate defines the public API surface of the Cinder Engine.
//
// Responsibilities:
// - Expose the engine facade (`EngineBuilder` / `Engine`)
// - Expose the typed event set, dispatcher and layer hooks (`core`)
// - Expose the winit translation layer (`platform`) so other window
//   hosts can drive the same callbacks
// - Provide GPU-independent render helpers (`render`)
//
// Typical usage:
// ```no_run
// use cinder_engine::prelude::*;
//
// struct Game;
//
// impl Layer for Game {
//     fn name(&self) -> &str { "game" }
//
//     fn on_event(&mut self, event: &mut Event) {
//         EventDispatcher::new(event)
//             .dispatch::<KeyPressedEvent, _>(|e| e.key == KeyCode::ESCAPE);
//     }
// }
//
// fn main() -> Result<(), PlatformError> {
//     EngineBuilder::new().with_layer(Game).build().run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the platform-independent types: events, input, layers.
//
pub mod core;

// `platform` turns winit window events into `core` events.
pub mod platform;

// `render` holds backend-agnostic helpers such as the shader splitter.
pub mod render;

pub mod prelude;

//--- Internal Modules ----------------------------------------------------

mod engine;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};

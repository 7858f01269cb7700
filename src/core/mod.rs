//=========================================================================
// Core
//
// Platform-independent engine types.
//
// Components:
// - `event`: typed event set, categories and the dispatcher
// - `input`: native key/mouse codes and the polled input snapshot
// - `layer`: `Layer` hook trait and the `LayerStack` that routes events
//
// Nothing in here talks to winit; the `platform` module translates into
// these types.
//
//=========================================================================

pub mod event;
pub mod input;
pub mod layer;

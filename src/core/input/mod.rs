//=========================================================================
// Input
//
// Native key/mouse codes and the polling-style input snapshot.
//
// Components:
// - `codes`: `KeyCode` / `MouseCode` integer newtypes with named values
// - `input_state`: `InputState`, updated from engine events
//
//=========================================================================

//=== Submodules ==========================================================

mod codes;
mod input_state;

//=== Public API ==========================================================

pub use codes::{KeyCode, MouseCode};
pub use input_state::InputState;

//=========================================================================
// Layers
//=========================================================================
//
// Application hooks that receive updates and events.
//
// Architecture:
// ```text
//   LayerStack: [ layer0, layer1, ... | overlay0, overlay1, ... ]
//
//   update():   front → back   (layers first, overlays last)
//   on_event(): back  → front  (overlays first), stops once handled
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::event::Event;
use crate::core::input::InputState;

//=== Layer ===============================================================

/// Polymorphic hook object owned by a [`LayerStack`].
///
/// All hooks default to no-ops. A layer routes events to its own
/// handlers with [`EventDispatcher`](crate::core::event::EventDispatcher).
pub trait Layer {
    fn name(&self) -> &str;

    fn on_attach(&mut self) {}
    fn on_detach(&mut self) {}
    fn on_update(&mut self, _input: &InputState) {}
    fn on_event(&mut self, _event: &mut Event) {}
}

//=== LayerStack ==========================================================

/// Ordered layers followed by overlays.
pub struct LayerStack {
    layers: Vec<Box<dyn Layer>>,
    insert_index: usize,
}

impl LayerStack {
    pub fn new() -> Self {
        Self {
            layers: Vec::new(),
            insert_index: 0,
        }
    }

    //--- Mutation ---------------------------------------------------------

    /// Inserts a layer after existing layers but before any overlay.
    pub fn push_layer(&mut self, mut layer: Box<dyn Layer>) {
        debug!(target: "layer", "Attaching layer '{}'", layer.name());
        layer.on_attach();
        self.layers.insert(self.insert_index, layer);
        self.insert_index += 1;
    }

    /// Appends an overlay on top of everything.
    pub fn push_overlay(&mut self, mut overlay: Box<dyn Layer>) {
        debug!(target: "layer", "Attaching overlay '{}'", overlay.name());
        overlay.on_attach();
        self.layers.push(overlay);
    }

    /// Removes the top-most non-overlay layer.
    pub fn pop_layer(&mut self) -> Option<Box<dyn Layer>> {
        if self.insert_index == 0 {
            return None;
        }
        self.insert_index -= 1;
        let mut layer = self.layers.remove(self.insert_index);
        layer.on_detach();
        Some(layer)
    }

    /// Removes the top-most overlay.
    pub fn pop_overlay(&mut self) -> Option<Box<dyn Layer>> {
        if self.layers.len() == self.insert_index {
            return None;
        }
        let mut overlay = self.layers.pop()?;
        overlay.on_detach();
        Some(overlay)
    }

    //--- Frame Hooks ------------------------------------------------------

    pub fn update(&mut self, input: &InputState) {
        for layer in &mut self.layers {
            layer.on_update(input);
        }
    }

    /// Offers `event` to each layer from the top down until one marks it
    /// handled.
    pub fn on_event(&mut self, event: &mut Event) {
        for layer in self.layers.iter_mut().rev() {
            if event.handled {
                break;
            }
            layer.on_event(event);
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Layer names from bottom to top.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.layers.iter().map(|l| l.name())
    }
}

impl Default for LayerStack {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LayerStack {
    fn drop(&mut self) {
        for layer in &mut self.layers {
            layer.on_detach();
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

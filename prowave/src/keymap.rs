use prowave_types::action::{Action, KeyAction};

use crate::host::LayerControl;

/// Keymap represents the stack of layers.
///
/// The conception of Keymap is borrowed from qmk: <https://docs.qmk.fm/#/keymap>.
///
/// Actions are looked up with `(row, col, layer)`. The layer table is borrowed
/// and never mutated, only the set of enabled layers changes at runtime.
pub struct KeyMap<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    /// Layers
    layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
    /// Current state of each layer
    layer_state: [bool; NUM_LAYER],
    /// Default layer number
    default_layer: u8,
    /// The layer each pressed key was resolved on, used when the key is released
    layer_cache: [[u8; COL]; ROW],
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> KeyMap<'a, ROW, COL, NUM_LAYER> {
    pub fn new(action_map: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER]) -> Self {
        KeyMap {
            layers: action_map,
            layer_state: [false; NUM_LAYER],
            default_layer: 0,
            layer_cache: [[0; COL]; ROW],
        }
    }

    pub fn get_keymap_config(&self) -> (usize, usize, usize) {
        (ROW, COL, NUM_LAYER)
    }

    /// Get the default layer number
    pub fn get_default_layer(&self) -> u8 {
        self.default_layer
    }

    /// Set the default layer number
    pub fn set_default_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!("Not a valid default layer {}, keyboard supports only {} layers", layer_num, NUM_LAYER);
            return;
        }
        self.default_layer = layer_num;
    }

    /// Raw cell of the layout table
    pub fn get_action_at(&self, row: usize, col: usize, layer_num: usize) -> KeyAction {
        self.layers[layer_num][row][col]
    }

    /// Resolve the action at a position against the current layer state.
    ///
    /// Iterates from the highest layer down to the default layer, skipping
    /// disabled layers and transparent cells.
    pub fn resolve(&self, row: usize, col: usize) -> (KeyAction, u8) {
        for (layer_idx, layer) in self.layers.iter().enumerate().rev() {
            if self.layer_state[layer_idx] || layer_idx as u8 == self.default_layer {
                let action = layer[row][col];
                if action.is_transparent() {
                    continue;
                }
                return (action, layer_idx as u8);
            }

            if layer_idx as u8 == self.default_layer {
                break;
            }
        }

        (KeyAction::No, self.default_layer)
    }

    /// Fetch the action of a key event, with layer cache.
    ///
    /// A released key resolves on the layer it was pressed on, so a momentary
    /// layer key is always released on the layer that holds it.
    pub fn get_action_with_layer_cache(&mut self, row: usize, col: usize, pressed: bool) -> KeyAction {
        if !pressed {
            let layer = self.pop_layer_from_cache(row, col);
            return self.layers[layer as usize][row][col];
        }

        let (action, layer) = self.resolve(row, col);
        self.layer_cache[row][col] = layer;
        action
    }

    /// Process a key event and apply its layer operations.
    ///
    /// Returns the action to be reported to the host, if any.
    pub fn process_key_event(&mut self, row: usize, col: usize, pressed: bool) -> Option<Action> {
        let key_action = self.get_action_with_layer_cache(row, col, pressed);
        match key_action {
            KeyAction::No | KeyAction::Transparent => None,
            KeyAction::Single(action) | KeyAction::Tap(action) => self.process_action(action, pressed),
        }
    }

    /// Apply layer operations, return key strokes to the caller
    pub fn process_action(&mut self, action: Action, pressed: bool) -> Option<Action> {
        match action {
            Action::No | Action::Transparent => None,
            Action::Key(_) => Some(action),
            Action::LayerOn(layer) => {
                if pressed {
                    self.activate_layer(layer);
                } else {
                    self.deactivate_layer(layer);
                }
                None
            }
            Action::LayerOff(layer) => {
                if pressed {
                    self.deactivate_layer(layer);
                }
                None
            }
            Action::LayerToggle(layer) => {
                if pressed {
                    self.toggle_layer(layer);
                }
                None
            }
        }
    }

    pub fn get_activated_layer(&self) -> u8 {
        for (layer_idx, _) in self.layers.iter().enumerate().rev() {
            if self.layer_state[layer_idx] || layer_idx as u8 == self.default_layer {
                return layer_idx as u8;
            }
        }

        self.default_layer
    }

    pub fn is_layer_activated(&self, layer_num: u8) -> bool {
        self.layer_state.get(layer_num as usize).copied().unwrap_or(false)
    }

    fn pop_layer_from_cache(&mut self, row: usize, col: usize) -> u8 {
        let layer = self.layer_cache[row][col];
        self.layer_cache[row][col] = self.default_layer;

        layer
    }

    /// Activate given layer
    pub fn activate_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!("Not a valid layer {}, keyboard supports only {} layers", layer_num, NUM_LAYER);
            return;
        }
        self.layer_state[layer_num as usize] = true;
    }

    /// Deactivate given layer
    pub fn deactivate_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!("Not a valid layer {}, keyboard supports only {} layers", layer_num, NUM_LAYER);
            return;
        }
        self.layer_state[layer_num as usize] = false;
    }

    /// Toggle given layer
    pub fn toggle_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!("Not a valid layer {}, keyboard supports only {} layers", layer_num, NUM_LAYER);
            return;
        }

        self.layer_state[layer_num as usize] = !self.layer_state[layer_num as usize];
    }
}

impl<const ROW: usize, const COL: usize, const NUM_LAYER: usize> LayerControl for KeyMap<'_, ROW, COL, NUM_LAYER> {
    fn highest_layer(&self) -> u8 {
        self.get_activated_layer()
    }

    fn is_layer_on(&self, layer: u8) -> bool {
        self.is_layer_activated(layer)
    }

    fn layer_on(&mut self, layer: u8) {
        self.activate_layer(layer)
    }

    fn layer_off(&mut self, layer: u8) {
        self.deactivate_layer(layer)
    }
}

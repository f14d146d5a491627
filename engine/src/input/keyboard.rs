//! Keyboard Input Module
//!
//! Contains keyboard state tracking for the character movement keys.
//! Decoupled from winit to use generic key codes.

/// Generic key codes for movement input, independent of windowing system.
///
/// These map to standard keyboard keys but are not tied to winit::keyboard::KeyCode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Space,
    ShiftLeft,
    ShiftRight,

    // Control keys
    Escape,
    Enter,
    Tab,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Tracks which character movement keys are currently held.
///
/// This is the per-frame input snapshot the locomotion controller reads:
/// the four directional keys plus the jump key. Discrete events (run
/// toggle on Shift press, jump start/stop on Space press/release) are
/// delivered to the controller directly by the event-handling layer and
/// are not part of this held-key state.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementKeys {
    /// W key - move forward (away from the camera)
    pub forward: bool,
    /// S key - move backward
    pub backward: bool,
    /// A key - move left
    pub left: bool,
    /// D key - move right
    pub right: bool,
    /// Space - jump key held
    pub jump: bool,
}

impl MovementKeys {
    /// Create a new movement keys state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update movement state based on key press/release.
    ///
    /// Returns `true` if the key was a movement key and was handled,
    /// `false` otherwise.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W => {
                self.forward = pressed;
                true
            }
            KeyCode::S => {
                self.backward = pressed;
                true
            }
            KeyCode::A => {
                self.left = pressed;
                true
            }
            KeyCode::D => {
                self.right = pressed;
                true
            }
            KeyCode::Space => {
                self.jump = pressed;
                true
            }
            _ => false,
        }
    }

    /// Check if any of the four directional keys is currently pressed.
    ///
    /// The jump key does not count: jump alone produces no movement
    /// heading.
    pub fn any_direction_pressed(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Reset all movement keys to released state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys_default() {
        let keys = MovementKeys::new();
        assert!(!keys.any_direction_pressed());
        assert!(!keys.jump);
    }

    #[test]
    fn test_movement_keys_forward() {
        let mut keys = MovementKeys::new();
        assert!(keys.handle_key(KeyCode::W, true));
        assert!(keys.forward);
        assert!(keys.any_direction_pressed());
    }

    #[test]
    fn test_jump_is_not_a_direction() {
        let mut keys = MovementKeys::new();
        keys.handle_key(KeyCode::Space, true);
        assert!(keys.jump);
        assert!(!keys.any_direction_pressed());
    }

    #[test]
    fn test_release_clears_state() {
        let mut keys = MovementKeys::new();
        keys.handle_key(KeyCode::D, true);
        assert!(keys.any_direction_pressed());
        keys.handle_key(KeyCode::D, false);
        assert!(!keys.any_direction_pressed());
    }

    #[test]
    fn test_non_movement_key() {
        let mut keys = MovementKeys::new();
        assert!(!keys.handle_key(KeyCode::Escape, true));
        assert!(!keys.any_direction_pressed());
    }

    #[test]
    fn test_reset() {
        let mut keys = MovementKeys::new();
        keys.handle_key(KeyCode::W, true);
        keys.handle_key(KeyCode::Space, true);
        keys.reset();
        assert!(!keys.any_direction_pressed());
        assert!(!keys.jump);
    }
}

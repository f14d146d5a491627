//! Input Module
//!
//! Provides platform-agnostic keyboard input handling. This module is
//! decoupled from any specific windowing system (like winit) to allow
//! for flexible integration: the windowing layer translates its native
//! key events into [`KeyCode`] values and feeds them to [`MovementKeys`].
//!
//! # Example
//!
//! ```
//! use character_controls_engine::input::{KeyCode, MovementKeys};
//!
//! let mut keys = MovementKeys::new();
//! keys.handle_key(KeyCode::W, true); // W pressed
//! assert!(keys.any_direction_pressed());
//! ```

pub mod keyboard;

pub use keyboard::{KeyCode, MovementKeys};

//! Player Module
//!
//! Third-person character locomotion.
//!
//! # Components
//!
//! - [`LocomotionController`] - the per-frame update tying input,
//!   animation state, camera-relative movement and kinematic ground
//!   contact together
//! - [`LocomotionAction`] - the {Idle, Walk, Run, Jump} animation state
//! - [`LocomotionConfig`] - speeds, probe distances and respawn policy
//! - [`direction_offset`] - the priority-ordered directional-key table

pub mod config;
pub mod direction;
pub mod locomotion;

pub use config::{
    BODY_RADIUS, FADE_DURATION, FALL_SMOOTHING, FORWARD_PROBE_DISTANCE, GRAVITY,
    GROUND_PROBE_DISTANCE, GROUND_SNAP_SMOOTHING, LocomotionConfig, OUT_OF_BOUNDS_Y,
    RESPAWN_POINT, ROTATION_STEP, RUN_SPEED, WALK_SPEED,
};
pub use direction::direction_offset;
pub use locomotion::{LocomotionAction, LocomotionController};

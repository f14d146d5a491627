//! Locomotion constants and configuration.
//!
//! This module defines the tuning parameters for third-person character
//! locomotion: movement speeds, animation cross-fade timing, probe
//! distances and the out-of-bounds respawn policy.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Walk speed in meters per second
pub const WALK_SPEED: f32 = 4.0;

/// Run speed in meters per second
pub const RUN_SPEED: f32 = 10.0;

/// Animation cross-fade duration in seconds
pub const FADE_DURATION: f32 = 0.2;

/// Collision radius of the character's kinematic body in meters
pub const BODY_RADIUS: f32 = 0.135;

/// Maximum distance of the downward ground probe in meters
pub const GROUND_PROBE_DISTANCE: f32 = 0.5;

/// Maximum distance of the forward obstacle probe in meters.
/// Tuned to reach just past the body's collision radius.
pub const FORWARD_PROBE_DISTANCE: f32 = 0.13;

/// Gravity acceleration in meters per second squared
pub const GRAVITY: f32 = 9.81;

/// Smoothing factor for the per-frame fall velocity accumulation
pub const FALL_SMOOTHING: f32 = 0.10;

/// Smoothing factor for the ground penetration correction
pub const GROUND_SNAP_SMOOTHING: f32 = 0.5;

/// Maximum model rotation toward the movement heading, radians per frame
pub const ROTATION_STEP: f32 = 0.2;

/// Vertical position below which the character is considered lost
pub const OUT_OF_BOUNDS_Y: f32 = -1.0;

/// Translation the body is reset to after falling out of bounds
pub const RESPAWN_POINT: Vec3 = Vec3::new(0.0, 10.0, 0.0);

/// Tuning parameters for the locomotion controller.
///
/// All values are plain fields so different character types can carry
/// different tunings; `Default` returns the canonical constants above.
///
/// # Example
///
/// ```
/// use character_controls_engine::player::LocomotionConfig;
///
/// // A slower, floatier character
/// let config = LocomotionConfig {
///     walk_speed: 2.5,
///     gravity: 4.0,
///     ..LocomotionConfig::default()
/// };
/// assert_eq!(config.run_speed, 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocomotionConfig {
    /// Walking speed in m/s.
    pub walk_speed: f32,

    /// Running speed in m/s.
    pub run_speed: f32,

    /// Cross-fade duration for animation state changes, in seconds.
    pub fade_duration: f32,

    /// Collision radius of the kinematic body, in meters.
    pub body_radius: f32,

    /// Maximum distance of the downward ground probe, in meters.
    pub ground_probe_distance: f32,

    /// Maximum distance of the forward obstacle probe, in meters.
    pub forward_probe_distance: f32,

    /// Gravity acceleration in m/s².
    pub gravity: f32,

    /// Per-frame smoothing factor applied when accumulating fall
    /// velocity. Lower values soften the onset of a fall.
    pub fall_smoothing: f32,

    /// Per-frame smoothing factor applied to the ground penetration
    /// correction, producing a gentle push back to the surface instead
    /// of a snap.
    pub ground_snap_smoothing: f32,

    /// Maximum rotation of the visual model toward its movement heading,
    /// in radians per frame.
    pub rotation_step: f32,

    /// Vertical position below which the character respawns.
    pub out_of_bounds_y: f32,

    /// Translation the body is reset to after an out-of-bounds fall.
    pub respawn_point: Vec3,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            walk_speed: WALK_SPEED,
            run_speed: RUN_SPEED,
            fade_duration: FADE_DURATION,
            body_radius: BODY_RADIUS,
            ground_probe_distance: GROUND_PROBE_DISTANCE,
            forward_probe_distance: FORWARD_PROBE_DISTANCE,
            gravity: GRAVITY,
            fall_smoothing: FALL_SMOOTHING,
            ground_snap_smoothing: GROUND_SNAP_SMOOTHING,
            rotation_step: ROTATION_STEP,
            out_of_bounds_y: OUT_OF_BOUNDS_Y,
            respawn_point: RESPAWN_POINT,
        }
    }
}

impl LocomotionConfig {
    /// Creates a config with the canonical default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the movement speed for the given running state.
    pub fn speed(&self, running: bool) -> f32 {
        if running { self.run_speed } else { self.walk_speed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = LocomotionConfig::default();
        assert_eq!(config.walk_speed, 4.0);
        assert_eq!(config.run_speed, 10.0);
        assert_eq!(config.fade_duration, 0.2);
        assert_eq!(config.body_radius, 0.135);
        assert_eq!(config.ground_probe_distance, 0.5);
        assert_eq!(config.forward_probe_distance, 0.13);
        assert_eq!(config.gravity, 9.81);
        assert_eq!(config.out_of_bounds_y, -1.0);
        assert_eq!(config.respawn_point, Vec3::new(0.0, 10.0, 0.0));
    }

    #[test]
    fn test_speed_selection() {
        let config = LocomotionConfig::default();
        assert_eq!(config.speed(false), 4.0);
        assert_eq!(config.speed(true), 10.0);
    }
}

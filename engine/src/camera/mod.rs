//! Camera Module
//!
//! The read/write surface of the orbiting third-person camera rig.
//! This is window-system agnostic: orbit, zoom and pointer handling live
//! in the application layer, which owns the rig. The locomotion
//! controller only reads the camera's position and forward direction,
//! and writes back the desired position and look target each frame.

use glam::Vec3;

/// Position and look target of the orbiting camera rig.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    /// Camera position in world space
    pub position: Vec3,
    /// Point the camera is looking at (the orbit pivot)
    pub target: Vec3,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 1.0, 5.0),
            target: Vec3::ZERO,
        }
    }
}

impl OrbitCamera {
    /// Create a camera at `position` looking at `target`.
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    /// The normalized view direction, from the camera toward its target.
    /// Zero if the camera sits exactly on its target.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// The view direction projected onto the horizontal plane and
    /// normalized. This is the "away from the camera" heading that
    /// camera-relative movement is built from.
    ///
    /// Zero when the camera looks straight down (or up) at its target:
    /// there is no horizontal heading to move along, and the caller
    /// moves nothing that frame.
    pub fn horizontal_forward(&self) -> Vec3 {
        let mut forward = self.forward();
        forward.y = 0.0;
        forward.normalize_or_zero()
    }

    /// Re-seat the rig around a followed body translation.
    ///
    /// The camera keeps the supplied world-space `offset` from the body,
    /// and the orbit pivot is placed one unit above the body so the view
    /// centers on the character's upper torso rather than its feet.
    pub fn follow(&mut self, body_translation: Vec3, offset: Vec3) {
        self.position = body_translation + offset;
        self.target = body_translation + Vec3::Y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_forward_is_normalized() {
        let camera = OrbitCamera::new(Vec3::new(0.0, 3.0, -4.0), Vec3::ZERO);
        assert_relative_eq!(camera.forward().length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_horizontal_forward_drops_pitch() {
        // Camera above and behind, looking down at the origin
        let camera = OrbitCamera::new(Vec3::new(0.0, 5.0, -5.0), Vec3::ZERO);
        let horizontal = camera.horizontal_forward();
        assert_eq!(horizontal.y, 0.0);
        assert_relative_eq!(horizontal.length(), 1.0, epsilon = 1e-6);
        assert!(horizontal.z > 0.99);
    }

    #[test]
    fn test_overhead_camera_has_zero_horizontal_forward() {
        // Directly above the pivot the view direction has no horizontal
        // component; the heading must degrade to zero, not NaN.
        let camera = OrbitCamera::new(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO);
        assert_eq!(camera.horizontal_forward(), Vec3::ZERO);

        let degenerate = OrbitCamera::new(Vec3::ONE, Vec3::ONE);
        assert_eq!(degenerate.forward(), Vec3::ZERO);
    }

    #[test]
    fn test_follow_keeps_offset_and_lifts_target() {
        let mut camera = OrbitCamera::default();
        let body = Vec3::new(2.0, 0.5, -3.0);
        camera.follow(body, Vec3::new(0.0, 1.0, 5.0));

        assert_eq!(camera.position, Vec3::new(2.0, 1.5, 2.0));
        assert_eq!(camera.target, Vec3::new(2.0, 1.5, -3.0));
    }
}

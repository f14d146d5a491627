//! Physics module
//!
//! Custom kinematic physics support for the character controller, built
//! without an external physics library dependency.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! - Distances in meters
//! - Velocities in m/s
//! - Accelerations in m/s²
//!
//! # Submodules
//!
//! - [`body`] - Kinematic rigid body with the propose-then-step translation protocol
//! - [`collision`] - Ray-AABB collision detection and a static collider set

pub mod body;
pub mod collision;

pub use body::KinematicBody;
pub use collision::{Aabb, StaticColliderWorld, ray_aabb_intersect};

use glam::Vec3;

/// Ray-cast access to the physics world.
///
/// The locomotion controller performs two short probes per frame (a
/// downward ground probe and a forward obstacle probe) and needs nothing
/// else from the world, so this is the entire seam. A full physics
/// engine, a heightfield, or a handful of AABBs can all sit behind it.
pub trait PhysicsWorld {
    /// Cast a ray and return the distance along it to the nearest hit
    /// within `max_distance`, or `None` if nothing is hit.
    ///
    /// `direction` must be normalized; the hit point is
    /// `origin + direction * distance`.
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<f32>;
}

//! Collision detection module
//!
//! Ray-AABB intersection for the character controller's ground and
//! obstacle probes, plus a static collider set that implements
//! [`PhysicsWorld`](crate::physics::PhysicsWorld).
//!
//! # Ray-AABB Intersection
//!
//! The slab method is used for ray-AABB intersection, which finds the
//! intersection points by computing entry and exit times for each axis.
//!
//! # Example
//!
//! ```
//! use character_controls_engine::physics::{Aabb, StaticColliderWorld, PhysicsWorld};
//! use glam::Vec3;
//!
//! let mut world = StaticColliderWorld::new();
//! // A 100x100 ground slab with its top surface at y = 0
//! world.add_collider(Aabb::new(
//!     Vec3::new(-50.0, -1.0, -50.0),
//!     Vec3::new(50.0, 0.0, 50.0),
//! ));
//!
//! let hit = world.cast_ray(Vec3::new(0.0, 0.3, 0.0), -Vec3::Y, 0.5);
//! assert_eq!(hit, Some(0.3));
//! ```

use glam::Vec3;

use crate::physics::PhysicsWorld;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the box
    pub min: Vec3,
    /// Maximum corner of the box
    pub max: Vec3,
}

impl Aabb {
    /// Create an AABB from its minimum and maximum corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB from a center point and half extents.
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }
}

/// Performs ray-AABB (Axis-Aligned Bounding Box) intersection test using the slab method.
///
/// The slab method works by finding the intersection of the ray with each pair of
/// axis-aligned planes that make up the AABB. If the ray enters and exits the AABB
/// at valid times (t_enter < t_exit and t_exit > 0), there is an intersection.
///
/// # Arguments
///
/// * `ray_origin` - Starting point of the ray
/// * `ray_dir` - Direction of the ray (must be normalized)
/// * `aabb` - The box to test against
///
/// # Returns
///
/// * `Some(t)` - Distance along the ray to the intersection point (t >= 0)
/// * `None` - No intersection or intersection is behind the ray origin
pub fn ray_aabb_intersect(ray_origin: Vec3, ray_dir: Vec3, aabb: &Aabb) -> Option<f32> {
    // Compute inverse direction for efficient division.
    // Handle near-zero directions by using large values.
    let inv_dir = Vec3::new(
        if ray_dir.x.abs() > 1e-10 { 1.0 / ray_dir.x } else { f32::MAX * ray_dir.x.signum() },
        if ray_dir.y.abs() > 1e-10 { 1.0 / ray_dir.y } else { f32::MAX * ray_dir.y.signum() },
        if ray_dir.z.abs() > 1e-10 { 1.0 / ray_dir.z } else { f32::MAX * ray_dir.z.signum() },
    );

    // Intersection times with the two YZ planes (x = min.x and x = max.x)
    let t1 = (aabb.min.x - ray_origin.x) * inv_dir.x;
    let t2 = (aabb.max.x - ray_origin.x) * inv_dir.x;

    let mut t_min = t1.min(t2);
    let mut t_max = t1.max(t2);

    // Intersection times with the two XZ planes (y = min.y and y = max.y)
    let t3 = (aabb.min.y - ray_origin.y) * inv_dir.y;
    let t4 = (aabb.max.y - ray_origin.y) * inv_dir.y;

    t_min = t_min.max(t3.min(t4));
    t_max = t_max.min(t3.max(t4));

    // Intersection times with the two XY planes (z = min.z and z = max.z)
    let t5 = (aabb.min.z - ray_origin.z) * inv_dir.z;
    let t6 = (aabb.max.z - ray_origin.z) * inv_dir.z;

    t_min = t_min.max(t5.min(t6));
    t_max = t_max.min(t5.max(t6));

    // Check if there's a valid intersection
    if t_max >= t_min && t_max >= 0.0 {
        if t_min >= 0.0 {
            Some(t_min)
        } else {
            // Ray starts inside the AABB
            Some(t_max)
        }
    } else {
        None
    }
}

/// A set of static axis-aligned box colliders.
///
/// This is the crate's reference [`PhysicsWorld`]: ground slabs, walls
/// and platforms expressed as AABBs. Ray casts return the nearest hit
/// across all colliders.
#[derive(Debug, Clone, Default)]
pub struct StaticColliderWorld {
    colliders: Vec<Aabb>,
}

impl StaticColliderWorld {
    /// Create an empty collider set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a static collider to the set.
    pub fn add_collider(&mut self, aabb: Aabb) {
        self.colliders.push(aabb);
    }

    /// Number of colliders in the set.
    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    /// Whether the set contains no colliders.
    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }
}

impl PhysicsWorld for StaticColliderWorld {
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<f32> {
        let mut nearest: Option<f32> = None;
        for aabb in &self.colliders {
            if let Some(t) = ray_aabb_intersect(origin, direction, aabb) {
                if t <= max_distance && nearest.is_none_or(|n| t < n) {
                    nearest = Some(t);
                }
            }
        }
        nearest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ray_hits_box_front_face() {
        let aabb = Aabb::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        let t = ray_aabb_intersect(Vec3::new(0.0, 0.0, -5.0), Vec3::Z, &aabb);
        assert_eq!(t, Some(4.0));
    }

    #[test]
    fn test_ray_misses_box() {
        let aabb = Aabb::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        let t = ray_aabb_intersect(Vec3::new(0.0, 5.0, -5.0), Vec3::Z, &aabb);
        assert_eq!(t, None);
    }

    #[test]
    fn test_ray_behind_box_misses() {
        let aabb = Aabb::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        let t = ray_aabb_intersect(Vec3::new(0.0, 0.0, 5.0), Vec3::Z, &aabb);
        assert_eq!(t, None);
    }

    #[test]
    fn test_ray_starting_inside_box() {
        let aabb = Aabb::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        // Starting at the center, the exit face is 1 unit away
        let t = ray_aabb_intersect(Vec3::ZERO, Vec3::Z, &aabb);
        assert_eq!(t, Some(1.0));
    }

    #[test]
    fn test_downward_ground_probe() {
        let ground = Aabb::new(Vec3::new(-50.0, -1.0, -50.0), Vec3::new(50.0, 0.0, 50.0));
        let t = ray_aabb_intersect(Vec3::new(3.0, 0.25, -7.0), -Vec3::Y, &ground).unwrap();
        assert_relative_eq!(t, 0.25, epsilon = 1e-6);
    }

    #[test]
    fn test_from_center_half_extents() {
        let aabb = Aabb::from_center_half_extents(Vec3::new(1.0, 2.0, 3.0), Vec3::splat(0.5));
        assert_eq!(aabb.min, Vec3::new(0.5, 1.5, 2.5));
        assert_eq!(aabb.max, Vec3::new(1.5, 2.5, 3.5));
    }

    #[test]
    fn test_world_returns_nearest_hit() {
        let mut world = StaticColliderWorld::new();
        world.add_collider(Aabb::new(Vec3::new(-1.0, -1.0, 4.0), Vec3::new(1.0, 1.0, 5.0)));
        world.add_collider(Aabb::new(Vec3::new(-1.0, -1.0, 2.0), Vec3::new(1.0, 1.0, 3.0)));

        let t = world.cast_ray(Vec3::ZERO, Vec3::Z, 10.0);
        assert_eq!(t, Some(2.0));
    }

    #[test]
    fn test_world_respects_max_distance() {
        let mut world = StaticColliderWorld::new();
        world.add_collider(Aabb::new(Vec3::new(-1.0, -1.0, 2.0), Vec3::new(1.0, 1.0, 3.0)));

        assert_eq!(world.cast_ray(Vec3::ZERO, Vec3::Z, 1.0), None);
        assert_eq!(world.cast_ray(Vec3::ZERO, Vec3::Z, 2.5), Some(2.0));
    }

    #[test]
    fn test_empty_world_never_hits() {
        let world = StaticColliderWorld::new();
        assert_eq!(world.cast_ray(Vec3::ZERO, -Vec3::Y, 100.0), None);
        assert!(world.is_empty());
    }
}

//! Character Controls Engine
//!
//! A third-person character locomotion library: animation-state
//! selection, camera-relative directional movement, gravity and ground
//! contact via short ray probes, and obstacle-aware kinematic
//! displacement.
//!
//! The library sits between three collaborators it does not own:
//! per-frame keyboard input, a physics world capable of ray casting and
//! kinematic body movement, and a skeletal animation player. Rendering,
//! terrain, asset loading and the frame scheduler are the application's
//! concern.
//!
//! # Modules
//!
//! - [`player`] - the locomotion controller, its config and the
//!   directional-key table
//! - [`animation`] - named clip playback with cross-fade support
//! - [`physics`] - ray-cast world trait, kinematic body, AABB colliders
//! - [`camera`] - the orbit rig's position/look-target surface
//! - [`input`] - windowing-agnostic keyboard state
//!
//! # Frame contract
//!
//! Once per frame, in order: collect input, call
//! [`LocomotionController::update`], then commit the proposed movement
//! with [`KinematicBody::step`]. Nothing else may mutate the body in
//! between.
//!
//! # Example
//!
//! ```
//! use character_controls_engine::animation::AnimationMixer;
//! use character_controls_engine::camera::OrbitCamera;
//! use character_controls_engine::input::{KeyCode, MovementKeys};
//! use character_controls_engine::physics::{Aabb, KinematicBody, StaticColliderWorld};
//! use character_controls_engine::player::{LocomotionConfig, LocomotionController};
//! use glam::Vec3;
//!
//! // Clips for every reachable action must exist up front.
//! let mut mixer = AnimationMixer::new();
//! for (name, duration) in [("Idle", 2.0), ("Walk", 1.0), ("Run", 0.8), ("Jump", 0.5)] {
//!     mixer.add_clip(name, duration);
//! }
//!
//! let mut world = StaticColliderWorld::new();
//! world.add_collider(Aabb::new(
//!     Vec3::new(-50.0, -1.0, -50.0),
//!     Vec3::new(50.0, 0.0, 50.0),
//! ));
//!
//! let mut body = KinematicBody::new(Vec3::new(0.0, 0.5, 0.0));
//! let mut camera = OrbitCamera::default();
//! let mut controller = LocomotionController::new(
//!     LocomotionConfig::default(),
//!     &mut mixer,
//!     &body,
//!     &mut camera,
//!     Vec3::new(0.0, 1.0, 5.0),
//! )
//! .expect("all locomotion clips registered");
//!
//! let mut keys = MovementKeys::new();
//! keys.handle_key(KeyCode::W, true);
//!
//! controller
//!     .update(&world, &mut body, &mut camera, &mut mixer, 1.0 / 60.0, &keys)
//!     .unwrap();
//! body.step();
//! ```

pub mod animation;
pub mod camera;
pub mod error;
pub mod input;
pub mod physics;
pub mod player;

// Re-export commonly used types at crate level for convenience
pub use animation::{AnimationClip, AnimationMixer};
pub use camera::OrbitCamera;
pub use error::ControlsError;
pub use input::{KeyCode, MovementKeys};
pub use physics::{Aabb, KinematicBody, PhysicsWorld, StaticColliderWorld};
pub use player::{LocomotionAction, LocomotionConfig, LocomotionController};

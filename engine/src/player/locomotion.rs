//! Third-person locomotion controller.
//!
//! The per-frame update that ties input, animation, camera and kinematic
//! physics together:
//!
//! 1. Resolve the animation action from input and cross-fade on change.
//! 2. Map the held directional keys to a camera-relative heading and
//!    turn the visual model toward it.
//! 3. Integrate a smoothed fall velocity against a downward ground probe.
//! 4. Block forward displacement against a short obstacle probe.
//! 5. Propose the next kinematic translation and re-seat the camera rig.
//!
//! The controller never steps the physics world itself: the displacement
//! it computes is a proposal, committed by [`KinematicBody::step`] once
//! per frame after this update.
//!
//! # Example
//!
//! ```
//! use character_controls_engine::animation::AnimationMixer;
//! use character_controls_engine::camera::OrbitCamera;
//! use character_controls_engine::input::MovementKeys;
//! use character_controls_engine::physics::{KinematicBody, StaticColliderWorld};
//! use character_controls_engine::player::{LocomotionConfig, LocomotionController};
//! use glam::Vec3;
//!
//! let mut mixer = AnimationMixer::new();
//! for (name, duration) in [("Idle", 2.0), ("Walk", 1.0), ("Run", 0.8), ("Jump", 0.5)] {
//!     mixer.add_clip(name, duration);
//! }
//! let mut body = KinematicBody::new(Vec3::new(0.0, 3.0, 0.0));
//! let mut camera = OrbitCamera::default();
//! let world = StaticColliderWorld::new();
//!
//! let mut controller = LocomotionController::new(
//!     LocomotionConfig::default(),
//!     &mut mixer,
//!     &body,
//!     &mut camera,
//!     Vec3::new(0.0, 1.0, 5.0),
//! )
//! .unwrap();
//!
//! // Each frame:
//! let keys = MovementKeys::new();
//! controller
//!     .update(&world, &mut body, &mut camera, &mut mixer, 1.0 / 60.0, &keys)
//!     .unwrap();
//! body.step();
//! ```

use glam::{Quat, Vec3};
use log::{debug, warn};

use crate::animation::AnimationMixer;
use crate::camera::OrbitCamera;
use crate::error::ControlsError;
use crate::input::MovementKeys;
use crate::physics::{KinematicBody, PhysicsWorld};
use crate::player::config::LocomotionConfig;
use crate::player::direction::direction_offset;

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Rotate `from` toward `to` by at most `max_angle` radians.
///
/// Spherical interpolation with a fixed angular step, so the model turns
/// visibly instead of snapping to its new heading.
fn rotate_towards(from: Quat, to: Quat, max_angle: f32) -> Quat {
    let angle = from.angle_between(to);
    if angle <= max_angle || angle < 1e-6 {
        to
    } else {
        from.slerp(to, max_angle / angle)
    }
}

/// The character's animation action.
///
/// Exactly one action is active on the mixer at any time; a change of
/// action cross-fades the old clip into the new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocomotionAction {
    Idle,
    Walk,
    Run,
    Jump,
}

impl LocomotionAction {
    /// Every reachable action; the mixer must carry a clip for each.
    pub const ALL: [LocomotionAction; 4] = [
        LocomotionAction::Idle,
        LocomotionAction::Walk,
        LocomotionAction::Run,
        LocomotionAction::Jump,
    ];

    /// Name of the animation clip that plays for this action.
    pub fn clip_name(&self) -> &'static str {
        match self {
            LocomotionAction::Idle => "Idle",
            LocomotionAction::Walk => "Walk",
            LocomotionAction::Run => "Run",
            LocomotionAction::Jump => "Jump",
        }
    }
}

/// Third-person character locomotion controller.
///
/// Owns the animation action state machine, the smoothed fall velocity
/// and the visual model's heading. External collaborators - the physics
/// world, the kinematic body, the camera rig and the animation mixer -
/// are borrowed per call rather than stored.
///
/// The jump flag and run toggle are discrete external events delivered
/// through [`set_jumping`](Self::set_jumping) and
/// [`toggle_run`](Self::toggle_run); they may arrive at any time relative
/// to [`update`](Self::update).
#[derive(Debug, Clone)]
pub struct LocomotionController {
    config: LocomotionConfig,
    current_action: LocomotionAction,
    is_jumping: bool,
    run_toggled: bool,
    /// Smoothed vertical fall velocity, persisted across frames and
    /// reset to zero on ground contact.
    stored_fall: f32,
    /// Current facing of the visual model.
    orientation: Quat,
    /// Heading the model is being turned toward.
    rotation_target: Quat,
    /// The visual model's last committed translation, used to recover
    /// the camera's follow offset each frame.
    model_position: Vec3,
}

impl LocomotionController {
    /// Create a controller for a character whose body, camera rig and
    /// animation clips already exist.
    ///
    /// Verifies that the mixer carries a clip for every reachable action
    /// and starts the idle clip; a missing clip is a configuration error
    /// (`ControlsError::MissingClip`), not something to recover from at
    /// runtime. The camera rig is seated behind the body at the supplied
    /// world-space `camera_offset`.
    pub fn new(
        config: LocomotionConfig,
        mixer: &mut AnimationMixer,
        body: &KinematicBody,
        camera: &mut OrbitCamera,
        camera_offset: Vec3,
    ) -> Result<Self, ControlsError> {
        for action in LocomotionAction::ALL {
            if !mixer.has_clip(action.clip_name()) {
                return Err(ControlsError::MissingClip(action.clip_name().to_string()));
            }
        }
        mixer.play(LocomotionAction::Idle.clip_name())?;

        let translation = body.translation();
        camera.follow(translation, camera_offset);

        Ok(Self {
            config,
            current_action: LocomotionAction::Idle,
            is_jumping: false,
            run_toggled: false,
            stored_fall: 0.0,
            orientation: Quat::IDENTITY,
            rotation_target: Quat::IDENTITY,
            model_position: translation,
        })
    }

    /// The currently active animation action.
    pub fn current_action(&self) -> LocomotionAction {
        self.current_action
    }

    /// Whether the jump flag is set.
    pub fn is_jumping(&self) -> bool {
        self.is_jumping
    }

    /// Whether directional movement resolves to Run instead of Walk.
    pub fn run_toggled(&self) -> bool {
        self.run_toggled
    }

    /// The smoothed vertical fall velocity carried across frames.
    pub fn fall_velocity(&self) -> f32 {
        self.stored_fall
    }

    /// Current facing of the visual model.
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// The heading the visual model is turning toward.
    pub fn rotation_target(&self) -> Quat {
        self.rotation_target
    }

    /// The visual model's last committed translation.
    pub fn model_position(&self) -> Vec3 {
        self.model_position
    }

    /// The controller's tuning parameters.
    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    /// Flip the run toggle. Delivered by the input layer on its run-key
    /// press event, not polled.
    pub fn toggle_run(&mut self) {
        self.run_toggled = !self.run_toggled;
    }

    /// Set or clear the jump flag. Delivered by the input layer on jump
    /// key press/release. While set, the action is forced to Jump.
    pub fn set_jumping(&mut self, jumping: bool) {
        self.is_jumping = jumping;
    }

    /// Resolve the animation action for the current input. Jump has the
    /// highest priority and overrides directional input entirely.
    fn resolve_action(&self, keys: &MovementKeys) -> LocomotionAction {
        if self.is_jumping {
            LocomotionAction::Jump
        } else if keys.any_direction_pressed() && self.run_toggled {
            LocomotionAction::Run
        } else if keys.any_direction_pressed() {
            LocomotionAction::Walk
        } else {
            LocomotionAction::Idle
        }
    }

    /// Advance the character by one frame.
    ///
    /// Call once per frame, followed by exactly one [`KinematicBody::step`];
    /// the computed displacement is only a proposed next translation and
    /// takes effect on that step. `delta` is the frame time in seconds
    /// and is deliberately not clamped.
    ///
    /// Returns `ControlsError::MissingClip` if a required animation clip
    /// has been removed from the mixer since construction.
    pub fn update<W: PhysicsWorld>(
        &mut self,
        world: &W,
        body: &mut KinematicBody,
        camera: &mut OrbitCamera,
        mixer: &mut AnimationMixer,
        delta: f32,
        keys: &MovementKeys,
    ) -> Result<(), ControlsError> {
        // 1. Animation state selection. Only a change of resolved action
        // triggers a cross-fade; repeated frames with unchanged input are
        // a no-op here.
        let action = self.resolve_action(keys);
        if action != self.current_action {
            debug!(
                "locomotion action {:?} -> {:?}",
                self.current_action, action
            );
            mixer.cross_fade(
                self.current_action.clip_name(),
                action.clip_name(),
                self.config.fade_duration,
            )?;
            self.current_action = action;
        }
        mixer.update(delta);

        // 2. Camera-relative movement heading. Skipped entirely while
        // idle; while jumping the heading is only computed when a
        // directional key is held.
        let mut displacement = Vec3::ZERO;
        let mut speed = 0.0;
        if self.current_action != LocomotionAction::Idle {
            let camera_yaw = (self.model_position.x - camera.position.x)
                .atan2(self.model_position.z - camera.position.z);

            if let Some(offset) = direction_offset(keys) {
                self.rotation_target = Quat::from_axis_angle(Vec3::Y, camera_yaw + offset);
                self.orientation = rotate_towards(
                    self.orientation,
                    self.rotation_target,
                    self.config.rotation_step,
                );

                displacement = Quat::from_axis_angle(Vec3::Y, offset) * camera.horizontal_forward();
                speed = self
                    .config
                    .speed(self.current_action == LocomotionAction::Run);
            }
        }

        let translation = body.translation();

        // 3. Out-of-bounds recovery: a fatal fall, not something to
        // integrate out of. Probes and camera bookkeeping are bypassed;
        // animation and rotation state stay as they were.
        if translation.y < self.config.out_of_bounds_y {
            warn!(
                "character fell out of bounds at y = {:.2}, respawning at {:?}",
                translation.y, self.config.respawn_point
            );
            body.set_next_translation(self.config.respawn_point);
            return Ok(());
        }

        // 4. Camera target bookkeeping: recover the rig's current offset
        // from the model before committing the new model position.
        let camera_offset = camera.position - self.model_position;
        self.model_position = translation;
        camera.follow(translation, camera_offset);

        // 5. Gravity and ground contact. The fall velocity approaches the
        // instantaneous gravitational delta exponentially rather than by
        // direct integration, softening the onset of a fall.
        displacement.y += lerp(
            self.stored_fall,
            -self.config.gravity * delta,
            self.config.fall_smoothing,
        );
        self.stored_fall = displacement.y;

        if let Some(toi) = world.cast_ray(translation, -Vec3::Y, self.config.ground_probe_distance)
        {
            let hit_y = translation.y - toi;
            let gap = translation.y - (hit_y + self.config.body_radius);
            if gap < 0.0 {
                // Grounded: cancel the fall and push gently back toward
                // the surface instead of snapping onto it.
                self.stored_fall = 0.0;
                displacement.y = lerp(0.0, gap.abs(), self.config.ground_snap_smoothing);
            }
        }

        // 6. Forward obstacle probe, world +Z only.
        if let Some(toi) = world.cast_ray(translation, Vec3::Z, self.config.forward_probe_distance)
        {
            let hit_z = translation.z + toi;
            let gap = translation.z - (hit_z + self.config.body_radius);
            if gap < 0.0 {
                displacement.z = 0.0;
            }
        }

        // 7. Propose the next kinematic translation. Horizontal movement
        // scales by speed and frame time; the vertical component is
        // already a per-frame displacement.
        displacement.x *= speed * delta;
        displacement.z *= speed * delta;
        body.set_next_translation(translation + displacement);

        Ok(())
    }
}

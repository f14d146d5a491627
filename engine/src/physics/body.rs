//! Kinematic rigid body.
//!
//! A kinematic body is position-driven: each frame a controller proposes
//! a target translation, and the translation is committed when the world
//! is stepped. Forces and impulses never apply.

use glam::Vec3;

/// A kinematic rigid body with the propose-then-step translation protocol.
///
/// The controller reads [`translation`](Self::translation) and writes
/// [`set_next_translation`](Self::set_next_translation); the frame
/// scheduler commits the proposal with [`step`](Self::step) exactly once
/// per frame, after the controller update. Nothing else may mutate the
/// body in between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicBody {
    translation: Vec3,
    next_translation: Option<Vec3>,
}

impl KinematicBody {
    /// Create a body at the given world translation.
    pub fn new(translation: Vec3) -> Self {
        Self {
            translation,
            next_translation: None,
        }
    }

    /// The body's current committed translation.
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Propose the translation to commit on the next step.
    ///
    /// A later proposal in the same frame replaces an earlier one.
    pub fn set_next_translation(&mut self, translation: Vec3) {
        self.next_translation = Some(translation);
    }

    /// The currently proposed next translation, if any.
    pub fn next_translation(&self) -> Option<Vec3> {
        self.next_translation
    }

    /// Commit the proposed translation, if one was set.
    ///
    /// This is the world-step half of the frame contract; call it once
    /// per frame after the controller update.
    pub fn step(&mut self) {
        if let Some(next) = self.next_translation.take() {
            self.translation = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_is_committed_on_step() {
        let mut body = KinematicBody::new(Vec3::new(1.0, 2.0, 3.0));
        body.set_next_translation(Vec3::new(4.0, 5.0, 6.0));

        // Proposal does not move the body...
        assert_eq!(body.translation(), Vec3::new(1.0, 2.0, 3.0));

        // ...the step does.
        body.step();
        assert_eq!(body.translation(), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(body.next_translation(), None);
    }

    #[test]
    fn test_step_without_proposal_is_a_no_op() {
        let mut body = KinematicBody::new(Vec3::ZERO);
        body.step();
        assert_eq!(body.translation(), Vec3::ZERO);
    }

    #[test]
    fn test_later_proposal_replaces_earlier() {
        let mut body = KinematicBody::new(Vec3::ZERO);
        body.set_next_translation(Vec3::X);
        body.set_next_translation(Vec3::Y);
        body.step();
        assert_eq!(body.translation(), Vec3::Y);
    }
}

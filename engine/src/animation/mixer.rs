//! Animation Mixer Module
//!
//! A minimal clip mixer for skeletal animation playback. Each clip tracks
//! its own play head and blend weight; the mixer owns the clips by name
//! and advances them together once per frame.
//!
//! Cross-fading is modeled explicitly as two concurrent linear weight
//! ramps: the outgoing clip fades to zero and stops, the incoming clip
//! resets its play head and fades to full weight. At most one fade per
//! clip is active; scheduling a new fade replaces the old one.

use std::collections::HashMap;

use crate::error::ControlsError;

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// An in-flight linear weight ramp on a single clip.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Fade {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
}

/// A single named animation clip: play head, blend weight and fade state.
///
/// The clip does not hold keyframe data; sampling the skeleton is the
/// renderer's concern. This type carries exactly the playback state the
/// locomotion controller needs to drive: `reset`, `play`, `fade_in`,
/// `fade_out`, and per-frame advancement via [`AnimationMixer::update`].
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    /// Length of the clip in seconds. The play head wraps at this value.
    duration: f32,
    /// Current play head position in seconds.
    time: f32,
    /// Current blend weight in [0, 1].
    weight: f32,
    /// Whether the play head advances.
    playing: bool,
    fade: Option<Fade>,
}

impl AnimationClip {
    /// Create a stopped clip of the given duration at full weight.
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            time: 0.0,
            weight: 1.0,
            playing: false,
            fade: None,
        }
    }

    /// Rewind the play head to the start of the clip.
    pub fn reset(&mut self) {
        self.time = 0.0;
    }

    /// Start advancing the play head.
    pub fn play(&mut self) {
        self.playing = true;
    }

    /// Stop advancing the play head.
    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Ramp the blend weight from zero to full over `duration` seconds.
    pub fn fade_in(&mut self, duration: f32) {
        self.weight = 0.0;
        self.fade = Some(Fade {
            from: 0.0,
            to: 1.0,
            duration,
            elapsed: 0.0,
        });
    }

    /// Ramp the blend weight from its current value to zero over
    /// `duration` seconds. The clip stops once the fade completes.
    pub fn fade_out(&mut self, duration: f32) {
        self.fade = Some(Fade {
            from: self.weight,
            to: 0.0,
            duration,
            elapsed: 0.0,
        });
    }

    /// Current play head position in seconds.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Current blend weight in [0, 1].
    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// Whether the play head is advancing.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether a weight ramp is currently in flight.
    pub fn is_fading(&self) -> bool {
        self.fade.is_some()
    }

    /// Advance play head and fade state by `delta` seconds.
    fn advance(&mut self, delta: f32) {
        if self.playing && self.duration > 0.0 {
            self.time = (self.time + delta) % self.duration;
        }

        if let Some(fade) = &mut self.fade {
            fade.elapsed += delta;
            let t = if fade.duration > 0.0 {
                (fade.elapsed / fade.duration).min(1.0)
            } else {
                1.0
            };
            self.weight = lerp(fade.from, fade.to, t);

            if t >= 1.0 {
                let faded_out = fade.to == 0.0;
                self.fade = None;
                if faded_out {
                    self.playing = false;
                }
            }
        }
    }
}

/// Owns named animation clips and advances them in lockstep.
///
/// # Example
///
/// ```
/// use character_controls_engine::animation::AnimationMixer;
///
/// let mut mixer = AnimationMixer::new();
/// mixer.add_clip("Idle", 2.0);
/// mixer.add_clip("Walk", 1.0);
/// mixer.play("Idle").unwrap();
///
/// // Later, on a state change:
/// mixer.cross_fade("Idle", "Walk", 0.2).unwrap();
/// mixer.update(0.016);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnimationMixer {
    clips: HashMap<String, AnimationClip>,
}

impl AnimationMixer {
    /// Create an empty mixer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a clip under `name` with the given duration in seconds.
    ///
    /// Re-registering a name replaces the existing clip.
    pub fn add_clip(&mut self, name: impl Into<String>, duration: f32) {
        self.clips.insert(name.into(), AnimationClip::new(duration));
    }

    /// Check whether a clip is registered under `name`.
    pub fn has_clip(&self, name: &str) -> bool {
        self.clips.contains_key(name)
    }

    /// Borrow a clip by name.
    pub fn clip(&self, name: &str) -> Option<&AnimationClip> {
        self.clips.get(name)
    }

    /// Mutably borrow a clip by name.
    pub fn clip_mut(&mut self, name: &str) -> Option<&mut AnimationClip> {
        self.clips.get_mut(name)
    }

    /// Start playing the named clip at full weight.
    pub fn play(&mut self, name: &str) -> Result<(), ControlsError> {
        let clip = self
            .clips
            .get_mut(name)
            .ok_or_else(|| ControlsError::MissingClip(name.to_string()))?;
        clip.play();
        Ok(())
    }

    /// Fade out the clip `from` while resetting, fading in and playing
    /// the clip `to`, both over the same `duration`.
    ///
    /// A cross-fade requested while a previous fade is still in flight
    /// simply re-schedules fades on the named clips; there is no queue.
    pub fn cross_fade(&mut self, from: &str, to: &str, duration: f32) -> Result<(), ControlsError> {
        if !self.clips.contains_key(from) {
            return Err(ControlsError::MissingClip(from.to_string()));
        }
        if !self.clips.contains_key(to) {
            return Err(ControlsError::MissingClip(to.to_string()));
        }

        // Both lookups are infallible after the checks above.
        if let Some(current) = self.clips.get_mut(from) {
            current.fade_out(duration);
        }
        if let Some(next) = self.clips.get_mut(to) {
            next.reset();
            next.fade_in(duration);
            next.play();
        }
        Ok(())
    }

    /// Advance every clip's play head and fade state by `delta` seconds.
    pub fn update(&mut self, delta: f32) {
        for clip in self.clips.values_mut() {
            clip.advance(delta);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixer_with_clips() -> AnimationMixer {
        let mut mixer = AnimationMixer::new();
        mixer.add_clip("Idle", 2.0);
        mixer.add_clip("Walk", 1.0);
        mixer
    }

    #[test]
    fn test_new_clip_state() {
        let clip = AnimationClip::new(1.5);
        assert_eq!(clip.time(), 0.0);
        assert_eq!(clip.weight(), 1.0);
        assert!(!clip.is_playing());
        assert!(!clip.is_fading());
    }

    #[test]
    fn test_play_advances_and_wraps() {
        let mut mixer = mixer_with_clips();
        mixer.play("Walk").unwrap();

        mixer.update(0.4);
        assert!((mixer.clip("Walk").unwrap().time() - 0.4).abs() < 1e-6);

        // Walk is 1.0s long, so 0.4 + 0.8 wraps to 0.2
        mixer.update(0.8);
        assert!((mixer.clip("Walk").unwrap().time() - 0.2).abs() < 1e-5);
    }

    #[test]
    fn test_stopped_clip_does_not_advance() {
        let mut mixer = mixer_with_clips();
        mixer.update(0.5);
        assert_eq!(mixer.clip("Idle").unwrap().time(), 0.0);
    }

    #[test]
    fn test_fade_in_ramps_weight() {
        let mut mixer = mixer_with_clips();
        mixer.clip_mut("Walk").unwrap().fade_in(0.2);
        mixer.play("Walk").unwrap();

        assert_eq!(mixer.clip("Walk").unwrap().weight(), 0.0);

        mixer.update(0.1);
        assert!((mixer.clip("Walk").unwrap().weight() - 0.5).abs() < 1e-5);

        mixer.update(0.1);
        assert!((mixer.clip("Walk").unwrap().weight() - 1.0).abs() < 1e-5);
        assert!(!mixer.clip("Walk").unwrap().is_fading());
        assert!(mixer.clip("Walk").unwrap().is_playing());
    }

    #[test]
    fn test_fade_out_stops_clip() {
        let mut mixer = mixer_with_clips();
        mixer.play("Idle").unwrap();
        mixer.clip_mut("Idle").unwrap().fade_out(0.2);

        mixer.update(0.3);
        let idle = mixer.clip("Idle").unwrap();
        assert_eq!(idle.weight(), 0.0);
        assert!(!idle.is_playing());
        assert!(!idle.is_fading());
    }

    #[test]
    fn test_cross_fade_swaps_active_clip() {
        let mut mixer = mixer_with_clips();
        mixer.play("Idle").unwrap();
        mixer.update(0.5);

        mixer.cross_fade("Idle", "Walk", 0.2).unwrap();
        // Incoming clip play head is reset before fading in
        assert_eq!(mixer.clip("Walk").unwrap().time(), 0.0);

        mixer.update(0.25);
        assert!(!mixer.clip("Idle").unwrap().is_playing());
        assert!(mixer.clip("Walk").unwrap().is_playing());
        assert!((mixer.clip("Walk").unwrap().weight() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_cross_fade_retrigger_mid_fade() {
        let mut mixer = mixer_with_clips();
        mixer.play("Idle").unwrap();

        mixer.cross_fade("Idle", "Walk", 0.2).unwrap();
        mixer.update(0.1);
        // Change of mind halfway through: fade back. No queuing, the new
        // fades replace the old ones.
        mixer.cross_fade("Walk", "Idle", 0.2).unwrap();
        mixer.update(0.25);

        assert!(mixer.clip("Idle").unwrap().is_playing());
        assert!(!mixer.clip("Walk").unwrap().is_playing());
    }

    #[test]
    fn test_cross_fade_missing_clip_errors() {
        let mut mixer = mixer_with_clips();
        let err = mixer.cross_fade("Idle", "Run", 0.2).unwrap_err();
        assert_eq!(err, ControlsError::MissingClip("Run".to_string()));

        let err = mixer.cross_fade("Sprint", "Walk", 0.2).unwrap_err();
        assert_eq!(err, ControlsError::MissingClip("Sprint".to_string()));
    }

    #[test]
    fn test_play_missing_clip_errors() {
        let mut mixer = AnimationMixer::new();
        assert!(mixer.play("Idle").is_err());
    }
}

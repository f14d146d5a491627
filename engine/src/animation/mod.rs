//! Animation Module
//!
//! Playback-state tracking for named skeletal animation clips.
//!
//! The mixer deliberately exposes only the primitives the locomotion
//! state machine needs - `reset`, `play`, `fade_in`, `fade_out` and a
//! per-frame `update` - rather than a general blend graph. Keyframe
//! sampling and skinning belong to the renderer.

pub mod mixer;

pub use mixer::{AnimationClip, AnimationMixer};

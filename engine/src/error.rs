//! Error types for the locomotion engine.

use thiserror::Error;

/// Errors surfaced by the locomotion controller and animation mixer.
///
/// The controller assumes total clip coverage for its reachable actions;
/// a missing clip is a configuration error and fails loudly rather than
/// being silently skipped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ControlsError {
    /// An animation clip required for a reachable action is not registered.
    #[error("animation clip `{0}` is not registered with the mixer")]
    MissingClip(String),
}

//! Directional key to heading-offset mapping.
//!
//! Movement is camera-relative: the four directional keys select an
//! angular offset from the camera's forward heading, and the character
//! moves along the camera forward rotated by that offset. The mapping is
//! a fixed priority-ordered table - forward-biased combinations are
//! checked before pure lateral ones, so contradictory chords (all four
//! keys held) still resolve deterministically.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use crate::input::MovementKeys;

/// Resolve the held directional keys to an angular offset in radians
/// from the camera's forward heading.
///
/// | Keys held | Offset |
/// |-----------|--------|
/// | W+A       | +π/4   |
/// | W+D       | −π/4   |
/// | W         | 0      |
/// | S+A       | +3π/4  |
/// | S+D       | −3π/4  |
/// | S         | π      |
/// | A         | +π/2   |
/// | D         | −π/2   |
///
/// Returns `None` when no directional key is held (jump alone or no
/// input): the frame contributes no rotation and no movement heading.
pub fn direction_offset(keys: &MovementKeys) -> Option<f32> {
    if keys.forward {
        if keys.left {
            Some(FRAC_PI_4)
        } else if keys.right {
            Some(-FRAC_PI_4)
        } else {
            Some(0.0)
        }
    } else if keys.backward {
        if keys.left {
            Some(3.0 * FRAC_PI_4)
        } else if keys.right {
            Some(-3.0 * FRAC_PI_4)
        } else {
            Some(PI)
        }
    } else if keys.left {
        Some(FRAC_PI_2)
    } else if keys.right {
        Some(-FRAC_PI_2)
    } else {
        None
    }
}

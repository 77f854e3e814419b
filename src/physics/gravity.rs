//! Gravity calculation for the approaching body.
//!
//! Positions are in scene units; the distance is converted back to meters
//! before applying Newton's law, so the returned acceleration is physical.

use bevy::math::DVec3;

use crate::types::Attractor;

/// Gravitational acceleration (m/s²) on a body at `position`.
///
/// Force is `G·M·m / r²` and acceleration is force over the body's mass, so
/// the body's own mass cancels and zero-mass bodies still fall.
///
/// # Returns
/// `None` when the body sits exactly on the attractor's center, where the
/// direction is undefined.
#[inline]
pub fn compute_acceleration(
    position: DVec3,
    attractor: &Attractor,
    distance_scale: f64,
) -> Option<DVec3> {
    let delta = attractor.position - position;
    let distance = delta.length();
    if distance == 0.0 {
        return None;
    }

    let real_distance = distance / distance_scale;
    let magnitude = attractor.gm() / (real_distance * real_distance);

    Some(delta / distance * magnitude)
}

/// Specific orbital energy (J/kg) of a body relative to the attractor.
///
/// E = v²/2 - GM/r, in physical units.
/// - E < 0: bound, will come back
/// - E >= 0: unbound, escapes if moving outward
///
/// Returns `None` at the attractor's center.
pub fn orbital_energy(
    position: DVec3,
    velocity: DVec3,
    attractor: &Attractor,
    distance_scale: f64,
) -> Option<f64> {
    let r = (position - attractor.position).length() / distance_scale;
    if r == 0.0 {
        return None;
    }
    let v = velocity.length() / distance_scale;
    Some(0.5 * v * v - attractor.gm() / r)
}

//! Capture detection for the approaching body.
//!
//! A body has impacted once it comes closer to the attractor's center than the
//! capture radius. Detection tests the whole segment travelled during a
//! sub-step, so a fast body cannot skip over the sphere between two samples.
//! The impact is reported once as an [`ImpactEvent`] and kept in
//! [`CollisionState`] for the UI.

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::geo::GeoPoint;
use crate::types::{Attractor, RAD_TO_DEG};

/// Terminal state of a run: where and when the body hit the attractor.
#[derive(Message, Clone, Debug, PartialEq)]
pub struct ImpactEvent {
    /// Simulated seconds since the run was initialized.
    pub time: f64,
    /// Impact point on the capture sphere, in scene units.
    pub position: DVec3,
    /// Velocity at impact, in scene units per simulated second.
    pub velocity: DVec3,
}

impl ImpactEvent {
    /// Impact speed in km/s.
    pub fn speed_kps(&self, distance_scale: f64) -> f64 {
        self.velocity.length() / distance_scale / 1000.0
    }

    /// Geographic site of the impact, for map marker placement.
    ///
    /// Scene +y is the north pole, +x is longitude 0 and longitude grows
    /// toward -z.
    pub fn site(&self, attractor: &Attractor) -> GeoPoint {
        let local = self.position - attractor.position;
        let r = local.length();
        if r == 0.0 {
            return GeoPoint { lat: 0.0, lng: 0.0 };
        }
        let lat = (local.y / r).clamp(-1.0, 1.0).asin() * RAD_TO_DEG;
        let lng = (-local.z).atan2(local.x) * RAD_TO_DEG;
        GeoPoint { lat, lng }
    }
}

/// Resource tracking the most recent impact for UI display.
#[derive(Resource, Default)]
pub struct CollisionState {
    pub last_impact: Option<ImpactEvent>,
}

impl CollisionState {
    /// Clear the collision state (e.g., when loading a new scenario).
    pub fn clear(&mut self) {
        self.last_impact = None;
    }

    pub fn has_impact(&self) -> bool {
        self.last_impact.is_some()
    }
}

/// Whether a point is inside the capture sphere.
///
/// A point exactly at the center counts as captured even for a zero radius.
pub fn is_captured(position: DVec3, attractor: &Attractor) -> bool {
    let distance = (position - attractor.position).length();
    distance == 0.0 || distance < attractor.capture_radius
}

/// Fraction along `start -> end` at which the segment enters the capture
/// sphere, or `None` if it never does.
///
/// Returns `Some(0.0)` when `start` is already inside. A segment that only
/// touches the sphere tangentially never enters it.
pub fn segment_entry(start: DVec3, end: DVec3, attractor: &Attractor) -> Option<f64> {
    if is_captured(start, attractor) {
        return Some(0.0);
    }

    let d = end - start;
    let f = start - attractor.position;
    let a = d.length_squared();
    if a == 0.0 {
        return None;
    }

    // |f + t d|² = R²
    let b = 2.0 * f.dot(d);
    let c = f.length_squared() - attractor.capture_radius * attractor.capture_radius;
    let discriminant = b * b - 4.0 * a * c;
    if discriminant <= 0.0 {
        return None;
    }

    let t = (-b - discriminant.sqrt()) / (2.0 * a);
    (0.0..=1.0).contains(&t).then_some(t)
}

/// Project a point onto the capture sphere surface.
///
/// `fallback` gives the direction to use when the point sits exactly at the
/// center; +x is used if that is zero as well.
pub fn surface_point(position: DVec3, fallback: DVec3, attractor: &Attractor) -> DVec3 {
    let direction = (position - attractor.position)
        .try_normalize()
        .or_else(|| fallback.try_normalize())
        .unwrap_or(DVec3::X);
    attractor.position + direction * attractor.capture_radius
}

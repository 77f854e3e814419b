//! Approach outcome prediction.
//!
//! Runs a private integrator ahead of time with a fixed frame delta and
//! classifies the result:
//! - Impact: the body is captured
//! - Escape: past closest approach, moving away on an unbound trajectory
//! - Undetermined: the horizon ran out first

use bevy::math::DVec3;

use crate::physics::{
    ApproachError, ApproachIntegrator, IntegratorConfig, StepOutcome, orbital_energy,
};
use crate::types::{Attractor, ImpactScenario};

/// Outcome of a predicted approach.
#[derive(Clone, Debug, PartialEq)]
pub enum ApproachOutcome {
    /// The body will hit the attractor.
    Impact {
        /// Simulated seconds until impact.
        time: f64,
        /// Impact point in scene units.
        position: DVec3,
        /// Impact speed (km/s).
        speed_kps: f64,
    },

    /// The body misses and leaves for good.
    Escape {
        /// Closest distance to the attractor's center (scene units).
        closest_approach: f64,
    },

    /// Neither happened within the horizon.
    Undetermined {
        /// Closest distance seen so far (scene units).
        closest_approach: f64,
    },
}

impl ApproachOutcome {
    pub fn is_impact(&self) -> bool {
        matches!(self, ApproachOutcome::Impact { .. })
    }

    pub fn is_escape(&self) -> bool {
        matches!(self, ApproachOutcome::Escape { .. })
    }

    /// Closest approach in scene units; the capture radius for impacts.
    pub fn closest_approach(&self, attractor: &Attractor) -> f64 {
        match self {
            ApproachOutcome::Impact { .. } => attractor.capture_radius,
            ApproachOutcome::Escape { closest_approach }
            | ApproachOutcome::Undetermined { closest_approach } => *closest_approach,
        }
    }
}

/// Whether a body is moving away on an unbound trajectory.
///
/// Radial velocity must be positive and specific orbital energy
/// non-negative; such a body never returns.
pub fn is_escaping(
    position: DVec3,
    velocity: DVec3,
    attractor: &Attractor,
    distance_scale: f64,
) -> bool {
    let outward = (position - attractor.position).dot(velocity) > 0.0;
    outward
        && orbital_energy(position, velocity, attractor, distance_scale)
            .is_some_and(|energy| energy >= 0.0)
}

/// Classify the current state of a run.
pub fn classify(integrator: &ApproachIntegrator, attractor: &Attractor) -> ApproachOutcome {
    let distance_scale = integrator.config().distance_scale;
    if let Some(event) = integrator.impact() {
        return ApproachOutcome::Impact {
            time: event.time,
            position: event.position,
            speed_kps: event.speed_kps(distance_scale),
        };
    }

    let body = integrator.body();
    let closest_approach = integrator
        .closest_approach()
        .unwrap_or_else(|| body.distance_to(attractor));

    if is_escaping(body.position, body.velocity, attractor, distance_scale) {
        ApproachOutcome::Escape { closest_approach }
    } else {
        ApproachOutcome::Undetermined { closest_approach }
    }
}

/// Predict the outcome of a scenario with a deflection impulse applied at
/// the start.
///
/// # Arguments
/// * `scenario` - Impactor parameters
/// * `impulse` - Deflection impulse magnitude (0 for none)
/// * `attractor` - The gravitating body
/// * `config` - Integrator configuration
/// * `frame_dt` - Real seconds per simulated frame
/// * `max_frames` - Prediction horizon in frames
pub fn predict_outcome(
    scenario: ImpactScenario,
    impulse: f64,
    attractor: &Attractor,
    config: &IntegratorConfig,
    frame_dt: f64,
    max_frames: usize,
) -> Result<ApproachOutcome, ApproachError> {
    let mut integrator = ApproachIntegrator::new(scenario, config.clone());
    integrator.apply_impulse(impulse)?;

    for _ in 0..max_frames {
        if integrator.step(attractor, frame_dt)?.is_impact() {
            break;
        }
        let body = integrator.body();
        if is_escaping(body.position, body.velocity, attractor, config.distance_scale) {
            break;
        }
    }

    Ok(classify(&integrator, attractor))
}

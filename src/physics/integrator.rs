//! Stepped approach integrator.
//!
//! Advances a point mass toward a fixed attractor in scene units, one frame at
//! a time. Each frame's real-time delta is stretched by the time scale and
//! split into short semi-implicit Euler sub-steps:
//!
//! 1. a = G·M / r_real² toward the attractor (m/s²)
//! 2. v += a · h · distance_scale
//! 3. x += v · h
//!
//! Every sub-step segment is tested against the capture sphere. Once the body
//! is captured the run is over until it is reinitialized.

use bevy::log::{debug, warn};
use bevy::math::DVec3;
use bevy::prelude::Resource;

use super::gravity::compute_acceleration;
use super::trail::Trail;
use crate::collision::{ImpactEvent, is_captured, segment_entry, surface_point};
use crate::types::{
    Attractor, CelestialBody, DISTANCE_SCALE, ImpactScenario, START_POSITION, ScenarioError,
    TIME_SCALE, TRAIL_LENGTH,
};

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for the approach integrator.
#[derive(Resource, Clone, Debug)]
pub struct IntegratorConfig {
    /// Scene units per meter. Default: 1 / 3e6 (1 unit = 3,000 km).
    pub distance_scale: f64,
    /// Simulated seconds per real second. Default: 1800 (30 minutes).
    pub time_scale: f64,
    /// Longest sub-step in simulated seconds. Default: 60.
    pub max_substep: f64,
    /// Sub-step cap per frame, keeps a single step bounded. Default: 4096.
    pub max_substeps: usize,
    /// Positions kept for the trail. Default: 200.
    pub trail_length: usize,
    /// Far-field start, in scene units.
    pub start_position: DVec3,
    /// Multiplier from impulse magnitude to delta-v in m/s. Default: 1.
    pub impulse_gain: f64,
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        Self {
            distance_scale: DISTANCE_SCALE,
            time_scale: TIME_SCALE,
            max_substep: 60.0,
            max_substeps: 4096,
            trail_length: TRAIL_LENGTH,
            start_position: START_POSITION,
            impulse_gain: 1.0,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum ApproachError {
    #[error("body has already impacted; reinitialize before stepping")]
    AlreadyImpacted,

    #[error("invalid impulse magnitude {0} (must be finite and non-negative)")]
    InvalidImpulse(f64),

    #[error("invalid time step {0} s (must be finite and non-negative)")]
    InvalidTimeStep(f64),

    #[error(transparent)]
    Scenario(#[from] ScenarioError),
}

// =============================================================================
// Pure stepping
// =============================================================================

/// Build the starting state for a scenario.
///
/// The body starts at the configured far-field position, heading straight
/// for the origin at the scenario's speed converted to scene units.
pub fn initialize(scenario: &ImpactScenario, config: &IntegratorConfig) -> CelestialBody {
    let heading = (-config.start_position)
        .try_normalize()
        .unwrap_or(DVec3::NEG_X);
    let velocity = heading * scenario.velocity_mps() * config.distance_scale;

    CelestialBody::new(scenario.mass(), config.start_position, velocity)
}

/// Body entered the capture sphere during an [`advance`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Capture {
    /// Entry point on the capture sphere surface.
    pub position: DVec3,
    pub velocity: DVec3,
    /// Simulated seconds into the advance at which the body entered.
    pub after: f64,
}

/// Result of advancing a body by one frame.
#[derive(Clone, Debug, PartialEq)]
pub enum Advance {
    Moved {
        body: CelestialBody,
        /// Smallest distance to the attractor seen during the frame.
        closest_approach: f64,
    },
    Captured(Capture),
}

/// Advance `body` by `dt` real seconds without mutating it.
///
/// `dt == 0` returns the body unchanged. A body already inside the capture
/// radius (including one sitting on the center) is captured immediately.
pub fn advance(
    body: &CelestialBody,
    attractor: &Attractor,
    dt: f64,
    config: &IntegratorConfig,
) -> Result<Advance, ApproachError> {
    if !dt.is_finite() || dt < 0.0 {
        return Err(ApproachError::InvalidTimeStep(dt));
    }

    let mut position = body.position;
    let mut velocity = body.velocity;

    if is_captured(position, attractor) {
        return Ok(Advance::Captured(Capture {
            position: surface_point(position, -velocity, attractor),
            velocity,
            after: 0.0,
        }));
    }

    let mut closest_approach = body.distance_to(attractor);
    if dt == 0.0 {
        return Ok(Advance::Moved {
            body: body.clone(),
            closest_approach,
        });
    }

    let total = dt * config.time_scale;
    let wanted = (total / config.max_substep).ceil().max(1.0);
    let substeps = if wanted > config.max_substeps as f64 {
        warn!(
            "Frame of {:.0} simulated seconds needs {:.0} sub-steps, capped at {}",
            total, wanted, config.max_substeps
        );
        config.max_substeps.max(1)
    } else {
        wanted as usize
    };
    let h = total / substeps as f64;

    for i in 0..substeps {
        // Outside the capture radius, so the direction is defined
        let Some(acc) = compute_acceleration(position, attractor, config.distance_scale) else {
            return Ok(Advance::Captured(Capture {
                position: surface_point(position, -velocity, attractor),
                velocity,
                after: i as f64 * h,
            }));
        };

        velocity += acc * h * config.distance_scale;
        let next = position + velocity * h;

        if let Some(t) = segment_entry(position, next, attractor) {
            let entry = position + (next - position) * t;
            return Ok(Advance::Captured(Capture {
                position: surface_point(entry, -velocity, attractor),
                velocity,
                after: (i as f64 + t) * h,
            }));
        }

        position = next;
        closest_approach = closest_approach.min((attractor.position - position).length());
    }

    Ok(Advance::Moved {
        body: CelestialBody::new(body.mass, position, velocity),
        closest_approach,
    })
}

// =============================================================================
// Owned run state
// =============================================================================

/// Where a run stands.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ApproachStatus {
    #[default]
    Approaching,
    Impacted(ImpactEvent),
}

/// What a single [`ApproachIntegrator::step`] produced.
#[derive(Clone, Debug, PartialEq)]
pub enum StepOutcome {
    Moving,
    Impact(ImpactEvent),
}

impl StepOutcome {
    pub fn is_impact(&self) -> bool {
        matches!(self, StepOutcome::Impact(_))
    }
}

/// One simulation run: the body, its trail and the impulse bookkeeping.
///
/// Owned by exactly one driver. Independent runs each own their integrator
/// and may share the same [`Attractor`].
#[derive(Clone, Debug)]
pub struct ApproachIntegrator {
    scenario: ImpactScenario,
    body: CelestialBody,
    trail: Trail,
    status: ApproachStatus,
    /// Last impulse magnitude written into the body's velocity.
    applied_impulse: Option<f64>,
    /// Simulated seconds since initialization.
    elapsed: f64,
    closest_approach: f64,
    config: IntegratorConfig,
}

impl ApproachIntegrator {
    /// Start a run for an already validated scenario.
    pub fn new(scenario: ImpactScenario, config: IntegratorConfig) -> Self {
        let body = initialize(&scenario, &config);
        Self::from_body(scenario, body, config)
    }

    /// Start a run from raw diameter (m) and velocity (km/s).
    pub fn from_parameters(
        diameter_m: f64,
        velocity_kps: f64,
        config: IntegratorConfig,
    ) -> Result<Self, ApproachError> {
        let scenario = ImpactScenario::new(diameter_m, velocity_kps)?;
        Ok(Self::new(scenario, config))
    }

    /// Start a run from an explicit body state instead of the far-field start.
    pub fn from_body(scenario: ImpactScenario, body: CelestialBody, config: IntegratorConfig) -> Self {
        Self {
            scenario,
            trail: Trail::new(body.position, config.trail_length),
            closest_approach: f64::INFINITY,
            body,
            status: ApproachStatus::Approaching,
            applied_impulse: None,
            elapsed: 0.0,
            config,
        }
    }

    /// Replace the whole run with a fresh one for `scenario`.
    ///
    /// The new state is built completely before it replaces the old one.
    pub fn reinitialize(&mut self, scenario: ImpactScenario) {
        *self = Self::new(scenario, self.config.clone());
    }

    /// Deflect the body by setting its y-velocity from `magnitude`.
    ///
    /// Each distinct non-zero magnitude is applied once; presenting the same
    /// value again has no effect. Zero is ignored.
    ///
    /// Returns `true` if the velocity changed.
    pub fn apply_impulse(&mut self, magnitude: f64) -> Result<bool, ApproachError> {
        if !magnitude.is_finite() || magnitude < 0.0 {
            return Err(ApproachError::InvalidImpulse(magnitude));
        }
        if self.is_impacted() {
            return Err(ApproachError::AlreadyImpacted);
        }
        if magnitude == 0.0 || self.applied_impulse == Some(magnitude) {
            return Ok(false);
        }

        let delta_v = magnitude * self.config.impulse_gain;
        self.body.velocity.y = delta_v * self.config.distance_scale;
        self.applied_impulse = Some(magnitude);

        debug!(
            "Deflection impulse {} applied ({:.1} m/s lateral)",
            magnitude, delta_v
        );
        Ok(true)
    }

    /// Advance the run by `dt` real seconds.
    ///
    /// Returns [`StepOutcome::Impact`] exactly once, on the step where the
    /// body is captured. Any later call fails with
    /// [`ApproachError::AlreadyImpacted`].
    pub fn step(&mut self, attractor: &Attractor, dt: f64) -> Result<StepOutcome, ApproachError> {
        if self.is_impacted() {
            return Err(ApproachError::AlreadyImpacted);
        }

        match advance(&self.body, attractor, dt, &self.config)? {
            Advance::Moved {
                body,
                closest_approach,
            } => {
                self.closest_approach = self.closest_approach.min(closest_approach);
                if dt > 0.0 {
                    self.body = body;
                    self.elapsed += dt * self.config.time_scale;
                    self.trail.push(self.body.position);
                }
                Ok(StepOutcome::Moving)
            }
            Advance::Captured(capture) => {
                let event = ImpactEvent {
                    time: self.elapsed + capture.after,
                    position: capture.position,
                    velocity: capture.velocity,
                };

                self.body.position = capture.position;
                self.body.velocity = capture.velocity;
                self.elapsed = event.time;
                self.closest_approach = attractor.capture_radius;
                self.trail.push(capture.position);
                self.status = ApproachStatus::Impacted(event.clone());

                Ok(StepOutcome::Impact(event))
            }
        }
    }

    pub fn scenario(&self) -> &ImpactScenario {
        &self.scenario
    }

    pub fn body(&self) -> &CelestialBody {
        &self.body
    }

    pub fn position(&self) -> DVec3 {
        self.body.position
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn status(&self) -> &ApproachStatus {
        &self.status
    }

    pub fn is_impacted(&self) -> bool {
        matches!(self.status, ApproachStatus::Impacted(_))
    }

    /// The impact, once it has happened.
    pub fn impact(&self) -> Option<&ImpactEvent> {
        match &self.status {
            ApproachStatus::Impacted(event) => Some(event),
            ApproachStatus::Approaching => None,
        }
    }

    pub fn applied_impulse(&self) -> Option<f64> {
        self.applied_impulse
    }

    /// Simulated seconds since initialization.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Smallest distance to the attractor seen so far, in scene units.
    ///
    /// `None` before the first step.
    pub fn closest_approach(&self) -> Option<f64> {
        self.closest_approach
            .is_finite()
            .then_some(self.closest_approach)
    }

    pub fn config(&self) -> &IntegratorConfig {
        &self.config
    }
}

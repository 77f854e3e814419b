//! Core physics types and constants for the impact simulator.

use bevy::math::DVec3;
use bevy::prelude::Resource;

/// Physical constants (SI units)

/// Gravitational constant (m³·kg⁻¹·s⁻²)
pub const G: f64 = 6.6743e-11;

/// Mass of Earth in kg
pub const EARTH_MASS: f64 = 5.972e24;

/// Mean Earth radius used for great-circle distances (km)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Bulk density assumed for every impactor (kg/m³, stony asteroid average)
pub const ASTEROID_DENSITY: f64 = 3000.0;

/// Joules released by one megaton of TNT
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Scene units per meter: 1 unit in scene space = 3,000 km.
pub const DISTANCE_SCALE: f64 = 1.0 / 3.0e6;

/// Simulated seconds per real second (30 minutes).
pub const TIME_SCALE: f64 = 60.0 * 30.0;

/// Rendered radius of the attractor in scene units. Bodies closer than this
/// to the attractor's center have impacted.
pub const CAPTURE_RADIUS: f64 = 2.0;

/// Number of positions kept for trail rendering.
pub const TRAIL_LENGTH: usize = 200;

/// Far-field starting point for every run, in scene units.
pub const START_POSITION: DVec3 = DVec3::new(30.0, 0.0, 0.0);

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Rejected scenario inputs.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum ScenarioError {
    #[error("invalid diameter {0} m (must be finite and non-negative)")]
    InvalidDiameter(f64),

    #[error("invalid velocity {0} km/s (must be finite and non-negative)")]
    InvalidVelocity(f64),
}

/// Mass of a sphere of asteroid material with the given diameter.
///
/// The estimator and the integrator both call this; neither stores the other's
/// result.
pub fn spherical_mass(diameter_m: f64) -> f64 {
    let radius = diameter_m / 2.0;
    let volume = (4.0 / 3.0) * std::f64::consts::PI * radius.powi(3);
    ASTEROID_DENSITY * volume
}

/// Input to a single estimation or simulation run.
///
/// Zero values are allowed and yield all-zero estimates; negative and
/// non-finite values are rejected at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpactScenario {
    diameter_m: f64,
    velocity_kps: f64,
}

impl ImpactScenario {
    /// Validate and build a scenario.
    pub fn new(diameter_m: f64, velocity_kps: f64) -> Result<Self, ScenarioError> {
        if !diameter_m.is_finite() || diameter_m < 0.0 {
            return Err(ScenarioError::InvalidDiameter(diameter_m));
        }
        if !velocity_kps.is_finite() || velocity_kps < 0.0 {
            return Err(ScenarioError::InvalidVelocity(velocity_kps));
        }
        Ok(Self {
            diameter_m,
            velocity_kps,
        })
    }

    /// Build a scenario from catalog fields that may be absent.
    ///
    /// Missing fields count as zero.
    pub fn from_catalog(
        diameter_m: Option<f64>,
        velocity_kps: Option<f64>,
    ) -> Result<Self, ScenarioError> {
        Self::new(diameter_m.unwrap_or(0.0), velocity_kps.unwrap_or(0.0))
    }

    /// Diameter in meters.
    pub fn diameter_m(&self) -> f64 {
        self.diameter_m
    }

    /// Relative velocity in km/s.
    pub fn velocity_kps(&self) -> f64 {
        self.velocity_kps
    }

    /// Relative velocity in m/s.
    pub fn velocity_mps(&self) -> f64 {
        self.velocity_kps * 1000.0
    }

    /// Mass in kg under the spherical, fixed-density model.
    pub fn mass(&self) -> f64 {
        spherical_mass(self.diameter_m)
    }
}

/// The gravitating body at the origin of scene space.
///
/// Fixed for the lifetime of the process; runs only ever read it.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct Attractor {
    /// Mass in kilograms
    pub mass: f64,
    /// Position in scene units
    pub position: DVec3,
    /// Capture radius in scene units
    pub capture_radius: f64,
}

impl Attractor {
    /// Earth at the origin with its rendered radius as capture radius.
    pub const EARTH: Attractor = Attractor {
        mass: EARTH_MASS,
        position: DVec3::ZERO,
        capture_radius: CAPTURE_RADIUS,
    };

    /// Standard gravitational parameter (m³/s²).
    pub fn gm(&self) -> f64 {
        G * self.mass
    }
}

impl Default for Attractor {
    fn default() -> Self {
        Self::EARTH
    }
}

/// Physical state of the simulated impactor.
#[derive(Clone, Debug, PartialEq)]
pub struct CelestialBody {
    /// Mass in kilograms
    pub mass: f64,
    /// Position in scene units
    pub position: DVec3,
    /// Velocity in scene units per simulated second
    pub velocity: DVec3,
}

impl CelestialBody {
    /// Create a new body state
    pub fn new(mass: f64, position: DVec3, velocity: DVec3) -> Self {
        Self {
            mass,
            position,
            velocity,
        }
    }

    /// Distance from the attractor's center in scene units.
    pub fn distance_to(&self, attractor: &Attractor) -> f64 {
        (attractor.position - self.position).length()
    }

    /// Velocity in km/s (physical units).
    pub fn speed_kps(&self, distance_scale: f64) -> f64 {
        self.velocity.length() / distance_scale / 1000.0
    }
}

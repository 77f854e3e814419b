//! Closed-form impact effect estimates.
//!
//! Energy, crater size and seismic magnitude are simplified scaling laws meant
//! for display, not geophysical models. Every function is pure: zero inputs
//! degrade to zero outputs instead of NaN.

use crate::types::{ImpactScenario, JOULES_PER_MEGATON, ScenarioError, spherical_mass};

/// Crater scaling-law coefficient (meters per joule^(1/3.4)).
const CRATER_COEFFICIENT: f64 = 0.08;

/// Crater scaling-law exponent.
const CRATER_EXPONENT: f64 = 1.0 / 3.4;

/// Offset and divisor of the energy-to-magnitude relation.
const SEISMIC_OFFSET: f64 = 4.4;
const SEISMIC_DIVISOR: f64 = 1.5;

/// Kinetic energy of an impactor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ImpactEnergy {
    pub joules: f64,
    pub megatons: f64,
}

/// Summary statistics shown for one scenario.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ImpactEstimate {
    pub energy_joules: f64,
    pub energy_megatons: f64,
    pub crater_diameter_km: f64,
    /// Richter-equivalent magnitude. Negative for very small energies.
    pub seismic_magnitude: f64,
}

impl ImpactEstimate {
    /// Crater radius in meters, as drawn on the impact map.
    pub fn crater_radius_m(&self) -> f64 {
        self.crater_diameter_km * 1000.0 / 2.0
    }
}

/// Kinetic energy from diameter (m) and relative velocity (km/s).
///
/// A zero in either input gives zero energy. Negative or non-finite inputs
/// are rejected.
pub fn calculate_impact_energy(
    diameter_m: f64,
    velocity_kps: f64,
) -> Result<ImpactEnergy, ScenarioError> {
    let scenario = ImpactScenario::new(diameter_m, velocity_kps)?;
    Ok(energy_of(&scenario))
}

fn energy_of(scenario: &ImpactScenario) -> ImpactEnergy {
    if scenario.diameter_m() == 0.0 || scenario.velocity_kps() == 0.0 {
        return ImpactEnergy::default();
    }

    let mass = spherical_mass(scenario.diameter_m());
    let velocity_mps = scenario.velocity_mps();
    let joules = 0.5 * mass * velocity_mps * velocity_mps;

    ImpactEnergy {
        joules,
        megatons: joules / JOULES_PER_MEGATON,
    }
}

/// Final crater diameter in km.
///
/// `0.08 * E^(1/3.4)` meters; zero for non-positive energy.
pub fn calculate_crater_diameter(energy_joules: f64) -> f64 {
    if energy_joules.is_nan() || energy_joules <= 0.0 {
        return 0.0;
    }
    let crater_diameter_m = CRATER_COEFFICIENT * energy_joules.powf(CRATER_EXPONENT);
    crater_diameter_m / 1000.0
}

/// Equivalent seismic magnitude; zero for non-positive energy.
pub fn calculate_seismic_magnitude(energy_joules: f64) -> f64 {
    if energy_joules.is_nan() || energy_joules <= 0.0 {
        return 0.0;
    }
    (energy_joules.log10() - SEISMIC_OFFSET) / SEISMIC_DIVISOR
}

impl ImpactScenario {
    /// Run every estimator formula for this scenario.
    pub fn estimate(&self) -> ImpactEstimate {
        let energy = energy_of(self);
        ImpactEstimate {
            energy_joules: energy.joules,
            energy_megatons: energy.megatons,
            crater_diameter_km: calculate_crater_diameter(energy.joules),
            seismic_magnitude: calculate_seismic_magnitude(energy.joules),
        }
    }
}

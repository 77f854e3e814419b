//! Preset impactors for the scenario picker.
//!
//! Presets stand in for catalog records when no NEO feed is available, and
//! span the range from airburst-sized rocks to a dinosaur killer. Custom
//! bodies go through [`ImpactScenario::new`] directly.

pub mod presets;

use crate::types::{ImpactScenario, ScenarioError};

pub use presets::SCENARIOS;

/// A predefined impactor.
#[derive(Clone, Copy, Debug)]
pub struct Scenario {
    /// Unique identifier for the scenario.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Brief description of the scenario.
    pub description: &'static str,
    /// Estimated maximum diameter (meters).
    pub diameter_m: f64,
    /// Relative velocity at close approach (km/s).
    pub velocity_kps: f64,
}

impl Scenario {
    /// The validated simulation input for this preset.
    pub fn impact_scenario(&self) -> Result<ImpactScenario, ScenarioError> {
        ImpactScenario::new(self.diameter_m, self.velocity_kps)
    }
}

/// Look up a preset by ID.
pub fn find_scenario(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.id == id)
}

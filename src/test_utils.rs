//! Test utilities for the impact simulator.
//!
//! Provides fixtures for common runs and assertions for the physical
//! invariants the integrator must keep.

use crate::physics::{ApproachIntegrator, IntegratorConfig, StepOutcome};
use crate::types::{Attractor, ImpactScenario};

/// Fixtures for creating test runs.
pub mod fixtures {
    use super::*;

    /// The 100 m, 20 km/s reference impactor.
    pub fn reference_scenario() -> ImpactScenario {
        ImpactScenario::new(100.0, 20.0).expect("reference scenario is valid")
    }

    /// A head-on run of the reference impactor.
    pub fn head_on_run() -> ApproachIntegrator {
        ApproachIntegrator::new(reference_scenario(), IntegratorConfig::default())
    }

    /// A body released at rest from the far-field start.
    pub fn infall_run() -> ApproachIntegrator {
        let scenario = ImpactScenario::new(100.0, 0.0).expect("zero velocity is valid");
        ApproachIntegrator::new(scenario, IntegratorConfig::default())
    }
}

/// Assertions over integrator runs.
pub mod assertions {
    use super::*;

    /// Step until impact or `max_frames`, returning every distance to the
    /// attractor (after each frame) and the frame index of the impact.
    pub fn distances_until_impact(
        integrator: &mut ApproachIntegrator,
        dt: f64,
        max_frames: usize,
    ) -> (Vec<f64>, Option<usize>) {
        let earth = Attractor::EARTH;
        let mut distances = vec![integrator.body().distance_to(&earth)];
        for frame in 0..max_frames {
            let outcome = integrator.step(&earth, dt).expect("valid step");
            distances.push(integrator.body().distance_to(&earth));
            if let StepOutcome::Impact(_) = outcome {
                return (distances, Some(frame));
            }
        }
        (distances, None)
    }

    /// Whether each value is strictly smaller than the previous one.
    pub fn strictly_decreasing(values: &[f64]) -> bool {
        values.windows(2).all(|w| w[1] < w[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infall_run_starts_at_rest() {
        let run = fixtures::infall_run();
        assert_eq!(run.body().velocity, bevy::math::DVec3::ZERO);
    }

    #[test]
    fn test_strictly_decreasing() {
        assert!(assertions::strictly_decreasing(&[3.0, 2.0, 1.0]));
        assert!(!assertions::strictly_decreasing(&[3.0, 3.0, 1.0]));
        assert!(assertions::strictly_decreasing(&[1.0]));
    }

    #[test]
    fn test_head_on_run_reaches_impact() {
        let mut run = fixtures::head_on_run();
        let (_, impact) = assertions::distances_until_impact(&mut run, 0.1, 1_000);
        assert!(impact.is_some());
    }
}

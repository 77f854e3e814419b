//! Common test utilities for integration tests.

use astrostrike::collision::ImpactEvent;
use astrostrike::outcome::{ApproachOutcome, predict_outcome};
use astrostrike::physics::{ApproachIntegrator, IntegratorConfig, StepOutcome};
use astrostrike::types::{Attractor, ImpactScenario};

/// Frame delta used by prediction tests (30 fps).
pub const FRAME_DT: f64 = 1.0 / 30.0;

/// Build a scenario, panicking on invalid input.
pub fn scenario(diameter_m: f64, velocity_kps: f64) -> ImpactScenario {
    ImpactScenario::new(diameter_m, velocity_kps).expect("valid scenario")
}

/// A fresh run with the default configuration.
pub fn run(diameter_m: f64, velocity_kps: f64) -> ApproachIntegrator {
    ApproachIntegrator::new(scenario(diameter_m, velocity_kps), IntegratorConfig::default())
}

/// Step with a fixed delta until impact, returning the event and the number
/// of frames it took.
pub fn run_until_impact(
    integrator: &mut ApproachIntegrator,
    dt: f64,
    max_frames: usize,
) -> Option<(ImpactEvent, usize)> {
    let earth = Attractor::EARTH;
    for frame in 1..=max_frames {
        if let StepOutcome::Impact(event) = integrator.step(&earth, dt).expect("valid step") {
            return Some((event, frame));
        }
    }
    None
}

/// Predicted outcome of the 100 m, 20 km/s reference impactor.
pub fn predict_reference(impulse: f64) -> ApproachOutcome {
    predict_outcome(
        scenario(100.0, 20.0),
        impulse,
        &Attractor::EARTH,
        &IntegratorConfig::default(),
        FRAME_DT,
        20_000,
    )
    .expect("valid prediction")
}

//! Approach simulation for the selected impactor.
//!
//! The integrator itself is plain Rust (see [`ApproachIntegrator`]). This
//! module also provides the Bevy plugin that drives it once per frame: it
//! owns the single active run, applies deflection changes, and publishes the
//! impact when capture happens.

mod gravity;
mod integrator;
mod trail;

#[cfg(test)]
mod proptest_physics;

use bevy::prelude::*;

pub use gravity::{compute_acceleration, orbital_energy};
pub use integrator::{
    Advance, ApproachError, ApproachIntegrator, ApproachStatus, Capture, IntegratorConfig,
    StepOutcome, advance, initialize,
};
pub use trail::Trail;

use crate::collision::{CollisionState, ImpactEvent};
use crate::types::{Attractor, ImpactScenario};

/// Plugin providing the frame-driven approach simulation.
///
/// Adds:
/// - `Attractor`, `IntegratorConfig`, `DeflectionControl`, `CollisionState`
///   and `ActiveApproach` resources (existing ones are kept)
/// - `LoadScenario` and `ImpactEvent` messages
/// - scenario loading, deflection and stepping systems, chained in `Update`
pub struct ApproachPlugin;

impl Plugin for ApproachPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Attractor>()
            .init_resource::<IntegratorConfig>()
            .init_resource::<DeflectionControl>()
            .init_resource::<CollisionState>()
            .init_resource::<ActiveApproach>()
            .add_message::<LoadScenario>()
            .add_message::<ImpactEvent>()
            .add_systems(
                Update,
                (load_scenario, apply_deflection, approach_step)
                    .chain()
                    .in_set(ApproachSystems),
            );
    }
}

/// System set containing the approach systems, for ordering consumers after
/// them.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApproachSystems;

/// Request to start a new run, replacing the current one.
#[derive(Message, Clone, Copy, Debug)]
pub struct LoadScenario(pub ImpactScenario);

/// Deflection slider value. Changing it applies a new impulse.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct DeflectionControl {
    pub impulse: f64,
}

/// The one run driven by the frame loop.
#[derive(Resource, Default)]
pub struct ActiveApproach {
    pub integrator: Option<ApproachIntegrator>,
    /// While paused, frames do not advance the run.
    pub paused: bool,
}

impl ActiveApproach {
    pub fn integrator(&self) -> Option<&ApproachIntegrator> {
        self.integrator.as_ref()
    }

    pub fn is_impacted(&self) -> bool {
        self.integrator
            .as_ref()
            .is_some_and(ApproachIntegrator::is_impacted)
    }
}

/// Start a fresh run when a scenario is loaded.
///
/// Only the most recent request in a frame counts. The deflection control is
/// zeroed and the previous impact is forgotten.
fn load_scenario(
    mut requests: MessageReader<LoadScenario>,
    mut active: ResMut<ActiveApproach>,
    mut deflection: ResMut<DeflectionControl>,
    mut collision_state: ResMut<CollisionState>,
    config: Res<IntegratorConfig>,
) {
    let Some(LoadScenario(scenario)) = requests.read().last().copied() else {
        return;
    };

    active.integrator = Some(ApproachIntegrator::new(scenario, config.clone()));
    deflection.set_if_neq(DeflectionControl::default());
    collision_state.clear();

    info!(
        "Loaded scenario: {:.0} m at {:.2} km/s",
        scenario.diameter_m(),
        scenario.velocity_kps()
    );
}

/// Apply the deflection control whenever it changes.
fn apply_deflection(deflection: Res<DeflectionControl>, mut active: ResMut<ActiveApproach>) {
    if !deflection.is_changed() {
        return;
    }
    let Some(integrator) = active.integrator.as_mut() else {
        return;
    };
    if integrator.is_impacted() {
        return;
    }

    match integrator.apply_impulse(deflection.impulse) {
        Ok(true) => info!("Deflection impulse set to {}", deflection.impulse),
        Ok(false) => {}
        Err(err) => warn!("Ignoring deflection control: {err}"),
    }
}

/// Advance the active run by this frame's delta.
fn approach_step(
    time: Res<Time>,
    attractor: Res<Attractor>,
    mut active: ResMut<ActiveApproach>,
    mut collision_state: ResMut<CollisionState>,
    mut impacts: MessageWriter<ImpactEvent>,
) {
    let ActiveApproach { integrator, paused } = &mut *active;
    if *paused {
        return;
    }
    let Some(integrator) = integrator.as_mut() else {
        return;
    };
    if integrator.is_impacted() {
        return;
    }

    match integrator.step(&attractor, time.delta_secs_f64()) {
        Ok(StepOutcome::Moving) => {}
        Ok(StepOutcome::Impact(event)) => {
            info!(
                "IMPACT! at ({:.2}, {:.2}, {:.2}) after {:.1} h at {:.2} km/s",
                event.position.x,
                event.position.y,
                event.position.z,
                event.time / 3600.0,
                event.speed_kps(integrator.config().distance_scale),
            );
            collision_state.last_impact = Some(event.clone());
            impacts.write(event);
        }
        Err(err) => warn!("Approach step failed: {err}"),
    }
}
